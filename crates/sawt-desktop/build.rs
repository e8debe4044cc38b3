use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Mirrors `sawt_core::config::ClientConfig`; only public values are embedded.
#[derive(Debug, Default, Serialize)]
struct DesktopBootstrapConfig {
    firebase_api_key: Option<String>,
    firebase_project_id: Option<String>,
    auth_emulator_host: Option<String>,
    firestore_emulator_host: Option<String>,
    admin_email: Option<String>,
    users_collection: Option<String>,
}

const EMBEDDED_VARS: [&str; 6] = [
    "FIREBASE_API_KEY",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_AUTH_EMULATOR_HOST",
    "FIRESTORE_EMULATOR_HOST",
    "SAWT_ADMIN_EMAIL",
    "SAWT_USERS_COLLECTION",
];

fn main() {
    for name in EMBEDDED_VARS {
        println!("cargo:rerun-if-env-changed={name}");
    }

    if let Err(error) = write_desktop_bootstrap_config() {
        println!("cargo:warning=failed to generate desktop bootstrap config: {error}");
    }
}

fn write_desktop_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = DesktopBootstrapConfig {
        firebase_api_key: env_var_trimmed("FIREBASE_API_KEY"),
        firebase_project_id: env_var_trimmed("FIREBASE_PROJECT_ID"),
        auth_emulator_host: env_var_trimmed("FIREBASE_AUTH_EMULATOR_HOST"),
        firestore_emulator_host: env_var_trimmed("FIRESTORE_EMULATOR_HOST"),
        admin_email: env_var_trimmed("SAWT_ADMIN_EMAIL"),
        users_collection: env_var_trimmed("SAWT_USERS_COLLECTION"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("desktop-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        println!("cargo:rerun-if-changed={}", candidate.display());
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

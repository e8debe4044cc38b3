use clap::Parser;
use pretty_assertions::assert_eq;
use sawt_core::auth::MemoryBackend;
use sawt_core::config::ClientConfig;
use sawt_core::{messages, AdminPolicy, AuthDispatcher, AuthMode, CredentialForm, UserProfile};

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::auth_cmd::firebase_dispatcher;
use crate::commands::common::{
    authenticate, format_profile_lines, resolve_password, ENV_PASSWORD,
};
use crate::commands::config::{config_json, format_config_lines};
use crate::error::CliError;

fn memory_dispatcher() -> AuthDispatcher<MemoryBackend, MemoryBackend> {
    let backend = MemoryBackend::new();
    AuthDispatcher::new(backend.clone(), backend, AdminPolicy::default())
}

fn form(mode: AuthMode, email: &str, password: &str, name: &str) -> CredentialForm {
    CredentialForm::with_credentials(mode, email, password, name)
}

#[test]
fn parses_signup_with_global_flags() {
    let cli = Cli::try_parse_from([
        "sawt",
        "signup",
        "--email",
        "layla@example.com",
        "--name",
        "Layla",
        "--json",
    ])
    .unwrap();
    assert!(cli.json);
    assert!(!cli.verbose);
    match cli.command {
        Commands::Signup {
            email,
            name,
            password,
        } => {
            assert_eq!(email, "layla@example.com");
            assert_eq!(name, "Layla");
            assert_eq!(password, None);
        }
        _ => panic!("expected signup"),
    }
}

#[test]
fn parses_config_show() {
    let cli = Cli::try_parse_from(["sawt", "-v", "config", "show"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show
        }
    ));
}

#[test]
fn login_requires_email() {
    assert!(Cli::try_parse_from(["sawt", "login", "--password", "secret1"]).is_err());
}

#[test]
fn explicit_password_wins_over_environment() {
    let lookup = |name: &str| (name == ENV_PASSWORD).then(|| "from-env".to_string());
    assert_eq!(
        resolve_password(Some("explicit".to_string()), lookup),
        "explicit"
    );
    assert_eq!(resolve_password(None, lookup), "from-env");
    assert_eq!(resolve_password(None, |_| None), "");
}

#[tokio::test]
async fn missing_password_is_rejected_with_form_message() {
    let dispatcher = memory_dispatcher();
    let error = authenticate(
        &dispatcher,
        form(AuthMode::Login, "a@b.c", "", ""),
    )
    .await
    .unwrap_err();
    assert!(matches!(&error, CliError::Rejected(message) if message == messages::FILL_ALL_FIELDS));
}

#[tokio::test]
async fn signup_then_login_through_memory_backend() {
    let dispatcher = memory_dispatcher();
    let created = authenticate(
        &dispatcher,
        form(AuthMode::Signup, "omar@example.com", "secret1", "Omar"),
    )
    .await
    .unwrap();

    let loaded = authenticate(
        &dispatcher,
        form(AuthMode::Login, "omar@example.com", "secret1", ""),
    )
    .await
    .unwrap();
    assert_eq!(loaded.custom_id, created.custom_id);
}

#[tokio::test]
async fn provider_failure_surfaces_localized_message() {
    let dispatcher = memory_dispatcher();
    let error = authenticate(
        &dispatcher,
        form(AuthMode::Login, "ghost@example.com", "secret1", ""),
    )
    .await
    .unwrap_err();
    assert_eq!(error.to_string(), messages::USER_NOT_FOUND);
}

#[test]
fn profile_lines_show_admin_and_vip() {
    let profile = UserProfile::for_signup("uid-1", "Boss", 0, true);
    let lines = format_profile_lines(&profile);
    assert_eq!(lines[0], "Boss (ID: 1)");
    assert!(lines.contains(&"vip:     12".to_string()));
    assert!(lines.contains(&"admin:   yes".to_string()));
}

#[test]
fn profile_lines_skip_vip_for_ordinary_accounts() {
    let profile = UserProfile::for_signup("uid-2", "Layla", 48_213, false);
    let lines = format_profile_lines(&profile);
    assert_eq!(lines[0], "Layla (ID: 48213)");
    assert!(!lines.iter().any(|line| line.starts_with("vip:")));
    assert!(!lines.iter().any(|line| line.starts_with("admin:")));
}

#[test]
fn config_output_redacts_api_key() {
    let config = ClientConfig {
        firebase_api_key: Some("AIzaSyVerySecret9876".to_string()),
        firebase_project_id: Some("sawt-prod".to_string()),
        ..ClientConfig::default()
    };
    let lines = format_config_lines(&config);
    assert!(lines[0].ends_with("****9876"));
    assert!(!lines.iter().any(|line| line.contains("VerySecret")));

    let json = config_json(&config);
    assert_eq!(json["firebase_project_id"], "sawt-prod");
    assert_eq!(json["users_collection"], "users");
}

#[test]
fn dispatcher_requires_firebase_settings() {
    assert!(matches!(
        firebase_dispatcher(&ClientConfig::default()),
        Err(CliError::FirebaseNotConfigured)
    ));
}

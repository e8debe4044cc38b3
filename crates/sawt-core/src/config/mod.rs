//! Client configuration shared by the desktop app and the CLI.
//!
//! Values come from the environment (a `.env` file is loaded by the
//! binaries) and are normalized the same way everywhere: trimmed, with empty
//! strings treated as unset.

use serde::{Deserialize, Serialize};

use crate::admin::AdminPolicy;
use crate::auth::{resolve_optional_firebase_config, FirebaseConfig};
use crate::error::{Error, Result};
use crate::util::{normalize_text_option, redact_secret};

pub const DEFAULT_USERS_COLLECTION: &str = "users";

pub const ENV_FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
pub const ENV_FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const ENV_AUTH_EMULATOR_HOST: &str = "FIREBASE_AUTH_EMULATOR_HOST";
pub const ENV_FIRESTORE_EMULATOR_HOST: &str = "FIRESTORE_EMULATOR_HOST";
pub const ENV_ADMIN_EMAIL: &str = "SAWT_ADMIN_EMAIL";
pub const ENV_USERS_COLLECTION: &str = "SAWT_USERS_COLLECTION";

/// Build- or run-time client configuration.
///
/// Only public values belong here; the Firebase web API key identifies a
/// project and is not a secret.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub firebase_api_key: Option<String>,
    #[serde(default)]
    pub firebase_project_id: Option<String>,
    #[serde(default)]
    pub auth_emulator_host: Option<String>,
    #[serde(default)]
    pub firestore_emulator_host: Option<String>,
    #[serde(default)]
    pub admin_email: Option<String>,
    #[serde(default)]
    pub users_collection: Option<String>,
}

impl ClientConfig {
    /// Read every value from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every value through `lookup`, normalizing as it goes.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            firebase_api_key: normalize_text_option(lookup(ENV_FIREBASE_API_KEY)),
            firebase_project_id: normalize_text_option(lookup(ENV_FIREBASE_PROJECT_ID)),
            auth_emulator_host: normalize_text_option(lookup(ENV_AUTH_EMULATOR_HOST)),
            firestore_emulator_host: normalize_text_option(lookup(ENV_FIRESTORE_EMULATOR_HOST)),
            admin_email: normalize_text_option(lookup(ENV_ADMIN_EMAIL)),
            users_collection: normalize_text_option(lookup(ENV_USERS_COLLECTION)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Fill unset values from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            firebase_api_key: self.firebase_api_key.or(fallback.firebase_api_key),
            firebase_project_id: self.firebase_project_id.or(fallback.firebase_project_id),
            auth_emulator_host: self.auth_emulator_host.or(fallback.auth_emulator_host),
            firestore_emulator_host: self
                .firestore_emulator_host
                .or(fallback.firestore_emulator_host),
            admin_email: self.admin_email.or(fallback.admin_email),
            users_collection: self.users_collection.or(fallback.users_collection),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(email) = normalize_text_option(self.admin_email.clone()) {
            if !email.contains('@') {
                return Err(Error::Config(format!(
                    "{ENV_ADMIN_EMAIL} must be an email address, got '{email}'"
                )));
            }
        }
        if let Some(collection) = normalize_text_option(self.users_collection.clone()) {
            if collection.contains('/') {
                return Err(Error::Config(format!(
                    "{ENV_USERS_COLLECTION} must be a top-level collection id, got '{collection}'"
                )));
            }
        }
        Ok(())
    }

    /// Firebase settings, `None` when the project is not configured.
    ///
    /// Having only one of the API key and project id is an error.
    pub fn firebase(&self) -> Result<Option<FirebaseConfig>> {
        let resolved = resolve_optional_firebase_config(
            self.firebase_api_key.clone(),
            self.firebase_project_id.clone(),
        )?;
        Ok(resolved.map(|mut config| {
            config.auth_emulator_host = normalize_text_option(self.auth_emulator_host.clone());
            config.firestore_emulator_host =
                normalize_text_option(self.firestore_emulator_host.clone());
            config
        }))
    }

    #[must_use]
    pub fn admin_policy(&self) -> AdminPolicy {
        normalize_text_option(self.admin_email.clone())
            .map_or_else(AdminPolicy::default, AdminPolicy::new)
    }

    #[must_use]
    pub fn users_collection(&self) -> String {
        normalize_text_option(self.users_collection.clone())
            .unwrap_or_else(|| DEFAULT_USERS_COLLECTION.to_string())
    }

    /// `(label, value)` pairs for display, with the API key redacted.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let unset = || "(unset)".to_string();
        vec![
            (
                "firebase_api_key",
                self.firebase_api_key
                    .as_deref()
                    .map_or_else(unset, redact_secret),
            ),
            (
                "firebase_project_id",
                self.firebase_project_id.clone().unwrap_or_else(unset),
            ),
            (
                "auth_emulator_host",
                self.auth_emulator_host.clone().unwrap_or_else(unset),
            ),
            (
                "firestore_emulator_host",
                self.firestore_emulator_host.clone().unwrap_or_else(unset),
            ),
            ("admin_email", self.admin_policy().admin_email().to_string()),
            ("users_collection", self.users_collection()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::admin::DEFAULT_ADMIN_EMAIL;
    use crate::auth::AuthError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_means_offline_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert!(config.firebase().unwrap().is_none());
        assert_eq!(config.admin_policy().admin_email(), DEFAULT_ADMIN_EMAIL);
        assert_eq!(config.users_collection(), "users");
    }

    #[test]
    fn values_are_trimmed_and_blank_values_dropped() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_FIREBASE_API_KEY, "  AIzaKey  "),
            (ENV_FIREBASE_PROJECT_ID, "sawt-prod"),
            (ENV_USERS_COLLECTION, "   "),
            (ENV_ADMIN_EMAIL, " Owner@Sawt.app "),
        ]))
        .unwrap();

        let firebase = config.firebase().unwrap().unwrap();
        assert_eq!(firebase.api_key, "AIzaKey");
        assert_eq!(firebase.project_id, "sawt-prod");
        assert_eq!(config.users_collection(), "users");
        assert_eq!(config.admin_policy().admin_email(), "owner@sawt.app");
    }

    #[test]
    fn emulator_hosts_are_carried_into_firebase_config() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_FIREBASE_API_KEY, "fake"),
            (ENV_FIREBASE_PROJECT_ID, "demo-sawt"),
            (ENV_AUTH_EMULATOR_HOST, "127.0.0.1:9099"),
            (ENV_FIRESTORE_EMULATOR_HOST, "127.0.0.1:8080"),
        ]))
        .unwrap();
        let firebase = config.firebase().unwrap().unwrap();
        assert_eq!(firebase.auth_emulator_host.as_deref(), Some("127.0.0.1:9099"));
        assert_eq!(
            firebase.firestore_emulator_host.as_deref(),
            Some("127.0.0.1:8080")
        );
    }

    #[test]
    fn half_configured_firebase_is_an_error() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(ENV_FIREBASE_PROJECT_ID, "sawt-prod")]))
                .unwrap();
        assert!(matches!(
            config.firebase(),
            Err(Error::Auth(AuthError::NotConfigured))
        ));
    }

    #[test]
    fn invalid_admin_email_and_nested_collection_are_rejected() {
        assert!(ClientConfig::from_lookup(lookup_from(&[(ENV_ADMIN_EMAIL, "admin")])).is_err());
        assert!(
            ClientConfig::from_lookup(lookup_from(&[(ENV_USERS_COLLECTION, "a/b")])).is_err()
        );
    }

    #[test]
    fn runtime_values_override_embedded_ones() {
        let embedded = ClientConfig {
            firebase_api_key: Some("embedded".to_string()),
            firebase_project_id: Some("embedded-project".to_string()),
            ..ClientConfig::default()
        };
        let runtime = ClientConfig {
            firebase_project_id: Some("runtime-project".to_string()),
            ..ClientConfig::default()
        };
        let merged = runtime.or(embedded);
        assert_eq!(merged.firebase_api_key.as_deref(), Some("embedded"));
        assert_eq!(merged.firebase_project_id.as_deref(), Some("runtime-project"));
    }

    #[test]
    fn describe_redacts_api_key() {
        let config = ClientConfig {
            firebase_api_key: Some("AIzaSyVerySecret9876".to_string()),
            ..ClientConfig::default()
        };
        let described = config.describe();
        assert_eq!(described[0], ("firebase_api_key", "****9876".to_string()));
        assert_eq!(described[1].1, "(unset)");
    }
}

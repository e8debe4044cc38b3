//! Desktop client configuration: build-time JSON from `OUT_DIR`, overridden
//! by the runtime environment.

use sawt_core::config::ClientConfig;

const EMBEDDED_BOOTSTRAP: &str = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));

/// Loads the generated desktop bootstrap JSON.
///
/// If parsing fails, this logs a warning and returns a default empty config so
/// the app can continue running in offline mode.
pub fn load_bootstrap_config() -> ClientConfig {
    parse_bootstrap_config(EMBEDDED_BOOTSTRAP)
}

fn parse_bootstrap_config(raw: &str) -> ClientConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        ClientConfig::default()
    })
}

/// Runtime values win over embedded ones, field by field.
pub fn resolve_client_config() -> ClientConfig {
    merge_with_runtime(ClientConfig::from_env(), load_bootstrap_config())
}

fn merge_with_runtime(
    runtime: sawt_core::Result<ClientConfig>,
    embedded: ClientConfig,
) -> ClientConfig {
    let merged = match runtime {
        Ok(runtime) => runtime.or(embedded),
        Err(error) => {
            tracing::warn!("Ignoring runtime configuration: {}", error);
            embedded
        }
    };

    match merged.validate() {
        Ok(()) => merged,
        Err(error) => {
            tracing::warn!("Invalid desktop configuration, using defaults: {}", error);
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_generated_json() {
        let config = parse_bootstrap_config(
            r#"{
                "firebase_api_key": "AIzaKey",
                "firebase_project_id": "sawt-prod",
                "auth_emulator_host": null,
                "firestore_emulator_host": null,
                "admin_email": null,
                "users_collection": "members"
            }"#,
        );
        assert_eq!(config.firebase_project_id.as_deref(), Some("sawt-prod"));
        assert_eq!(config.users_collection(), "members");
    }

    #[test]
    fn malformed_json_falls_back_to_default() {
        assert_eq!(parse_bootstrap_config("{not json"), ClientConfig::default());
        assert_eq!(
            parse_bootstrap_config(r#"{"api_base_url": "https://x"}"#),
            ClientConfig::default()
        );
    }

    #[test]
    fn runtime_error_keeps_embedded_values() {
        let embedded = ClientConfig {
            firebase_project_id: Some("embedded".to_string()),
            ..ClientConfig::default()
        };
        let runtime = Err(sawt_core::Error::Config("bad".to_string()));
        assert_eq!(merge_with_runtime(runtime, embedded.clone()), embedded);
    }

    #[test]
    fn invalid_merged_config_is_discarded() {
        let embedded = ClientConfig {
            admin_email: Some("not-an-email".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(
            merge_with_runtime(Ok(ClientConfig::default()), embedded),
            ClientConfig::default()
        );
    }
}

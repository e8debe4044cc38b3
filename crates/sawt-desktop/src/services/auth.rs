//! Authentication backend selection for the desktop app.

use sawt_core::auth::{AuthResult, FirebaseAuthClient, FirestoreProfileStore, MemoryBackend};
use sawt_core::config::ClientConfig;
use sawt_core::{AdminPolicy, AuthDispatcher, Submission, UserProfile};

use crate::bootstrap_config::resolve_client_config;

pub enum DesktopAuthService {
    Firebase(AuthDispatcher<FirebaseAuthClient, FirestoreProfileStore>),
    /// In-process accounts; nothing survives a restart.
    Offline(AuthDispatcher<MemoryBackend, MemoryBackend>),
}

impl DesktopAuthService {
    /// Firebase when configured, otherwise offline.
    pub fn from_config(config: &ClientConfig) -> sawt_core::Result<Self> {
        let Some(firebase) = config.firebase()? else {
            tracing::warn!("Firebase is not configured; running in offline mode");
            return Ok(Self::offline(config.admin_policy()));
        };

        tracing::info!("Using Firebase project {}", firebase.project_id);
        let provider = FirebaseAuthClient::new(&firebase)?;
        let store = FirestoreProfileStore::new(&firebase, config.users_collection())?;
        Ok(Self::Firebase(AuthDispatcher::new(
            provider,
            store,
            config.admin_policy(),
        )))
    }

    pub fn offline(admin: AdminPolicy) -> Self {
        let backend = MemoryBackend::new();
        Self::Offline(AuthDispatcher::new(backend.clone(), backend, admin))
    }

    #[must_use]
    pub const fn is_offline(&self) -> bool {
        matches!(self, Self::Offline(_))
    }

    pub const fn admin_policy(&self) -> &AdminPolicy {
        match self {
            Self::Firebase(dispatcher) => dispatcher.admin_policy(),
            Self::Offline(dispatcher) => dispatcher.admin_policy(),
        }
    }

    pub async fn dispatch(&self, submission: &Submission) -> AuthResult<UserProfile> {
        match self {
            Self::Firebase(dispatcher) => dispatcher.dispatch(submission).await,
            Self::Offline(dispatcher) => dispatcher.dispatch(submission).await,
        }
    }
}

/// Build the service from the resolved configuration.
///
/// A broken Firebase configuration is logged and reported back alongside an
/// offline service so the screen stays usable.
pub fn init_auth_service() -> (DesktopAuthService, Option<String>) {
    let config = resolve_client_config();
    match DesktopAuthService::from_config(&config) {
        Ok(service) => (service, None),
        Err(error) => {
            tracing::error!("Failed to initialize auth service: {}", error);
            (
                DesktopAuthService::offline(config.admin_policy()),
                Some(error.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use sawt_core::{AuthMode, CredentialForm};

    use super::*;

    #[test]
    fn unconfigured_firebase_selects_offline_mode() {
        let service = DesktopAuthService::from_config(&ClientConfig::default()).unwrap();
        assert!(service.is_offline());
    }

    #[test]
    fn configured_firebase_selects_rest_backend() {
        let config = ClientConfig {
            firebase_api_key: Some("fake".to_string()),
            firebase_project_id: Some("demo-sawt".to_string()),
            admin_email: Some("owner@sawt.app".to_string()),
            ..ClientConfig::default()
        };
        let service = DesktopAuthService::from_config(&config).unwrap();
        assert!(!service.is_offline());
        assert_eq!(service.admin_policy().admin_email(), "owner@sawt.app");
    }

    #[test]
    fn half_configured_firebase_is_rejected() {
        let config = ClientConfig {
            firebase_api_key: Some("fake".to_string()),
            ..ClientConfig::default()
        };
        assert!(DesktopAuthService::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn offline_service_signs_up_and_back_in() {
        let service = DesktopAuthService::offline(AdminPolicy::default());
        let mut form =
            CredentialForm::with_credentials(AuthMode::Signup, "admin@bobo.com", "secret1", "Boss");

        let submission = form.begin_submit().unwrap();
        let created = form.complete(service.dispatch(&submission).await).unwrap();
        assert!(created.is_admin);

        form.toggle_mode();
        let submission = form.begin_submit().unwrap();
        let loaded = form.complete(service.dispatch(&submission).await).unwrap();
        assert_eq!(loaded.id, created.id);
    }
}

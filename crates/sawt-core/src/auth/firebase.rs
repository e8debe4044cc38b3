//! Firebase Identity Toolkit REST client.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{AuthError, AuthErrorCode, AuthResult, AuthSession, AuthUser, IdentityProvider};
use crate::util::{compact_text, normalize_text_option};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Public Firebase web configuration.
///
/// The web API key identifies the project and is safe to ship in clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: String,
    /// `host:port` of a local Auth emulator, when running against one
    pub auth_emulator_host: Option<String>,
    /// `host:port` of a local Firestore emulator, when running against one
    pub firestore_emulator_host: Option<String>,
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            auth_emulator_host: None,
            firestore_emulator_host: None,
        }
    }

    #[must_use]
    pub fn identity_toolkit_url(&self) -> String {
        self.auth_emulator_host.as_ref().map_or_else(
            || IDENTITY_TOOLKIT_URL.to_string(),
            |host| format!("http://{host}/identitytoolkit.googleapis.com/v1"),
        )
    }
}

#[derive(Clone)]
pub struct FirebaseAuthClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl FirebaseAuthClient {
    pub fn new(config: &FirebaseConfig) -> AuthResult<Self> {
        let api_key = config.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Firebase API key must not be empty",
            ));
        }

        Ok(Self {
            base_url: config.identity_toolkit_url(),
            api_key,
            client: Client::builder().build()?,
        })
    }

    async fn password_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<AuthSession> {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let response = self
            .client
            .post(format!("{}/accounts:{endpoint}", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(parse_api_error(status, &body));
        }

        let payload = response.json::<IdentityToolkitResponse>().await?;
        Ok(payload.into_session())
    }
}

impl IdentityProvider for FirebaseAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.password_request("signInWithPassword", email, password)
            .await
    }

    async fn create_account(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.password_request("signUp", email, password).await
    }
}

pub fn resolve_optional_firebase_config(
    api_key: Option<String>,
    project_id: Option<String>,
) -> AuthResult<Option<FirebaseConfig>> {
    let api_key = normalize_text_option(api_key);
    let project_id = normalize_text_option(project_id);

    match (api_key, project_id) {
        (None, None) => Ok(None),
        (Some(api_key), Some(project_id)) => Ok(Some(FirebaseConfig::new(api_key, project_id))),
        _ => Err(AuthError::NotConfigured),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityToolkitResponse {
    local_id: String,
    email: Option<String>,
    id_token: String,
}

impl IdentityToolkitResponse {
    fn into_session(self) -> AuthSession {
        AuthSession {
            id_token: self.id_token,
            user: AuthUser {
                id: self.local_id,
                email: self.email,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct IdentityToolkitErrorResponse {
    error: IdentityToolkitError,
}

#[derive(Debug, Deserialize)]
struct IdentityToolkitError {
    message: String,
}

/// Map a REST error reason (`EMAIL_EXISTS`, `WEAK_PASSWORD : ...`) to its
/// SDK-style code.
pub(crate) fn error_code_from_reason(reason: &str) -> AuthErrorCode {
    let reason = reason.split(':').next().unwrap_or(reason).trim();
    match reason {
        "EMAIL_NOT_FOUND" => AuthErrorCode::UserNotFound,
        "INVALID_PASSWORD" => AuthErrorCode::WrongPassword,
        "EMAIL_EXISTS" => AuthErrorCode::EmailAlreadyInUse,
        "WEAK_PASSWORD" => AuthErrorCode::WeakPassword,
        "INVALID_LOGIN_CREDENTIALS" => AuthErrorCode::InvalidCredential,
        "INVALID_EMAIL" => AuthErrorCode::InvalidEmail,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorCode::TooManyRequests,
        "USER_DISABLED" => AuthErrorCode::UserDisabled,
        other => AuthErrorCode::Other(format!(
            "auth/{}",
            other.to_ascii_lowercase().replace('_', "-")
        )),
    }
}

fn parse_api_error(status: StatusCode, body: &str) -> AuthError {
    if let Ok(payload) = serde_json::from_str::<IdentityToolkitErrorResponse>(body) {
        let reason = payload.error.message;
        return AuthError::provider(
            error_code_from_reason(&reason),
            format!("{} ({})", reason.trim(), status.as_u16()),
        );
    }

    let trimmed = compact_text(body);
    let message = if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    };
    AuthError::provider(
        AuthErrorCode::Other("auth/internal-error".to_string()),
        message,
    )
}

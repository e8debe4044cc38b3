//! Provider seams for identity and profile storage.
//!
//! The form logic never talks to a concrete backend. It is handed an
//! [`IdentityProvider`] and a [`ProfileStore`]; production builds plug in the
//! Firebase REST clients, tests and offline builds plug in [`MemoryBackend`].

mod firebase;
mod firestore;
mod memory;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserProfile;

pub use firebase::{resolve_optional_firebase_config, FirebaseAuthClient, FirebaseConfig};
pub use firestore::FirestoreProfileStore;
pub use memory::MemoryBackend;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for profile store requests
    pub id_token: String,
    pub user: AuthUser,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("id_token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Provider error codes, named after the web SDK's `auth/*` codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    InvalidCredential,
    InvalidEmail,
    TooManyRequests,
    UserDisabled,
    Other(String),
}

impl AuthErrorCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::InvalidCredential => "auth/invalid-credential",
            Self::InvalidEmail => "auth/invalid-email",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::UserDisabled => "auth/user-disabled",
            Self::Other(code) => code,
        }
    }

}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Firebase is not configured for this build.")]
    NotConfigured,
    #[error("Invalid auth configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Auth provider rejected the request ({code}): {message}")]
    Provider { code: AuthErrorCode, message: String },
    #[error("Profile store error: {0}")]
    Store(String),
}

impl AuthError {
    pub fn provider(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self::Provider {
            code,
            message: message.into(),
        }
    }

    /// Provider code, when the failure came from the identity provider.
    #[must_use]
    pub fn code(&self) -> Option<&AuthErrorCode> {
        match self {
            Self::Provider { code, .. } => Some(code),
            _ => None,
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Email/password identity operations.
pub trait IdentityProvider: Send + Sync {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = AuthResult<AuthSession>> + Send;

    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = AuthResult<AuthSession>> + Send;
}

/// Profile documents keyed by the provider-issued user id.
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` when the signed-in user has no document.
    fn read_profile(
        &self,
        session: &AuthSession,
    ) -> impl Future<Output = AuthResult<Option<UserProfile>>> + Send;

    /// Write the document once; the store stamps `createdAt` itself.
    fn write_profile(
        &self,
        session: &AuthSession,
        profile: &UserProfile,
    ) -> impl Future<Output = AuthResult<()>> + Send;

    fn custom_id_in_use(
        &self,
        session: &AuthSession,
        custom_id: u32,
    ) -> impl Future<Output = AuthResult<bool>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_debug_redacts_token() {
        let session = AuthSession {
            id_token: "secret-id-token".to_string(),
            user: AuthUser {
                id: "user".to_string(),
                email: None,
            },
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-id-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn error_codes_render_as_sdk_strings() {
        assert_eq!(
            AuthErrorCode::EmailAlreadyInUse.to_string(),
            "auth/email-already-in-use"
        );
        let unknown = AuthErrorCode::Other("auth/network-request-failed".to_string());
        assert_eq!(unknown.as_str(), "auth/network-request-failed");
    }

    #[test]
    fn only_provider_errors_carry_a_code() {
        let error = AuthError::provider(AuthErrorCode::WeakPassword, "too short");
        assert_eq!(error.code(), Some(&AuthErrorCode::WeakPassword));
        assert!(AuthError::Store("boom".to_string()).code().is_none());
    }
}

use thiserror::Error;

use sawt_core::auth::AuthError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] sawt_core::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Firebase is not configured. Set FIREBASE_API_KEY and FIREBASE_PROJECT_ID.")]
    FirebaseNotConfigured,
    /// Localized message shown by the credential form
    #[error("{0}")]
    Rejected(String),
}

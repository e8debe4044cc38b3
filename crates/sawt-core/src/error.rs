//! Error types for sawt-core

use thiserror::Error;

use crate::auth::AuthError;

/// Result type alias using sawt-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sawt-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Provider or profile store error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

//! sawt-core - Core library for Sawt
//!
//! This crate contains the profile model, the credential form state machine
//! and the authentication dispatcher shared by the desktop app and the CLI,
//! plus the provider implementations they plug in (Firebase REST and an
//! in-memory backend).

pub mod admin;
pub mod auth;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod ids;
pub mod messages;
pub mod models;
pub mod util;

pub use admin::{AdminPolicy, AdminRecognition};
pub use dispatcher::AuthDispatcher;
pub use error::{Error, Result};
pub use form::{AuthMode, CredentialForm, FormPhase, FormRejection, Submission};
pub use models::{UserLevel, UserProfile};

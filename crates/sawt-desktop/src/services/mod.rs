//! Application services

mod auth;

pub use auth::{init_auth_service, DesktopAuthService};

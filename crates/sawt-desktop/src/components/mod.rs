//! UI Components
//!
//! Reusable UI components for the desktop application.

mod auth_screen;
mod profile_card;

pub use auth_screen::AuthScreen;
pub use profile_card::ProfileCard;

//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use sawt_core::UserProfile;

use crate::services::DesktopAuthService;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Profile of the signed-in user; `None` shows the auth screen
    pub profile: Signal<Option<UserProfile>>,
    /// Selected authentication backend
    pub auth_service: Signal<Arc<DesktopAuthService>>,
    /// Auth initialization error for UI display
    pub auth_error: Signal<Option<String>>,
}

impl AppState {
    pub fn sign_in(&mut self, profile: UserProfile) {
        tracing::info!("Signed in as {} ({})", profile.name, profile.display_id());
        self.profile.set(Some(profile));
    }

    pub fn sign_out(&mut self) {
        let previous = self.profile.write().take();
        if let Some(profile) = previous {
            tracing::info!("Signed out {}", profile.display_id());
        }
    }
}

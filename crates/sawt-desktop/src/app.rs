//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use sawt_core::UserProfile;

use crate::components::AuthScreen;
use crate::services::init_auth_service;
use crate::state::AppState;
use crate::views::Lobby;

/// Root application component
#[component]
pub fn App() -> Element {
    let profile = use_signal(|| None::<UserProfile>);
    let (service, init_error) = use_hook(|| {
        let (service, error) = init_auth_service();
        (Arc::new(service), error)
    });
    let auth_service = use_signal(|| service);
    let auth_error = use_signal(|| init_error);

    let mut state = use_context_provider(|| AppState {
        profile,
        auth_service,
        auth_error,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                margin: 0;
                font-family: 'Tajawal', 'Segoe UI', system-ui, sans-serif;
            ",

            if profile().is_some() {
                Lobby {}
            } else {
                AuthScreen {
                    on_auth: move |profile| state.sign_in(profile),
                }
            }
        }
    }
}

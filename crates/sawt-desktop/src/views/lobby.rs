//! Lobby view - shown once signed in

use dioxus::prelude::*;

use sawt_core::messages;

use crate::components::ProfileCard;
use crate::state::AppState;
use crate::theme::ScreenTheme;

/// Lobby view component. Renders nothing without a signed-in profile.
#[component]
pub fn Lobby() -> Element {
    let mut state = use_context::<AppState>();
    let Some(profile) = (state.profile)() else {
        return rsx! {};
    };
    let colors = ScreenTheme::for_admin_flag(profile.is_admin).palette();

    rsx! {
        div {
            class: "lobby-container",
            dir: "rtl",
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
                padding: 32px 24px;
                box-sizing: border-box;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            h1 {
                style: "margin: 0; color: {colors.accent};",
                {messages::APP_TITLE}
            }

            ProfileCard { profile }

            button {
                r#type: "button",
                style: "
                    padding: 12px 24px;
                    border-radius: 12px;
                    border: 1px solid {colors.border};
                    background: transparent;
                    color: {colors.text_secondary};
                    cursor: pointer;
                ",
                onclick: move |_| state.sign_out(),
                {messages::SIGN_OUT_BUTTON}
            }
        }
    }
}

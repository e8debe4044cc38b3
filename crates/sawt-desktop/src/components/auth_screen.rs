//! Login / signup screen

use dioxus::prelude::*;

use sawt_core::{messages, CredentialForm, UserProfile};

use crate::state::AppState;
use crate::theme::ScreenTheme;

const SPINNER_KEYFRAMES: &str = "@keyframes sawt-spin { to { transform: rotate(360deg); } }";

/// Credential form. Calls `on_auth` once per successful submission.
#[component]
pub fn AuthScreen(on_auth: EventHandler<UserProfile>) -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(CredentialForm::default);

    let service = (state.auth_service)();
    let init_error = (state.auth_error)();
    let snapshot = form();
    let recognition = snapshot.admin_recognition(service.admin_policy());
    let colors = ScreenTheme::for_recognition(recognition).palette();

    let submitting = snapshot.is_submitting();
    let is_login = snapshot.mode().is_login();
    let submit_label = snapshot.submit_label(service.admin_policy());
    let toggle_label = snapshot.toggle_label();
    let offline = service.is_offline();

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let Ok(submission) = form.write().begin_submit() else {
            return;
        };

        let service = (state.auth_service)();
        spawn(async move {
            let result = service.dispatch(&submission).await;
            let outcome = form.write().complete(result);
            if let Some(profile) = outcome {
                on_auth.call(profile);
            }
        });
    };

    let input_style = format!(
        "
        width: 100%;
        box-sizing: border-box;
        padding: 12px 16px;
        border-radius: 12px;
        border: 1px solid {};
        background: {};
        color: {};
        font-size: 15px;
        text-align: right;
        ",
        colors.border, colors.bg_input, colors.text_primary
    );

    rsx! {
        style { {SPINNER_KEYFRAMES} }

        div {
            class: "auth-screen",
            dir: "rtl",
            style: "
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 24px;
                box-sizing: border-box;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                transition: background 0.3s;
            ",

            div {
                class: "auth-card",
                style: "
                    width: 100%;
                    max-width: 380px;
                    padding: 32px 24px;
                    border-radius: 24px;
                    border: 1px solid {colors.border};
                    background: {colors.bg_card};
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                ",

                div {
                    class: "auth-header",
                    style: "text-align: center; margin-bottom: 8px;",
                    h1 {
                        style: "margin: 0 0 8px; font-size: 30px; color: {colors.accent};",
                        {messages::APP_TITLE}
                    }
                    p {
                        style: "margin: 0; color: {colors.text_secondary}; font-size: 14px;",
                        {messages::APP_SUBTITLE}
                    }
                }

                if recognition.is_recognized() {
                    div {
                        class: "admin-banner",
                        style: "
                            padding: 10px 12px;
                            border-radius: 12px;
                            background: {colors.banner_bg};
                            color: {colors.accent};
                            font-weight: 700;
                            text-align: center;
                        ",
                        "👑 "
                        {messages::ADMIN_RECOGNIZED_BANNER}
                    }
                }

                if offline {
                    div {
                        class: "offline-notice",
                        style: "color: {colors.text_muted}; font-size: 12px; text-align: center;",
                        {messages::OFFLINE_NOTICE}
                    }
                }

                form {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    onsubmit: submit,

                    if !is_login {
                        input {
                            r#type: "text",
                            placeholder: messages::NAME_PLACEHOLDER,
                            value: "{snapshot.name}",
                            disabled: submitting,
                            style: "{input_style}",
                            oninput: move |event: FormEvent| form.write().name = event.value(),
                        }
                    }
                    input {
                        r#type: "email",
                        placeholder: messages::EMAIL_PLACEHOLDER,
                        value: "{snapshot.email}",
                        disabled: submitting,
                        style: "{input_style}",
                        oninput: move |event: FormEvent| form.write().email = event.value(),
                    }
                    input {
                        r#type: "password",
                        placeholder: messages::PASSWORD_PLACEHOLDER,
                        value: "{snapshot.password}",
                        disabled: submitting,
                        style: "{input_style}",
                        oninput: move |event: FormEvent| form.write().password = event.value(),
                    }

                    if let Some(error) = snapshot.error() {
                        div {
                            class: "auth-error",
                            style: "color: {colors.error}; font-size: 13px; text-align: center;",
                            "{error}"
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: submitting,
                        style: "
                            padding: 14px;
                            border: none;
                            border-radius: 12px;
                            background: {colors.accent_gradient};
                            color: {colors.accent_text};
                            font-size: 16px;
                            font-weight: 700;
                            cursor: pointer;
                            display: flex;
                            justify-content: center;
                        ",
                        if submitting {
                            span {
                                class: "spinner",
                                style: "
                                    width: 20px;
                                    height: 20px;
                                    border: 2px solid {colors.accent_text};
                                    border-top-color: transparent;
                                    border-radius: 50%;
                                    animation: sawt-spin 0.8s linear infinite;
                                ",
                            }
                        } else {
                            "{submit_label}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    disabled: submitting,
                    style: "
                        border: none;
                        background: transparent;
                        color: {colors.text_secondary};
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: move |_| form.write().toggle_mode(),
                    "{toggle_label}"
                }

                if let Some(error) = init_error {
                    div {
                        class: "auth-hint",
                        style: "color: {colors.text_muted}; font-size: 12px; direction: ltr;",
                        "{error}"
                    }
                }

                div {
                    class: "auth-footer",
                    style: "color: {colors.text_muted}; font-size: 11px; text-align: center; margin-top: 8px;",
                    {messages::APP_FOOTER}
                }
            }
        }
    }
}

//! Profile card component

use dioxus::prelude::*;

use sawt_core::UserProfile;

use crate::theme::ScreenTheme;

/// Summary of the signed-in user's profile.
#[component]
pub fn ProfileCard(profile: UserProfile) -> Element {
    let colors = ScreenTheme::for_admin_flag(profile.is_admin).palette();
    let frame = profile.frame.clone().filter(|frame| !frame.is_empty());
    let location = profile.location.clone().filter(|location| !location.is_empty());
    let level = profile.level.as_str();
    let display_id = profile.display_id();

    rsx! {
        div {
            class: "profile-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 24px;
                border-radius: 24px;
                border: 1px solid {colors.border};
                background: {colors.bg_card};
            ",

            div {
                style: "position: relative; width: 96px; height: 96px;",
                img {
                    src: "{profile.avatar}",
                    alt: "{profile.name}",
                    style: "width: 96px; height: 96px; border-radius: 50%; border: 3px solid {colors.accent};",
                }
                if let Some(frame) = frame {
                    img {
                        src: "{frame}",
                        style: "position: absolute; inset: -12px; width: 120px; height: 120px;",
                    }
                }
            }

            div {
                class: "profile-name",
                style: "font-size: 22px; font-weight: 800; color: {colors.text_primary};",
                "{profile.name}"
            }
            div {
                style: "color: {colors.text_muted}; font-size: 13px; direction: ltr;",
                "{display_id}"
            }

            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; justify-content: center;",
                span {
                    style: "padding: 2px 10px; border-radius: 999px; background: {colors.banner_bg}; color: {colors.accent};",
                    "{level}"
                }
                if profile.is_vip {
                    span {
                        style: "padding: 2px 10px; border-radius: 999px; background: {colors.accent_gradient}; color: {colors.accent_text};",
                        "VIP {profile.vip_level}"
                    }
                }
                if profile.is_admin {
                    span {
                        style: "padding: 2px 10px; border-radius: 999px; background: {colors.banner_bg}; color: {colors.accent};",
                        "👑"
                    }
                }
            }

            div {
                style: "color: {colors.text_secondary}; font-size: 14px;",
                "{profile.bio}"
            }
            if let Some(location) = location {
                div {
                    style: "color: {colors.text_muted}; font-size: 13px;",
                    "📍 {location}"
                }
            }

            div {
                class: "profile-balances",
                style: "display: flex; gap: 16px; margin-top: 8px; color: {colors.text_secondary}; font-size: 13px;",
                span { "🪙 {profile.coins}" }
                span { "💎 {profile.wealth}" }
                span { "✨ {profile.charm}" }
            }
        }
    }
}

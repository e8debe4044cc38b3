//! Theme configuration for the desktop app

use sawt_core::AdminRecognition;

/// Screen theme; the admin variant is shown once the administrator email is
/// recognized or an administrator is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenTheme {
    #[default]
    Standard,
    Admin,
}

impl ScreenTheme {
    #[must_use]
    pub const fn for_recognition(recognition: AdminRecognition) -> Self {
        match recognition {
            AdminRecognition::Recognized => Self::Admin,
            AdminRecognition::Ordinary => Self::Standard,
        }
    }

    #[must_use]
    pub const fn for_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Self::Admin
        } else {
            Self::Standard
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Standard => &STANDARD_PALETTE,
            Self::Admin => &ADMIN_PALETTE,
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_card: &'static str,
    pub bg_input: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_gradient: &'static str,
    pub accent_text: &'static str,
    pub banner_bg: &'static str,
    pub error: &'static str,
}

/// Amber on slate
pub const STANDARD_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#0f172a",
    bg_card: "rgba(30, 41, 59, 0.85)",
    bg_input: "#1e293b",
    text_primary: "#f8fafc",
    text_secondary: "#cbd5e1",
    text_muted: "#64748b",
    border: "#334155",
    accent: "#f59e0b",
    accent_gradient: "linear-gradient(90deg, #f59e0b, #d97706)",
    accent_text: "#0f172a",
    banner_bg: "rgba(245, 158, 11, 0.12)",
    error: "#f87171",
};

/// Red and gold
pub const ADMIN_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1c0a0a",
    bg_card: "rgba(69, 10, 10, 0.85)",
    bg_input: "#2a0f0f",
    text_primary: "#fef3c7",
    text_secondary: "#fde68a",
    text_muted: "#a16207",
    border: "#7f1d1d",
    accent: "#facc15",
    accent_gradient: "linear-gradient(90deg, #dc2626, #f59e0b, #facc15)",
    accent_text: "#1c0a0a",
    banner_bg: "rgba(220, 38, 38, 0.18)",
    error: "#fca5a5",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_selects_admin_palette() {
        assert_eq!(
            ScreenTheme::for_recognition(AdminRecognition::Recognized),
            ScreenTheme::Admin
        );
        assert_eq!(
            ScreenTheme::for_recognition(AdminRecognition::Ordinary),
            ScreenTheme::Standard
        );
        assert_eq!(ScreenTheme::Admin.palette().accent, ADMIN_PALETTE.accent);
    }

    #[test]
    fn admin_flag_selects_admin_palette() {
        assert_eq!(ScreenTheme::for_admin_flag(true), ScreenTheme::Admin);
        assert_eq!(ScreenTheme::for_admin_flag(false), ScreenTheme::Standard);
    }
}

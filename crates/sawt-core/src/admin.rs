//! Administrator email recognition.
//!
//! One rule for every caller: the typing indicator, signup defaults and the
//! login fallback all compare the trimmed address ASCII case-insensitively.
//! Earlier clients used an exact comparison in some of those places and a
//! lowercased one in others, so the same address could be recognized while
//! typing and then treated as ordinary on login.

use serde::{Deserialize, Serialize};

/// Address that receives the administrator defaults when none is configured.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@bobo.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPolicy {
    admin_email: String,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL)
    }
}

impl AdminPolicy {
    pub fn new(admin_email: impl AsRef<str>) -> Self {
        Self {
            admin_email: admin_email.as_ref().trim().to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Whether `email` names the administrator account.
    ///
    /// This only selects profile defaults and theming. It is not an
    /// authorization check.
    #[must_use]
    pub fn is_admin_email(&self, email: &str) -> bool {
        !self.admin_email.is_empty() && email.trim().eq_ignore_ascii_case(&self.admin_email)
    }

    /// Cosmetic recognition state for the email currently typed in the form.
    #[must_use]
    pub fn recognize(&self, email: &str) -> AdminRecognition {
        if self.is_admin_email(email) {
            AdminRecognition::Recognized
        } else {
            AdminRecognition::Ordinary
        }
    }
}

/// Visual state driven by the email field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminRecognition {
    #[default]
    Ordinary,
    Recognized,
}

impl AdminRecognition {
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        matches!(self, Self::Recognized)
    }
}

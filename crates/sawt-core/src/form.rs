//! Credential form state.
//!
//! UI-agnostic: the desktop screen keeps a [`CredentialForm`] in a signal and
//! the CLI builds one from its arguments. Both go through
//! [`CredentialForm::begin_submit`] and [`CredentialForm::complete`], so
//! validation and error rendering are identical everywhere.

use std::fmt;

use thiserror::Error;

use crate::admin::{AdminPolicy, AdminRecognition};
use crate::auth::AuthError;
use crate::messages;
use crate::models::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    #[must_use]
    pub const fn is_login(self) -> bool {
        matches!(self, Self::Login)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("required fields are empty")]
    MissingFields,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Validated input handed to the dispatcher.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: AuthMode,
    /// Trimmed email
    pub email: String,
    /// Password exactly as typed
    pub password: String,
    /// Trimmed display name, signup only
    pub name: Option<String>,
}

impl fmt::Debug for Submission {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Submission")
            .field("mode", &self.mode)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub email: String,
    pub password: String,
    pub name: String,
    mode: AuthMode,
    phase: FormPhase,
    error: Option<String>,
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CredentialForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("error", &self.error)
            .finish()
    }
}

impl CredentialForm {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Form pre-filled with the given field values, as typed.
    #[must_use]
    pub fn with_credentials(
        mode: AuthMode,
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            ..Self::new(mode)
        }
    }

    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Loading flag; the submit control is disabled while set.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch between login and signup. Clears the displayed error.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error = None;
    }

    #[must_use]
    pub fn admin_recognition(&self, policy: &AdminPolicy) -> AdminRecognition {
        policy.recognize(&self.email)
    }

    #[must_use]
    pub fn submit_label(&self, policy: &AdminPolicy) -> &'static str {
        match self.mode {
            AuthMode::Login if self.admin_recognition(policy).is_recognized() => {
                messages::ADMIN_LOGIN_BUTTON
            }
            AuthMode::Login => messages::LOGIN_BUTTON,
            AuthMode::Signup => messages::SIGNUP_BUTTON,
        }
    }

    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => messages::SWITCH_TO_SIGNUP,
            AuthMode::Signup => messages::SWITCH_TO_LOGIN,
        }
    }

    /// Validate and enter the submitting phase.
    ///
    /// Whitespace-only email or name counts as empty; the password is checked
    /// as typed. A rejection for missing fields sets the inline message; an
    /// in-flight rejection leaves state untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, FormRejection> {
        if self.is_submitting() {
            return Err(FormRejection::InFlight);
        }

        let email = self.email.trim();
        let name = self.name.trim();
        let name_missing = self.mode == AuthMode::Signup && name.is_empty();
        if email.is_empty() || self.password.is_empty() || name_missing {
            self.error = Some(messages::FILL_ALL_FIELDS.to_string());
            return Err(FormRejection::MissingFields);
        }

        let submission = Submission {
            mode: self.mode,
            email: email.to_string(),
            password: self.password.clone(),
            name: (self.mode == AuthMode::Signup).then(|| name.to_string()),
        };
        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(submission)
    }

    /// Leave the submitting phase.
    ///
    /// Returns the profile to forward to the caller on success. Failures are
    /// logged and rendered inline; they never propagate.
    pub fn complete(&mut self, result: Result<UserProfile, AuthError>) -> Option<UserProfile> {
        self.phase = FormPhase::Idle;
        match result {
            Ok(profile) => {
                self.error = None;
                Some(profile)
            }
            Err(error) => {
                tracing::error!("Authentication failed: {}", error);
                self.error = Some(messages::message_for_error(&error).to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthErrorCode;

    fn filled(mode: AuthMode) -> CredentialForm {
        CredentialForm::with_credentials(mode, " layla@example.com ", "secret1", " Layla ")
    }

    #[test]
    fn starts_in_idle_login_mode() {
        let form = CredentialForm::default();
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.error().is_none());
    }

    #[test]
    fn missing_fields_set_fill_all_fields_message() {
        let cases = [
            (AuthMode::Login, "", "secret1", ""),
            (AuthMode::Login, "a@b.c", "", ""),
            (AuthMode::Login, "   ", "secret1", ""),
            (AuthMode::Signup, "a@b.c", "", "Layla"),
            (AuthMode::Signup, "a@b.c", "secret1", ""),
            (AuthMode::Signup, "a@b.c", "secret1", "  "),
        ];
        for (mode, email, password, name) in cases {
            let mut form = CredentialForm::with_credentials(mode, email, password, name);
            assert_eq!(form.begin_submit(), Err(FormRejection::MissingFields));
            assert_eq!(form.error(), Some(messages::FILL_ALL_FIELDS));
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn login_does_not_require_name() {
        let mut form = filled(AuthMode::Login);
        form.name.clear();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.email, "layla@example.com");
        assert_eq!(submission.name, None);
        assert!(form.is_submitting());
    }

    #[test]
    fn signup_submission_trims_name_and_keeps_password() {
        let mut form = filled(AuthMode::Signup);
        form.password = " secret1 ".to_string();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name.as_deref(), Some("Layla"));
        assert_eq!(submission.password, " secret1 ");
    }

    #[test]
    fn spaces_only_password_passes_validation() {
        let mut form =
            CredentialForm::with_credentials(AuthMode::Login, "layla@example.com", "      ", "");
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.password, "      ");
        assert!(form.error().is_none());
    }

    #[test]
    fn with_credentials_starts_idle_in_given_mode() {
        let form = CredentialForm::with_credentials(AuthMode::Signup, "a@b.c", "secret1", "Sara");
        assert_eq!(form.mode(), AuthMode::Signup);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.name, "Sara");
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled(AuthMode::Login);
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormRejection::InFlight));
        assert!(form.error().is_none());
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut form = filled(AuthMode::Login);
        form.begin_submit().unwrap();
        form.complete(Err(AuthError::provider(AuthErrorCode::WrongPassword, "bad")));
        assert_eq!(form.error(), Some(messages::WRONG_PASSWORD));

        form.begin_submit().unwrap();
        assert!(form.error().is_none());
    }

    #[test]
    fn toggling_mode_clears_error() {
        let mut form = CredentialForm::default();
        assert!(form.begin_submit().is_err());
        assert!(form.error().is_some());

        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Signup);
        assert!(form.error().is_none());

        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Login);
    }

    #[test]
    fn complete_maps_failures_to_inline_messages() {
        let mut form = filled(AuthMode::Signup);
        form.begin_submit().unwrap();
        let outcome = form.complete(Err(AuthError::provider(
            AuthErrorCode::EmailAlreadyInUse,
            "EMAIL_EXISTS",
        )));
        assert!(outcome.is_none());
        assert_eq!(form.error(), Some(messages::EMAIL_ALREADY_IN_USE));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn complete_returns_profile_on_success() {
        let mut form = filled(AuthMode::Signup);
        form.begin_submit().unwrap();
        let profile = UserProfile::for_signup("uid", "Layla", 40_000, false);
        assert_eq!(form.complete(Ok(profile.clone())), Some(profile));
        assert!(!form.is_submitting());
    }

    #[test]
    fn labels_follow_mode_and_admin_recognition() {
        let policy = AdminPolicy::default();
        let mut form = CredentialForm::default();
        assert_eq!(form.submit_label(&policy), messages::LOGIN_BUTTON);
        assert_eq!(form.toggle_label(), messages::SWITCH_TO_SIGNUP);

        form.email = "ADMIN@bobo.com".to_string();
        assert_eq!(form.submit_label(&policy), messages::ADMIN_LOGIN_BUTTON);

        form.toggle_mode();
        assert_eq!(form.submit_label(&policy), messages::SIGNUP_BUTTON);
        assert_eq!(form.toggle_label(), messages::SWITCH_TO_LOGIN);
    }
}

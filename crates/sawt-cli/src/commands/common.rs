use chrono::SecondsFormat;
use sawt_core::auth::{IdentityProvider, ProfileStore};
use sawt_core::{messages, AuthDispatcher, CredentialForm, UserProfile};

use crate::error::CliError;

pub const ENV_PASSWORD: &str = "SAWT_PASSWORD";

/// Explicit `--password`, else the value found through `lookup`.
pub fn resolve_password(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    explicit.or_else(|| lookup(ENV_PASSWORD)).unwrap_or_default()
}

/// Submit `form` through `dispatcher` the same way the desktop screen does.
///
/// Rejections and provider failures surface as the form's localized message.
pub async fn authenticate<P: IdentityProvider, S: ProfileStore>(
    dispatcher: &AuthDispatcher<P, S>,
    mut form: CredentialForm,
) -> Result<UserProfile, CliError> {
    let submission = match form.begin_submit() {
        Ok(submission) => submission,
        Err(rejection) => {
            let message = form
                .error()
                .map_or_else(|| rejection.to_string(), ToString::to_string);
            return Err(CliError::Rejected(message));
        }
    };

    let result = dispatcher.dispatch(&submission).await;
    form.complete(result).ok_or_else(|| {
        CliError::Rejected(
            form.error()
                .unwrap_or(messages::CONNECTION_ERROR)
                .to_string(),
        )
    })
}

pub fn format_profile_lines(profile: &UserProfile) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", profile.name, profile.display_id()),
        format!("uid:     {}", profile.id),
        format!("level:   {}", profile.level.as_str()),
        format!(
            "coins:   {}  wealth: {}  charm: {}",
            profile.coins, profile.wealth, profile.charm
        ),
    ];
    if profile.is_vip {
        lines.push(format!("vip:     {}", profile.vip_level));
    }
    if profile.is_admin {
        lines.push("admin:   yes".to_string());
    }
    if let Some(created_at) = profile.created_at {
        lines.push(format!(
            "created: {}",
            created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }
    lines
}

pub fn print_profile(profile: &UserProfile, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        for line in format_profile_lines(profile) {
            println!("{line}");
        }
    }
    Ok(())
}

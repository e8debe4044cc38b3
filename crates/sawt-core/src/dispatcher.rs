//! Login / signup dispatch over an injected identity provider and profile store.

use crate::admin::AdminPolicy;
use crate::auth::{AuthResult, IdentityProvider, ProfileStore};
use crate::form::{AuthMode, Submission};
use crate::ids::{allocate_custom_id, draw_custom_id, DEFAULT_ALLOCATION_ATTEMPTS};
use crate::models::{UserProfile, ADMIN_CUSTOM_ID};
use crate::util::email_local_part;

#[derive(Debug, Clone)]
pub struct AuthDispatcher<P, S> {
    provider: P,
    store: S,
    admin: AdminPolicy,
}

impl<P: IdentityProvider, S: ProfileStore> AuthDispatcher<P, S> {
    pub fn new(provider: P, store: S, admin: AdminPolicy) -> Self {
        Self {
            provider,
            store,
            admin,
        }
    }

    pub const fn admin_policy(&self) -> &AdminPolicy {
        &self.admin
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run a validated form submission in its mode.
    pub async fn dispatch(&self, submission: &Submission) -> AuthResult<UserProfile> {
        match submission.mode {
            AuthMode::Login => self.login(&submission.email, &submission.password).await,
            AuthMode::Signup => {
                let name = submission
                    .name
                    .as_deref()
                    .unwrap_or_else(|| email_local_part(&submission.email));
                self.signup(&submission.email, &submission.password, name)
                    .await
            }
        }
    }

    /// Sign in and load the stored profile.
    ///
    /// A signed-in account without a profile document gets a synthesized
    /// silver-tier profile instead of an error. That profile is not written
    /// back.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<UserProfile> {
        tracing::info!("Signing in {}", email);
        let session = self.provider.sign_in(email, password).await?;

        if let Some(profile) = self.store.read_profile(&session).await? {
            tracing::info!(
                "Loaded profile {} for {}",
                profile.custom_id,
                session.user.id
            );
            return Ok(profile);
        }

        tracing::warn!(
            "No profile document for {}; using fallback profile",
            session.user.id
        );
        Ok(UserProfile::login_fallback(
            session.user.id.clone(),
            email,
            draw_custom_id(),
            self.admin.is_admin_email(email),
        ))
    }

    /// Create the credential, build the starting profile and persist it.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> AuthResult<UserProfile> {
        tracing::info!("Creating account for {}", email);
        let session = self.provider.create_account(email, password).await?;

        let is_admin = self.admin.is_admin_email(email);
        let custom_id = if is_admin {
            ADMIN_CUSTOM_ID
        } else {
            allocate_custom_id(&self.store, &session, DEFAULT_ALLOCATION_ATTEMPTS).await
        };

        let profile = UserProfile::for_signup(session.user.id.clone(), name, custom_id, is_admin);
        self.store.write_profile(&session, &profile).await?;
        tracing::info!(
            "Created profile {} for {} (admin: {})",
            profile.custom_id,
            session.user.id,
            is_admin
        );
        Ok(profile)
    }
}

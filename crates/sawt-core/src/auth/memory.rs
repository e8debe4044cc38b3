//! In-process identity provider and profile store.
//!
//! Used by tests and by the desktop app when no Firebase project is
//! configured. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use super::{
    AuthError, AuthErrorCode, AuthResult, AuthSession, AuthUser, IdentityProvider, ProfileStore,
};
use crate::models::UserProfile;

/// Minimum password length, matching the hosted provider's rule.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Default)]
struct MemoryState {
    accounts: HashMap<String, MemoryAccount>,
    profiles: HashMap<String, UserProfile>,
}

#[derive(Debug, Clone)]
struct MemoryAccount {
    uid: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|error| AuthError::Store(error.to_string()))
    }

    /// Register an account without going through signup, so tests can
    /// exercise login against a credential that has no profile document.
    pub fn insert_account(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        let mut state = self.lock()?;
        let key = account_key(email);
        if state.accounts.contains_key(&key) {
            return Err(AuthError::provider(
                AuthErrorCode::EmailAlreadyInUse,
                format!("{email} is already registered"),
            ));
        }
        let account = MemoryAccount {
            uid: Uuid::now_v7().simple().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let session = session_for(&account);
        state.accounts.insert(key, account);
        Ok(session)
    }

    /// Stored profile for `uid`, if any.
    pub fn profile(&self, uid: &str) -> AuthResult<Option<UserProfile>> {
        Ok(self.lock()?.profiles.get(uid).cloned())
    }

    pub fn profile_count(&self) -> AuthResult<usize> {
        Ok(self.lock()?.profiles.len())
    }
}

impl IdentityProvider for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        let state = self.lock()?;
        let Some(account) = state.accounts.get(&account_key(email)) else {
            return Err(AuthError::provider(
                AuthErrorCode::UserNotFound,
                format!("no account for {email}"),
            ));
        };
        if account.password != password {
            return Err(AuthError::provider(
                AuthErrorCode::WrongPassword,
                "password does not match",
            ));
        }
        Ok(session_for(account))
    }

    async fn create_account(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        if !email.contains('@') {
            return Err(AuthError::provider(
                AuthErrorCode::InvalidEmail,
                format!("{email} is not an email address"),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::provider(
                AuthErrorCode::WeakPassword,
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        self.insert_account(email, password)
    }
}

impl ProfileStore for MemoryBackend {
    async fn read_profile(&self, session: &AuthSession) -> AuthResult<Option<UserProfile>> {
        self.profile(&session.user.id)
    }

    async fn write_profile(&self, session: &AuthSession, profile: &UserProfile) -> AuthResult<()> {
        let mut stored = profile.clone();
        stored.created_at = Some(Utc::now());
        self.lock()?
            .profiles
            .insert(session.user.id.clone(), stored);
        Ok(())
    }

    async fn custom_id_in_use(&self, _session: &AuthSession, custom_id: u32) -> AuthResult<bool> {
        Ok(self
            .lock()?
            .profiles
            .values()
            .any(|profile| profile.custom_id == custom_id))
    }
}

fn account_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn session_for(account: &MemoryAccount) -> AuthSession {
    AuthSession {
        id_token: format!("memory-id-token-{}", account.uid),
        user: AuthUser {
            id: account.uid.clone(),
            email: Some(account.email.clone()),
        },
    }
}

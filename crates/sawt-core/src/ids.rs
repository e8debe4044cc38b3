//! Five-digit custom id allocation.

use std::ops::Range;

use rand::Rng;

use crate::auth::{AuthSession, ProfileStore};

/// Ids handed to ordinary accounts. Id 1 is reserved for the administrator.
pub const CUSTOM_ID_RANGE: Range<u32> = 10_000..100_000;

/// Redraws before giving up on finding a free id.
pub const DEFAULT_ALLOCATION_ATTEMPTS: usize = 8;

/// Uniform draw from [`CUSTOM_ID_RANGE`].
pub fn draw_custom_id() -> u32 {
    rand::rng().random_range(CUSTOM_ID_RANGE)
}

/// Draw an id the store reports as unused.
///
/// When every attempt collides, or the store cannot answer, the last draw is
/// returned unchecked and a warning is logged.
pub async fn allocate_custom_id<S: ProfileStore>(
    store: &S,
    session: &AuthSession,
    attempts: usize,
) -> u32 {
    let mut candidate = draw_custom_id();
    for attempt in 1..=attempts.max(1) {
        match store.custom_id_in_use(session, candidate).await {
            Ok(false) => return candidate,
            Ok(true) => {
                tracing::debug!(
                    "Custom id {} already taken (attempt {}/{})",
                    candidate,
                    attempt,
                    attempts
                );
                candidate = draw_custom_id();
            }
            Err(error) => {
                tracing::warn!(
                    "Custom id lookup failed, keeping unchecked id {}: {}",
                    candidate,
                    error
                );
                return candidate;
            }
        }
    }

    tracing::warn!(
        "No free custom id after {} attempts, keeping unchecked id {}",
        attempts,
        candidate
    );
    candidate
}

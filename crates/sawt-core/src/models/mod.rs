//! Data models for Sawt

mod profile;

pub use profile::{
    seeded_avatar_url, AccountStatus, ProfileStats, UserLevel, UserProfile, ADMIN_COINS,
    ADMIN_CUSTOM_ID, ADMIN_VIP_LEVEL, FALLBACK_COINS, SIGNUP_COINS,
};

//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::email_local_part;

/// Custom id reserved for the administrator account.
pub const ADMIN_CUSTOM_ID: u32 = 1;

/// Starting coin balance for the administrator account.
pub const ADMIN_COINS: u64 = 100_000_000;
/// Starting wealth and charm score for the administrator account.
pub const ADMIN_SCORE: u64 = 9_999_999;
/// VIP tier granted to the administrator account.
pub const ADMIN_VIP_LEVEL: u8 = 12;

/// Starting coin balance for an ordinary account.
pub const SIGNUP_COINS: u64 = 1_000;
/// Coin balance given to a profile synthesized at login.
pub const FALLBACK_COINS: u64 = 5_000;

const ADMIN_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/6024/6024190.png";
const ADMIN_FRAME_URL: &str = "https://cdn-icons-png.flaticon.com/512/2165/2165039.png";
const ADMIN_NAME_STYLE: &str = "text-transparent bg-clip-text bg-gradient-to-r from-red-600 via-amber-500 to-yellow-400 font-black animate-pulse";
const ADMIN_BIO: &str = "المدير العام والمؤسس 👑";
const ADMIN_LOCATION: &str = "المنامة، البحرين";
const SIGNUP_BIO: &str = "مستخدم جديد في صوت العرب";
const FALLBACK_BIO: &str = "مرحباً بك مجدداً 🌹";
const AVATAR_SEED_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Progression tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    /// Freshly registered account
    #[default]
    New,
    Bronze,
    Silver,
    Gold,
    Diamond,
    Vip,
}

impl UserLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Diamond => "diamond",
            Self::Vip => "vip",
        }
    }
}

/// Account status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Owner,
    User,
}

/// Social counters shown on the profile card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub visitors: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub followers: u64,
}

/// Per-user profile document, keyed by the provider-issued id.
///
/// `is_admin` is display metadata only. It is copied from the stored
/// document on login and never used to authorize anything client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Provider-issued unique id
    pub id: String,
    /// Short numeric id shown to other users
    pub custom_id: u32,
    pub name: String,
    pub avatar: String,
    pub level: UserLevel,
    #[serde(default)]
    pub coins: u64,
    #[serde(default)]
    pub wealth: u64,
    #[serde(default)]
    pub charm: u64,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub vip_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_style: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub owned_items: Vec<String>,
    #[serde(default)]
    pub is_following: bool,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    /// Assigned by the profile store when the document is first written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Build the profile persisted at signup.
    ///
    /// Every default branches on `is_admin`; the administrator always gets
    /// [`ADMIN_CUSTOM_ID`] regardless of `custom_id`.
    #[must_use]
    pub fn for_signup(
        id: impl Into<String>,
        name: impl Into<String>,
        custom_id: u32,
        is_admin: bool,
    ) -> Self {
        let name = name.into();
        if is_admin {
            Self {
                id: id.into(),
                custom_id: ADMIN_CUSTOM_ID,
                name,
                avatar: ADMIN_AVATAR_URL.to_string(),
                level: UserLevel::Vip,
                coins: ADMIN_COINS,
                wealth: ADMIN_SCORE,
                charm: ADMIN_SCORE,
                is_vip: true,
                vip_level: ADMIN_VIP_LEVEL,
                frame: Some(ADMIN_FRAME_URL.to_string()),
                name_style: Some(ADMIN_NAME_STYLE.to_string()),
                bio: ADMIN_BIO.to_string(),
                location: Some(ADMIN_LOCATION.to_string()),
                stats: ProfileStats::default(),
                owned_items: Vec::new(),
                is_following: false,
                is_muted: false,
                is_admin: true,
                status: Some(AccountStatus::Owner),
                created_at: None,
            }
        } else {
            Self {
                id: id.into(),
                custom_id,
                avatar: seeded_avatar_url(&name),
                name,
                level: UserLevel::New,
                coins: SIGNUP_COINS,
                wealth: 0,
                charm: 0,
                is_vip: false,
                vip_level: 0,
                frame: Some(String::new()),
                name_style: Some(String::new()),
                bio: SIGNUP_BIO.to_string(),
                location: Some(String::new()),
                stats: ProfileStats::default(),
                owned_items: Vec::new(),
                is_following: false,
                is_muted: false,
                is_admin: false,
                status: Some(AccountStatus::User),
                created_at: None,
            }
        }
    }

    /// Build the profile handed out when a signed-in account has no stored
    /// document. It is not persisted.
    #[must_use]
    pub fn login_fallback(
        id: impl Into<String>,
        email: &str,
        custom_id: u32,
        is_admin: bool,
    ) -> Self {
        Self {
            id: id.into(),
            custom_id,
            name: email_local_part(email).to_string(),
            avatar: seeded_avatar_url(email),
            level: UserLevel::Silver,
            coins: FALLBACK_COINS,
            wealth: 0,
            charm: 0,
            is_vip: false,
            vip_level: 0,
            frame: None,
            name_style: None,
            bio: FALLBACK_BIO.to_string(),
            location: None,
            stats: ProfileStats::default(),
            owned_items: Vec::new(),
            is_following: false,
            is_muted: false,
            is_admin,
            status: None,
            created_at: None,
        }
    }

    /// Custom id formatted for display, e.g. `ID: 48213`
    #[must_use]
    pub fn display_id(&self) -> String {
        format!("ID: {}", self.custom_id)
    }
}

/// Generated cartoon avatar for the given seed.
#[must_use]
pub fn seeded_avatar_url(seed: &str) -> String {
    format!("{AVATAR_SEED_BASE_URL}{}", urlencoding::encode(seed))
}

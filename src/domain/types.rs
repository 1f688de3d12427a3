use chrono::{DateTime, Utc};

/// An issued verification code awaiting redemption, keyed by the 6-digit
/// code string in the registry.
#[derive(Debug, Clone)]
pub struct PendingCode {
    pub roblox_id: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Process-lifetime association between a Roblox identity and a Discord
/// account, created or overwritten by redemption. Never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLink {
    pub roblox_id: String,
    pub discord_id: String,
}

/// Verification code time-to-live in seconds.
pub const CODE_TTL_SECS: i64 = 300;

/// Inclusive bounds of the 6-digit code space.
pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

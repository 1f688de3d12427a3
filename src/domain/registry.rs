use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use tracing::info;

use crate::domain::types::{CODE_MAX, CODE_MIN, CODE_TTL_SECS, PendingCode, VerifiedLink};
use crate::error::VerifyServiceError;

/// Outcome of a redemption attempt. `InvalidCode` is a normal domain outcome,
/// not a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedeemOutcome {
    Linked(VerifiedLink),
    InvalidCode,
}

/// In-memory verification-code registry.
///
/// Owns both maps of the system: pending codes awaiting redemption and the
/// verified links produced by redemption. All operations take the single
/// mutex, so issue, redeem and the expiry sweep are atomic with respect to
/// each other — no caller observes a partially-updated registry.
///
/// Expiry is lazy: entries carry `expires_at` and are treated as absent (and
/// removed) once that instant passes. There are no timers to cancel, and a
/// redeemed code can never be evicted by a stale expiry action.
#[derive(Debug, Default)]
pub struct CodeRegistry {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// code → pending identity
    pending: HashMap<String, PendingCode>,
    /// roblox id → discord id
    links: HashMap<String, String>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh code for `roblox_id`, valid for [`CODE_TTL_SECS`].
    ///
    /// Fails only on a missing identity. The code is unique among currently
    /// pending codes; values freed by redemption or expiry may be drawn again.
    pub fn issue(&self, roblox_id: &str) -> Result<String, VerifyServiceError> {
        self.issue_at(roblox_id, Utc::now())
    }

    /// Redeem `code` on behalf of a Discord user. Single-use: the pending
    /// entry is removed before the link is written, so a second attempt with
    /// the same code always gets `InvalidCode`.
    pub fn redeem(&self, code: &str, discord_id: &str, discord_tag: &str) -> RedeemOutcome {
        self.redeem_at(code, discord_id, discord_tag, Utc::now())
    }

    /// Pure read: the linked Discord id for `roblox_id`, if verified.
    pub fn lookup(&self, roblox_id: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.links.get(roblox_id).cloned()
    }

    /// [`Self::issue`] with an explicit clock, for deterministic expiry tests.
    pub fn issue_at(
        &self,
        roblox_id: &str,
        now: DateTime<Utc>,
    ) -> Result<String, VerifyServiceError> {
        if roblox_id.is_empty() {
            return Err(VerifyServiceError::RobloxIdMissing);
        }

        let mut inner = self.inner.lock().unwrap();

        // Sweep stale entries so an expired code cannot block its value from
        // being drawn again.
        inner.pending.retain(|_, entry| !entry.is_expired(now));

        let mut rng = rand::rng();
        let code = loop {
            let candidate = rng.random_range(CODE_MIN..=CODE_MAX).to_string();
            if !inner.pending.contains_key(&candidate) {
                break candidate;
            }
        };

        inner.pending.insert(
            code.clone(),
            PendingCode {
                roblox_id: roblox_id.to_owned(),
                expires_at: now + Duration::seconds(CODE_TTL_SECS),
            },
        );

        info!(%code, roblox_id, "generated verification code");
        Ok(code)
    }

    /// [`Self::redeem`] with an explicit clock, for deterministic expiry tests.
    pub fn redeem_at(
        &self,
        code: &str,
        discord_id: &str,
        discord_tag: &str,
        now: DateTime<Utc>,
    ) -> RedeemOutcome {
        let mut inner = self.inner.lock().unwrap();

        let expired = matches!(inner.pending.get(code), Some(entry) if entry.is_expired(now));
        if expired {
            inner.pending.remove(code);
            info!(code, "verification code expired");
            return RedeemOutcome::InvalidCode;
        }

        // Remove-first makes redemption single-use.
        let Some(entry) = inner.pending.remove(code) else {
            return RedeemOutcome::InvalidCode;
        };

        inner
            .links
            .insert(entry.roblox_id.clone(), discord_id.to_owned());

        info!(
            roblox_id = %entry.roblox_id,
            discord_id, discord_tag, "linked Roblox account to Discord user"
        );
        RedeemOutcome::Linked(VerifiedLink {
            roblox_id: entry.roblox_id,
            discord_id: discord_id.to_owned(),
        })
    }
}

//! Overdue fine policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days an item may be held before fines start accruing.
pub const DEFAULT_GRACE_DAYS: u32 = 14;

/// Monetary units charged per overdue day.
pub const DEFAULT_DAILY_RATE: u64 = 10;

/// How overdue fines are computed.
///
/// `fine = (elapsed_days - grace_days) * daily_rate` once `elapsed_days`
/// exceeds the grace period, zero before. Only whole elapsed days count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinePolicy {
    pub grace_days: u32,
    pub daily_rate: u64,
}

impl FinePolicy {
    pub const fn new(grace_days: u32, daily_rate: u64) -> Self {
        Self {
            grace_days,
            daily_rate,
        }
    }

    /// Whole days between `borrowed_at` and `now` (floor). A `now` earlier
    /// than `borrowed_at` counts as zero days.
    pub fn elapsed_days(borrowed_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - borrowed_at).num_days()).unwrap_or(0)
    }

    /// Fine for an item held `days` whole days.
    pub fn fine_for_days(&self, days: u64) -> u64 {
        days.saturating_sub(u64::from(self.grace_days))
            .saturating_mul(self.daily_rate)
    }

    /// Fine for an item borrowed at `borrowed_at`, evaluated at `now`.
    pub fn fine_between(&self, borrowed_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        self.fine_for_days(Self::elapsed_days(borrowed_at, now))
    }
}

impl Default for FinePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_DAYS, DEFAULT_DAILY_RATE)
    }
}

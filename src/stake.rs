//! Stake schedule module
//!
//! Client-side views over the timestamps a staking contract reports for a
//! stake: when its lock expires, when the next reward claim opens, and
//! whether a new stake may be placed yet. All values are seconds since the
//! Unix epoch, as the contract stores them.

use crate::{
    calendar::{format_claim_timestamp_at, format_timestamp},
    claim::{compute_next_claim_time, LastClaim},
    settings::DisplaySettings,
    Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds in one lock day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Active stakes a single wallet may hold at once
pub const MAX_ACTIVE_STAKES: usize = 5;

/// Reason a new stake would be refused before submitting it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StakeRejection {
    /// Amount is under the contract's minimum stake
    #[error("Below minimum stake")]
    BelowMinimum,

    /// The previous stake is too recent
    #[error("Stake cooldown not passed yet ({remaining_secs}s remaining)")]
    CooldownActive {
        /// Seconds until staking is allowed again
        remaining_secs: i64,
    },

    /// Wallet already holds the maximum number of active stakes
    #[error("Maximum active stakes reached")]
    MaxActiveStakes,
}

/// Timing of a single stake as recorded on-chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeSchedule {
    /// Stake creation time (Unix seconds)
    pub start_time: i64,
    /// Lock period in whole days
    pub lock_duration_days: i64,
    /// Last reward claim time (Unix seconds)
    pub last_claim_time: i64,
}

impl StakeSchedule {
    /// Time at which the stake may be withdrawn
    pub fn unlock_time(&self) -> i64 {
        self.start_time
            .saturating_add(self.lock_duration_days.saturating_mul(SECONDS_PER_DAY))
    }

    /// Seconds until unlock; zero or negative once unlocked
    pub fn time_left(&self, now: DateTime<Utc>) -> i64 {
        self.unlock_time().saturating_sub(now.timestamp())
    }

    /// Whether the lock has expired
    pub fn is_unlocked(&self, now: DateTime<Utc>) -> bool {
        self.time_left(now) <= 0
    }

    /// Whole lock days left, rounded up
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let left = self.time_left(now);
        let days = left / SECONDS_PER_DAY;
        if left % SECONDS_PER_DAY > 0 { days + 1 } else { days }
    }

    /// Label for the withdraw action: "Unstake" or "Locked (3 days left)"
    pub fn lock_label(&self, now: DateTime<Utc>) -> String {
        if self.is_unlocked(now) {
            return "Unstake".to_string();
        }
        let days = self.days_remaining(now);
        let noun = if days == 1 { "day" } else { "days" };
        format!("Locked ({} {} left)", days, noun)
    }

    /// Next instant at which rewards can be claimed
    pub fn next_claim_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let last_claim = DateTime::from_timestamp(self.last_claim_time, 0)
            .map(LastClaim::Date)
            .unwrap_or(LastClaim::Unrecognized);
        compute_next_claim_time(last_claim, now)
    }
}

/// Contract-side staking limits for one wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePolicy {
    /// Minimum stake amount in token base units
    pub minimum_stake: u128,
    /// Seconds that must pass between two stakes
    pub cooldown_secs: i64,
    /// Time of the wallet's previous stake (Unix seconds)
    pub last_stake_time: i64,
}

impl StakePolicy {
    /// Earliest time a new stake is accepted
    pub fn ready_at(&self) -> i64 {
        self.last_stake_time.saturating_add(self.cooldown_secs)
    }

    /// Whether the cooldown has passed
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.ready_at()
    }

    /// Seconds left in the cooldown, zero when ready
    pub fn remaining(&self, now: DateTime<Utc>) -> i64 {
        self.ready_at().saturating_sub(now.timestamp()).max(0)
    }

    /// Check a stake against the limits before it is submitted
    ///
    /// Checks run in the order the contract would reject: amount, cooldown,
    /// then the active stake count.
    pub fn check(
        &self,
        amount: u128,
        active_stakes: usize,
        now: DateTime<Utc>,
    ) -> std::result::Result<(), StakeRejection> {
        if amount < self.minimum_stake {
            return Err(StakeRejection::BelowMinimum);
        }
        if !self.is_ready(now) {
            return Err(StakeRejection::CooldownActive {
                remaining_secs: self.remaining(now),
            });
        }
        if active_stakes >= MAX_ACTIVE_STAKES {
            return Err(StakeRejection::MaxActiveStakes);
        }
        Ok(())
    }
}

/// Display-ready summary of one stake
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeCard {
    /// Stake start as "YYYY-MM-DD HH:MM:SS"
    pub started: String,
    /// Lock period in days
    pub lock_days: i64,
    /// Withdraw action label
    pub lock_label: String,
    /// Whether withdrawing is possible
    pub unlocked: bool,
    /// Formatted next claim time with relative suffix
    pub next_claim: String,
}

impl StakeCard {
    /// Build the card for `schedule` as seen at `now`
    pub fn build(
        schedule: &StakeSchedule,
        now: DateTime<Utc>,
        settings: &DisplaySettings,
    ) -> Result<Self> {
        let zone = settings.zone();
        let next_claim = schedule.next_claim_time(now);

        Ok(Self {
            started: format_timestamp(schedule.start_time, zone)?,
            lock_days: schedule.lock_duration_days,
            lock_label: schedule.lock_label(now),
            unlocked: schedule.is_unlocked(now),
            next_claim: format_claim_timestamp_at(next_claim, now, zone),
        })
    }
}

//! Stakeclock - claim scheduling and time display for staking dashboards
//!
//! This library provides the client-side time logic of a staking dashboard:
//! when the next reward claim becomes eligible, and how to show that instant
//! to a user ("December 28th, 2026, 10:56 PM (in 2 days 3 hours)").
//!
//! All reward, referral and fee math lives in the staking contract itself;
//! this crate only works with the timestamps the contract reports.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod claim;
pub mod relative;
pub mod settings;
pub mod stake;

pub use calendar::{format_claim_timestamp, format_timestamp, ordinal_suffix};
pub use claim::{compute_next_claim_time, LastClaim, EPOCH_DURATION_MS};
pub use relative::{format_relative_time, RelativeTime, TimeUnit};
pub use settings::DisplaySettings;
pub use stake::{StakeCard, StakePolicy, StakeSchedule};

/// Result type alias for Stakeclock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Stakeclock operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Display settings could not be loaded, validated or saved
    #[error("Settings error: {0}")]
    Settings(String),

    /// Timestamp outside the representable calendar range
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Stake refused by a client-side pre-check
    #[error("Stake rejected: {0}")]
    Stake(#[from] stake::StakeRejection),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize the Stakeclock library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}

#[cfg(test)]
mod tests;

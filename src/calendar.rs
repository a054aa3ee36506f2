//! Absolute date formatting
//!
//! Claim times are shown as "December 28th, 2026, 10:56 PM (in 2 days 3 hours)"
//! in a fixed display zone, with the relative part computed against now.

use crate::{relative::format_relative_time, settings::DisplaySettings, Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, Utc};

/// English ordinal suffix for a day of the month
///
/// 11, 12 and 13 always take "th"; otherwise the last digit decides.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format a claim instant in the default display zone, relative to the wall clock
pub fn format_claim_timestamp(target: DateTime<Utc>) -> String {
    format_claim_timestamp_at(target, Utc::now(), DisplaySettings::default().zone())
}

/// Format a claim instant in `zone`, with the relative suffix computed against `now`
///
/// # Example
/// ```rust
/// use chrono::{Duration, FixedOffset, TimeZone, Utc};
/// use stakeclock::calendar::format_claim_timestamp_at;
///
/// let zone = FixedOffset::east_opt(5 * 3600).unwrap();
/// let target = Utc.with_ymd_and_hms(2026, 12, 28, 17, 56, 0).unwrap();
/// let now = target - Duration::hours(51);
///
/// assert_eq!(
///     format_claim_timestamp_at(target, now, zone),
///     "December 28th, 2026, 10:56 PM (in 2 days 3 hours)"
/// );
/// ```
pub fn format_claim_timestamp_at(
    target: DateTime<Utc>,
    now: DateTime<Utc>,
    zone: FixedOffset,
) -> String {
    let local = target.with_timezone(&zone);
    let day = local.day();

    format!(
        "{} {}{}, {}, {} ({})",
        local.format("%B"),
        day,
        ordinal_suffix(day),
        local.year(),
        local.format("%-I:%M %p"),
        format_relative_time(target, now)
    )
}

/// Format a seconds timestamp as "YYYY-MM-DD HH:MM:SS" in `zone`
pub fn format_timestamp(timestamp_secs: i64, zone: FixedOffset) -> Result<String> {
    let date = DateTime::from_timestamp(timestamp_secs, 0).ok_or_else(|| {
        Error::InvalidTimestamp(format!("{} seconds is out of range", timestamp_secs))
    })?;

    Ok(date.with_timezone(&zone).format("%Y-%m-%d %H:%M:%S").to_string())
}

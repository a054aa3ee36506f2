//! Relative time formatting
//!
//! Renders the distance between two instants as a short phrase such as
//! "in 2 days 3 hours" or "ago 30 seconds", keeping at most the two most
//! significant non-zero units.

use chrono::{DateTime, Utc};
use std::fmt;

/// Maximum number of units shown in a relative time string
pub const MAX_UNITS: usize = 2;

/// Calendar-agnostic duration unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    /// 86400 seconds
    Day,
    /// 3600 seconds
    Hour,
    /// 60 seconds
    Minute,
    /// 1 second
    Second,
}

impl TimeUnit {
    /// All units, most significant first
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// Length of the unit in seconds
    pub fn seconds(self) -> u64 {
        match self {
            TimeUnit::Day => 86_400,
            TimeUnit::Hour => 3_600,
            TimeUnit::Minute => 60,
            TimeUnit::Second => 1,
        }
    }

    /// Singular noun
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Render a magnitude with this unit, e.g. "1 day" or "3 days"
    pub fn quantity(self, magnitude: u64) -> String {
        if magnitude == 1 {
            format!("{} {}", magnitude, self.name())
        } else {
            format!("{} {}s", magnitude, self.name())
        }
    }
}

/// Decomposed offset between a target instant and now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTime {
    /// Whether the target lies strictly after now
    pub is_future: bool,
    /// Non-zero (magnitude, unit) pairs, most significant first, at most [`MAX_UNITS`]
    pub units: Vec<(u64, TimeUnit)>,
}

impl RelativeTime {
    /// Compute the relative offset of `target` from `now`
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = target.signed_duration_since(now).num_milliseconds();
        Self {
            is_future: diff_ms > 0,
            units: decompose_seconds(diff_ms.unsigned_abs() / 1000),
        }
    }

    /// Whether the offset is under one second
    pub fn is_moments(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_moments() {
            return f.write_str("in moments");
        }

        let direction = if self.is_future { "in" } else { "ago" };
        let parts: Vec<String> = self
            .units
            .iter()
            .map(|&(magnitude, unit)| unit.quantity(magnitude))
            .collect();

        write!(f, "{} {}", direction, parts.join(" "))
    }
}

/// Split a whole number of seconds into its two most significant non-zero units
///
/// Zero-magnitude units are skipped rather than shown, so 1 day and 5 seconds
/// becomes `[(1, Day), (5, Second)]`.
pub fn decompose_seconds(total_seconds: u64) -> Vec<(u64, TimeUnit)> {
    let mut remaining = total_seconds;
    let mut units = Vec::with_capacity(MAX_UNITS);

    for unit in TimeUnit::ALL {
        let magnitude = remaining / unit.seconds();
        remaining %= unit.seconds();

        if magnitude > 0 && units.len() < MAX_UNITS {
            units.push((magnitude, unit));
        }
    }

    units
}

/// Format `target` relative to `now`
///
/// # Example
/// ```rust
/// use chrono::{Duration, Utc};
/// use stakeclock::relative::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(now + Duration::seconds(90_061), now), "in 1 day 1 hour");
/// assert_eq!(format_relative_time(now - Duration::seconds(30), now), "ago 30 seconds");
/// assert_eq!(format_relative_time(now, now), "in moments");
/// ```
pub fn format_relative_time(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    RelativeTime::between(target, now).to_string()
}

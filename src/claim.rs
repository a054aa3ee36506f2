//! Next claim time calculation
//!
//! Rewards accrue in fixed 24-hour epochs counted from the last claim the
//! contract recorded. This module turns that last-claim value into the first
//! epoch boundary that still lies in the future.

use crate::Result;
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

/// Length of one reward epoch in milliseconds (24 hours)
pub const EPOCH_DURATION_MS: i64 = 24 * 3600 * 1000;

/// Length of one reward epoch in nanoseconds
const EPOCH_DURATION_NS: i128 = EPOCH_DURATION_MS as i128 * 1_000_000;

/// Raw timestamps below this value are read as seconds, at or above it as milliseconds
pub const SECONDS_THRESHOLD: i64 = 1_000_000_000_000;

/// Last-claim value as reported by the contract-reading layer
///
/// The contract layer hands over whatever it decoded: sometimes an already
/// parsed date, sometimes a bare number whose unit is not known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastClaim {
    /// Absolute instant
    Date(DateTime<Utc>),
    /// Raw numeric timestamp, seconds or milliseconds since the Unix epoch
    Timestamp(i64),
    /// Any shape that cannot be read as a point in time
    Unrecognized,
}

impl LastClaim {
    /// Milliseconds since the Unix epoch, if the value is a usable instant
    ///
    /// Numeric timestamps below [`SECONDS_THRESHOLD`] are scaled from seconds.
    /// Dates are truncated to whole milliseconds.
    pub fn to_millis(&self) -> Option<i64> {
        match *self {
            LastClaim::Date(date) => Some(date.timestamp_millis()),
            LastClaim::Timestamp(value) if value < SECONDS_THRESHOLD => value.checked_mul(1000),
            LastClaim::Timestamp(value) => Some(value),
            LastClaim::Unrecognized => None,
        }
    }

    /// Parse a last-claim value from JSON text, e.g. `1767225600` or `"2026-01-01T00:00:00Z"`
    ///
    /// Only malformed JSON is an error; well-formed JSON of an unusable shape
    /// becomes [`LastClaim::Unrecognized`].
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text.trim())?;
        Ok(LastClaim::from(&value))
    }

    /// Resolve to a calendar instant, if representable
    ///
    /// Dates are returned as-is, keeping sub-millisecond precision.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match *self {
            LastClaim::Date(date) => Some(date),
            _ => self.to_millis().and_then(DateTime::from_timestamp_millis),
        }
    }
}

impl From<DateTime<Utc>> for LastClaim {
    fn from(date: DateTime<Utc>) -> Self {
        LastClaim::Date(date)
    }
}

impl From<i64> for LastClaim {
    fn from(value: i64) -> Self {
        LastClaim::Timestamp(value)
    }
}

impl From<u64> for LastClaim {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(LastClaim::Timestamp)
            .unwrap_or(LastClaim::Unrecognized)
    }
}

impl From<&Value> for LastClaim {
    /// Interpret a decoded JSON field
    ///
    /// Integral numbers become raw timestamps. Fractional seconds are scaled to
    /// milliseconds before truncating; fractional milliseconds are truncated.
    /// RFC 3339 strings become dates. Everything else is unrecognized.
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => {
                if let Some(v) = number.as_i64() {
                    LastClaim::Timestamp(v)
                } else if let Some(v) = number.as_u64() {
                    LastClaim::from(v)
                } else {
                    number.as_f64().map_or(LastClaim::Unrecognized, from_float)
                }
            }
            Value::String(text) => DateTime::parse_from_rfc3339(text)
                .map(|date| LastClaim::Date(date.with_timezone(&Utc)))
                .unwrap_or(LastClaim::Unrecognized),
            _ => LastClaim::Unrecognized,
        }
    }
}

/// Interpret a fractional JSON number
fn from_float(value: f64) -> LastClaim {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return LastClaim::Unrecognized;
    }
    if value.fract() == 0.0 || value >= SECONDS_THRESHOLD as f64 {
        return LastClaim::Timestamp(value.trunc() as i64);
    }

    let millis = (value * 1000.0).trunc();
    if millis.abs() >= i64::MAX as f64 {
        return LastClaim::Unrecognized;
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(LastClaim::Date)
        .unwrap_or(LastClaim::Unrecognized)
}

impl From<Value> for LastClaim {
    fn from(value: Value) -> Self {
        LastClaim::from(&value)
    }
}

/// Compute the next instant at which a claim becomes eligible
///
/// Starting from `last_claim`, whole epochs are added until the result lies
/// strictly after `now`. A last claim that is already in the future is
/// returned unchanged, however far ahead it is.
///
/// Never fails: an unrecognized or unrepresentable input yields `now`.
///
/// # Example
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use stakeclock::claim::compute_next_claim_time;
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
/// let last = now - Duration::hours(30);
///
/// let next = compute_next_claim_time(last, now);
/// assert_eq!(next, now + Duration::hours(18));
/// ```
pub fn compute_next_claim_time(
    last_claim: impl Into<LastClaim>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let last_claim = last_claim.into();

    let Some(last) = last_claim.to_datetime() else {
        tracing::warn!("Unrecognized last claim value {:?}, using current time", last_claim);
        return now;
    };

    match advance_past(last, now) {
        Some(next) => next,
        None => {
            tracing::warn!("Next claim time after {} is out of range, using current time", last);
            now
        }
    }
}

/// Compute the next claim time against the wall clock
///
/// The clock is sampled exactly once.
pub fn next_claim_time_from_now(last_claim: impl Into<LastClaim>) -> DateTime<Utc> {
    compute_next_claim_time(last_claim, Utc::now())
}

/// Number of epochs that have to be added to `last` to pass `now`
pub fn epochs_until_eligible(last: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    if last > now {
        return 0;
    }
    let epochs = nanos_between(last, now) / EPOCH_DURATION_NS + 1;
    i64::try_from(epochs).unwrap_or(i64::MAX)
}

/// Signed nanoseconds from `from` to `to`, without overflow anywhere in chrono's range
fn nanos_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i128 {
    let secs = i128::from(to.timestamp()) - i128::from(from.timestamp());
    let subsec =
        i128::from(to.timestamp_subsec_nanos()) - i128::from(from.timestamp_subsec_nanos());
    secs * 1_000_000_000 + subsec
}

/// Advance `last` by whole epochs until it is strictly after `now`
///
/// `None` when the result leaves chrono's representable range.
fn advance_past(last: DateTime<Utc>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let epochs = epochs_until_eligible(last, now);
    if epochs == 0 {
        return Some(last);
    }

    tracing::debug!("Advancing last claim {} by {} epochs", last, epochs);
    let offset = TimeDelta::try_milliseconds(epochs.checked_mul(EPOCH_DURATION_MS)?)?;
    last.checked_add_signed(offset)
}

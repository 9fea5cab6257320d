//! Timestamp, date and time-of-day generators.

use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use rand::Rng;
use sync_core::Value;

/// Width of the window before "now" that timestamps and dates are drawn from.
pub const LOOKBACK_MILLIS: i64 = 84_000 * 10;

/// Nanoseconds in one day.
pub const NANOS_PER_DAY: u64 = 86_400_000_000_000;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Generate a random instant in `[now - LOOKBACK_MILLIS, now)`.
pub fn generate_timestamp<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Value {
    Value::Timestamp(random_instant(rng, now))
}

/// Generate the UTC calendar date of a random instant in the lookback window.
pub fn generate_date<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Value {
    Value::Date(random_instant(rng, now).date_naive())
}

/// Generate a uniform time of day with nanosecond resolution.
pub fn generate_time<R: Rng>(rng: &mut R) -> Value {
    let nanos = rng.random_range(0..NANOS_PER_DAY);
    let secs = (nanos / NANOS_PER_SECOND) as u32;
    let frac = (nanos % NANOS_PER_SECOND) as u32;
    Value::Time(NaiveTime::from_num_seconds_from_midnight_opt(secs, frac).unwrap_or(NaiveTime::MIN))
}

fn random_instant<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = rng.random_range(1..=LOOKBACK_MILLIS);
    now - TimeDelta::milliseconds(offset)
}

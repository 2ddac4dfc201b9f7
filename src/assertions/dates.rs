//! Instant comparison and the human-readable time difference diagnostic.

use crate::assertions::errors::{report, AssertionFailure, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

const DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

const MILLIS_PER_SECOND: u64 = 1000;
const MILLIS_PER_MINUTE: u64 = MILLIS_PER_SECOND * 60;
const MILLIS_PER_HOUR: u64 = MILLIS_PER_MINUTE * 60;
const MILLIS_PER_DAY: u64 = MILLIS_PER_HOUR * 24;
const MILLIS_PER_YEAR: u64 = MILLIS_PER_DAY * 365;

/// Compare two instants by their millisecond timestamps.
///
/// Sub-millisecond precision is ignored. Time zones only matter through the
/// instant they describe; the offsets themselves are not compared.
pub fn check_dates_eq<A, B>(message: &str, expected: &DateTime<A>, actual: &DateTime<B>) -> Result<()>
where
    A: TimeZone,
    B: TimeZone,
{
    let expected = expected.timestamp_millis();
    let actual = actual.timestamp_millis();
    if expected != actual {
        return Err(AssertionFailure::not_equal(message, expected, actual));
    }
    Ok(())
}

#[track_caller]
pub fn assert_dates_eq<A, B>(message: &str, expected: &DateTime<A>, actual: &DateTime<B>)
where
    A: TimeZone,
    B: TimeZone,
{
    report(check_dates_eq(message, expected, actual))
}

/// Approximate breakdown of a millisecond delta.
///
/// `days` wraps at 24 rather than at a year boundary. Existing expectations
/// depend on that, so it is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDifference {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeDifference {
    pub fn from_millis(delta: u64) -> Self {
        Self {
            years: delta / MILLIS_PER_YEAR,
            days: (delta / MILLIS_PER_DAY) % 24,
            hours: (delta / MILLIS_PER_HOUR) % 24,
            minutes: (delta / MILLIS_PER_MINUTE) % 60,
            seconds: (delta / MILLIS_PER_SECOND) % 60,
        }
    }

    pub fn between(expected: i64, actual: i64) -> Self {
        Self::from_millis(expected.abs_diff(actual))
    }
}

impl fmt::Display for TimeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "~{}y {}d {}h {}m {}s",
            self.years, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Compare two epoch-millisecond values, explaining how far apart they are.
pub fn check_date_millis_eq(message: &str, expected: i64, actual: i64) -> Result<()> {
    if expected == actual {
        return Ok(());
    }

    let mut text = String::new();
    if !message.trim().is_empty() {
        text.push_str(message);
        text.push('\n');
    }
    text.push_str(&format!(
        "Expected: {} ({});\nActual: {} ({});\nTimes differed by {}",
        format_millis(expected),
        expected,
        format_millis(actual),
        actual,
        TimeDifference::between(expected, actual)
    ));

    Err(AssertionFailure::Mismatch(text))
}

#[track_caller]
pub fn assert_date_millis_eq(message: &str, expected: i64, actual: i64) {
    report(check_date_millis_eq(message, expected, actual))
}

/// Render an epoch-millisecond value in UTC.
pub fn format_millis(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(instant) => instant.format(DATE_FORMAT).to_string(),
        None => format!("<out of range: {}>", millis),
    }
}

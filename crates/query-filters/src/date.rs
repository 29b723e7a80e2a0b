//! Day-boundary helpers for time-filter expansion.
//!
//! A date value coming from a date-only picker is ambiguous at sub-day
//! granularity, so time filters are rewritten against the inclusive boundary
//! timestamps of the value's calendar day: `T00:00:00.000` and `T23:59:59.999`.
//!
//! The calendar day is taken in UTC, matching the serialization the raw values
//! carry: inputs are either date-only ISO strings (`YYYY-MM-DD`) or RFC3339
//! timestamps, and timestamps are converted to UTC before the day is fixed.

use chrono::{DateTime, NaiveDate, Utc};

/// Returns the start-of-day boundary (`T00:00:00.000Z`) of the value's
/// calendar day, or `None` if the value is not a recognizable date.
///
/// # Examples
///
/// ```
/// use query_filters_rs::date::start_of_day;
///
/// assert_eq!(
///     start_of_day("2026-03-15").as_deref(),
///     Some("2026-03-15T00:00:00.000Z")
/// );
/// assert!(start_of_day("not a date").is_none());
/// ```
pub fn start_of_day(value: &str) -> Option<String> {
    let day = parse_day(value)?;
    Some(format!("{}T00:00:00.000Z", day.format("%Y-%m-%d")))
}

/// Returns the end-of-day boundary (`T23:59:59.999Z`) of the value's calendar
/// day, or `None` if the value is not a recognizable date.
///
/// # Examples
///
/// ```
/// use query_filters_rs::date::end_of_day;
///
/// assert_eq!(
///     end_of_day("2026-03-15").as_deref(),
///     Some("2026-03-15T23:59:59.999Z")
/// );
/// ```
pub fn end_of_day(value: &str) -> Option<String> {
    let day = parse_day(value)?;
    Some(format!("{}T23:59:59.999Z", day.format("%Y-%m-%d")))
}

/// Extracts the UTC calendar day from a date-only or RFC3339 value.
fn parse_day(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Utilities for date and time formatting
///
/// Provides consistent date formatting across the application
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO timestamp/date and keep the calendar date it names.
///
/// The date is taken in the timestamp's own offset, so
/// "2024-01-05T23:30:00-05:00" is Jan 5 regardless of the browser zone.
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    // Postgres `timestamp` without zone: "2024-01-05T10:00:00.123456"
    // or with a space separator.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    // Postgres `timestamptz` text output: "2024-01-05 10:00:00+00" or
    // "2024-01-05 10:00:00+05:30"
    let with_minutes = if has_hour_only_offset(value) {
        format!("{value}:00")
    } else {
        value.to_string()
    };
    if let Ok(dt) = DateTime::parse_from_str(&with_minutes, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `...+05` / `...-08`: sign followed by exactly two digits at the end.
fn has_hour_only_offset(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len().checked_sub(3) {
        Some(start) => {
            matches!(bytes[start], b'+' | b'-')
                && bytes[start + 1..].iter().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Format ISO datetime string to the short English form "Jan 5, 2024".
///
/// Unparseable input is returned unchanged.
pub fn format_date_short(datetime_str: &str) -> String {
    match parse_calendar_date(datetime_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => datetime_str.to_string(),
    }
}

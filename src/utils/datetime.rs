//! Date and time utility functions
//!
//! Parsing of the timestamp shapes the admin API returns, and pattern-based
//! formatting for date columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Date format used by the API for plain dates
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default display pattern for date columns
pub const DEFAULT_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, API_DATE_FORMAT)
}

/// Parse a timestamp in any of the shapes the API produces
///
/// Accepts RFC3339 (`2025-01-15T14:30:00Z`), ISO 8601 without zone
/// (`2025-01-15T14:30:00`), space separated (`2025-01-15 14:30:00`) and
/// plain dates (`2025-01-15`, read as midnight). Zoned values are converted
/// to UTC before the zone is dropped.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }

    parse_date(value).ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Convert unix seconds to a naive UTC timestamp
pub fn from_unix_seconds(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}

/// Format a timestamp with a strftime pattern
///
/// Returns `None` when the pattern itself is invalid, so callers can fall
/// back instead of panicking inside `Display`.
pub fn format_with_pattern(dt: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

/// Check that a strftime pattern renders without error
pub fn is_valid_pattern(pattern: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2025, 1, 1).and_then(|d| d.and_hms_opt(12, 0, 0));
    sample.is_some_and(|dt| format_with_pattern(&dt, pattern).is_some())
}

/// Format a raw timestamp string for display
///
/// Unparsable input is returned verbatim.
pub fn format_display(value: &str, pattern: &str) -> String {
    parse_timestamp(value)
        .and_then(|dt| format_with_pattern(&dt, pattern))
        .unwrap_or_else(|| value.to_string())
}

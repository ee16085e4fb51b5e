use chrono::NaiveDate;
use rewardsdesk::utils::datetime::*;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2025-01-15").unwrap(), NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    assert!(parse_date("15/01/2025").is_err());
}

#[test]
fn test_parse_timestamp_shapes() {
    assert_eq!(parse_timestamp("2025-01-15T14:30:00Z"), Some(at(2025, 1, 15, 14, 30)));
    assert_eq!(parse_timestamp("2025-01-15T14:30:00"), Some(at(2025, 1, 15, 14, 30)));
    assert_eq!(parse_timestamp("2025-01-15 14:30:00"), Some(at(2025, 1, 15, 14, 30)));
    assert_eq!(parse_timestamp("2025-01-15"), Some(at(2025, 1, 15, 0, 0)));
    assert_eq!(parse_timestamp("not a date"), None);
}

#[test]
fn test_parse_timestamp_converts_offsets_to_utc() {
    assert_eq!(parse_timestamp("2025-01-15T14:30:00-03:00"), Some(at(2025, 1, 15, 17, 30)));
}

#[test]
fn test_from_unix_seconds() {
    assert_eq!(from_unix_seconds(0), Some(at(1970, 1, 1, 0, 0)));
}

#[test]
fn test_format_with_pattern() {
    let dt = at(2025, 3, 9, 8, 5);
    assert_eq!(format_with_pattern(&dt, "%d/%m/%Y").as_deref(), Some("09/03/2025"));
    assert_eq!(format_with_pattern(&dt, "%H:%M").as_deref(), Some("08:05"));
}

#[test]
fn test_invalid_pattern_does_not_panic() {
    let dt = at(2025, 3, 9, 8, 5);
    assert_eq!(format_with_pattern(&dt, "%Q"), None);
    assert!(!is_valid_pattern("%Q"));
    assert!(is_valid_pattern(DEFAULT_DISPLAY_FORMAT));
}

#[test]
fn test_format_display_keeps_unparsable_input() {
    assert_eq!(format_display("2025-01-15T10:00:00Z", "%d/%m/%Y"), "15/01/2025");
    assert_eq!(format_display("soon", "%d/%m/%Y"), "soon");
}

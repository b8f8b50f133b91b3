use crate::{CoreError, format_date, is_iso_date, parse_date};

use chrono::NaiveDate;

#[test]
fn given_iso_date_when_parsed_then_returns_calendar_date() {
    let parsed = parse_date("2025-03-09").unwrap();

    assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    assert_eq!(format_date(parsed), "2025-03-09");
}

#[test]
fn given_unpadded_date_when_parsed_then_rejected() {
    assert!(!is_iso_date("2025-3-9"));
    assert!(matches!(
        parse_date("2025-3-9"),
        Err(CoreError::InvalidDate { .. })
    ));
}

#[test]
fn given_well_shaped_but_impossible_date_when_parsed_then_rejected() {
    assert!(is_iso_date("2025-02-30"));
    assert!(parse_date("2025-02-30").is_err());
}

#[test]
fn given_datetime_string_when_checked_then_not_iso_date() {
    assert!(!is_iso_date("2025-03-09T00:00:00Z"));
    assert!(!is_iso_date(""));
}

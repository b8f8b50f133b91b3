//! Calendar date handling for the `YYYY-MM-DD` wire format.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `s` has the exact `YYYY-MM-DD` shape (digits, zero padded).
pub fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Strict parse: the shape must be `YYYY-MM-DD` and the date must exist.
#[track_caller]
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    if !is_iso_date(s) {
        return Err(CoreError::InvalidDate {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        value: s.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter used by `Task::start` / `Task::end`
pub mod iso_date {
    use super::{format_date, parse_date};

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_date(&s)
            .map_err(|_| de::Error::custom(format!("invalid date '{s}', expected YYYY-MM-DD")))
    }
}

//! ISO-8601 timestamp parsing for request payloads.
//!
//! Clients send timestamps as text. Everything is stored as a naive UTC
//! `NaiveDateTime`, so values carrying an offset are converted to UTC first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Reasons a caller-supplied timestamp was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} is not a valid ISO-8601 timestamp: '{value}'")]
    Malformed { field: &'static str, value: String },
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 timestamp.
///
/// Accepted forms, tried in order:
/// - naive date-time (`2025-01-01T08:30:00`, optional fraction, `T` or space)
/// - date-time with offset (`2025-01-01T08:30:00Z`, `...+02:00`), stored as UTC
/// - date only (`2025-01-01`), stored as midnight
///
/// `field` names the payload field and is echoed in the error.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty { field });
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()));
    }

    Err(TimestampError::Malformed {
        field,
        value: value.to_string(),
    })
}

/// Like [`parse_timestamp`], but passes `None` through untouched.
pub fn parse_optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, TimestampError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}

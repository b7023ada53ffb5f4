//! Sample timestamps and the calendar-date keys derived from them.
//!
//! Forecast services label samples in the queried location's local time. The date key
//! of a sample is the date component of that label, taken as-is: no timezone is applied
//! and nothing is converted to UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use std::fmt;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Anything that can be reduced to the local calendar date it falls on.
pub trait AnyTimestamp {
    /// Returns the date component, or `None` when the value cannot be interpreted.
    fn date_key(&self) -> Option<NaiveDate>;
}

impl AnyTimestamp for NaiveDate {
    fn date_key(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl AnyTimestamp for NaiveDateTime {
    fn date_key(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl AnyTimestamp for DateTime<FixedOffset> {
    fn date_key(&self) -> Option<NaiveDate> {
        // Local date as labelled by the offset, not the UTC date.
        Some(self.date_naive())
    }
}

impl AnyTimestamp for str {
    fn date_key(&self) -> Option<NaiveDate> {
        let text = self.trim();
        for format in DATETIME_FORMATS {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(text, format) {
                return naive_dt.date_key();
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return dt.date_key();
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return naive_date.date_key();
        }
        None
    }
}

impl AnyTimestamp for String {
    fn date_key(&self) -> Option<NaiveDate> {
        self.as_str().date_key()
    }
}

/// The timestamp attached to a [`crate::Sample`].
///
/// Upstream payloads usually carry text such as `"2024-06-01 15:00:00"`; callers that
/// already hold structured values can store them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Unparsed text as delivered by the data source.
    Text(String),
    /// A local wall-clock date-time.
    Local(NaiveDateTime),
    /// A date-time carrying its own UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl AnyTimestamp for Timestamp {
    fn date_key(&self) -> Option<NaiveDate> {
        match self {
            Timestamp::Text(text) => text.date_key(),
            Timestamp::Local(naive_dt) => naive_dt.date_key(),
            Timestamp::Offset(dt) => dt.date_key(),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Local(value)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Offset(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Text(text) => write!(f, "{}", text),
            Timestamp::Local(naive_dt) => write!(f, "{}", naive_dt.format("%Y-%m-%d %H:%M:%S")),
            Timestamp::Offset(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

//! Core domain types for subheat
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Record** | One (date, count) pair: submissions made on that day |
//! | **Index** | Records keyed by calendar date, last write wins |
//! | **Period** | The rolling 12 months ending today, or one calendar year |
//! | **Streak** | A run of calendar-consecutive dates all present in the index |
//! | **Bucket** | One of five visual-weight classes derived from a day's count |
//!
//! Dates are calendar dates with no time-of-day or timezone
//! ([`chrono::NaiveDate`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format for record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string.
///
/// Surrounding whitespace is ignored. Anything else that does not name a real
/// calendar date yields `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // chrono accepts unpadded fields, so check the shape first
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Submissions recorded on a single day.
///
/// `date` is `None` when the source record had no usable date; such records
/// are skipped when the index is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: Option<NaiveDate>,
    pub count: u64,
}

impl ActivityRecord {
    /// A dated record.
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self {
            date: Some(date),
            count,
        }
    }

    /// A record whose date is missing.
    pub fn undated(count: u64) -> Self {
        Self { date: None, count }
    }

    /// Build a record from a date string, treating an unparseable date as missing.
    pub fn from_date_str(date: &str, count: u64) -> Self {
        Self {
            date: parse_date(date),
            count,
        }
    }
}

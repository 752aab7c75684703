//! Work session model.
//!
//! A work session is one matched clock-in/clock-out pair produced by the
//! pairing step in the aggregation module.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One matched clock-in/clock-out pair within a single calendar day.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::WorkSession;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let session = WorkSession {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     clock_in: NaiveDateTime::parse_from_str("2025-03-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     clock_out: NaiveDateTime::parse_from_str("2025-03-03 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     minutes: 510,
/// };
/// assert_eq!(session.hours(), Decimal::new(85, 1)); // 8.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSession {
    /// The calendar date the session belongs to (date of the clock-in).
    pub date: NaiveDate,
    /// When the session started.
    pub clock_in: NaiveDateTime,
    /// When the session ended.
    pub clock_out: NaiveDateTime,
    /// Session duration in whole minutes.
    pub minutes: i64,
}

impl WorkSession {
    /// Returns the session duration in hours as a Decimal.
    pub fn hours(&self) -> Decimal {
        Decimal::new(self.minutes, 0) / Decimal::new(60, 0)
    }
}

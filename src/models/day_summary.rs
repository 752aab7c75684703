//! Daily hours summary model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Worked minutes for one calendar day, split at the daily overtime
/// threshold.
///
/// `regular_minutes` never exceeds the daily threshold (480 minutes);
/// any excess lands in `overtime_minutes`. Summaries are computed on
/// demand from a day's event list and never persisted independently.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::DaySummary;
/// use chrono::NaiveDate;
///
/// let summary = DaySummary {
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     regular_minutes: 480,
///     overtime_minutes: 90,
/// };
/// assert_eq!(summary.total_minutes(), 570);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The calendar day the summary covers.
    pub date: NaiveDate,
    /// Minutes up to the daily threshold.
    pub regular_minutes: i64,
    /// Minutes in excess of the daily threshold.
    pub overtime_minutes: i64,
}

impl DaySummary {
    /// Returns the total worked minutes for the day.
    pub fn total_minutes(&self) -> i64 {
        self.regular_minutes + self.overtime_minutes
    }
}

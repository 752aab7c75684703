//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type produced by the bi-weekly
//! period partitioner in the aggregation module.

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClockEvent, WorkSession};

/// Number of calendar days in one pay period.
pub const PERIOD_LENGTH_DAYS: u64 = 14;

/// A materialized 14-calendar-day aggregation window containing at least
/// one clock event.
///
/// Periods are derived values: they are recomputed from the full event
/// list whenever requested and never persisted. Consecutive materialized
/// periods tile the calendar without overlap; empty windows are skipped
/// rather than represented.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     id: 0,
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(), // Sunday
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
///     entries: vec![],
///     sessions: vec![],
///     total_hours: Decimal::ZERO,
///     work_days: 0,
///     is_submitted: false,
///     is_complete: true,
/// };
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
///     .and_hms_opt(23, 59, 59).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Ordinal index among the computed periods for one event list.
    pub id: usize,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive, `start_date + 13 days`).
    pub end_date: NaiveDate,
    /// The clock events whose timestamps fall within the window.
    pub entries: Vec<ClockEvent>,
    /// Matched clock-in/clock-out pairs inside the window.
    pub sessions: Vec<WorkSession>,
    /// Sum of session durations in hours, rounded to 2 decimals.
    pub total_hours: Decimal,
    /// Count of distinct calendar dates with at least one event.
    pub work_days: usize,
    /// True once a payroll submission references this exact window.
    pub is_submitted: bool,
    /// True iff the period ended strictly before "now".
    pub is_complete: bool,
}

impl PayPeriod {
    /// Returns the inclusive lower bound of the period window.
    pub fn window_start(start_date: NaiveDate) -> NaiveDateTime {
        start_date.and_hms_opt(0, 0, 0).expect("midnight is valid")
    }

    /// Returns the inclusive upper bound of the period window
    /// (`end_date 23:59:59.999`).
    pub fn window_end(end_date: NaiveDate) -> NaiveDateTime {
        end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("end of day is valid")
    }

    /// Returns the end date for a window starting at `start_date`.
    pub fn end_for_start(start_date: NaiveDate) -> NaiveDate {
        start_date + Days::new(PERIOD_LENGTH_DAYS - 1)
    }

    /// Checks whether a timestamp falls within this period's window.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= Self::window_start(self.start_date)
            && timestamp <= Self::window_end(self.end_date)
    }
}

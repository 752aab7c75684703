//! Daily hours calculation.
//!
//! Groups clock events by local calendar day and splits each day's worked
//! minutes at the daily overtime threshold. This is the daily-threshold
//! view of the aggregator; the period-threshold (80 h) view lives in
//! [`payroll`](super::payroll) and the two policies are intentionally
//! independent.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ClockEvent, DaySummary};

use super::pairing::pair_sessions;

/// Default daily overtime threshold in minutes (8 hours).
pub const DAILY_OVERTIME_THRESHOLD_MINUTES: i64 = 480;

/// Splits a day's worked minutes into regular and overtime portions.
///
/// Regular minutes are capped at the threshold; anything above becomes
/// overtime.
///
/// # Example
///
/// ```
/// use timeclock_engine::aggregation::{split_daily_minutes, DAILY_OVERTIME_THRESHOLD_MINUTES};
///
/// assert_eq!(split_daily_minutes(480, DAILY_OVERTIME_THRESHOLD_MINUTES), (480, 0));
/// assert_eq!(split_daily_minutes(540, DAILY_OVERTIME_THRESHOLD_MINUTES), (480, 60));
/// assert_eq!(split_daily_minutes(300, DAILY_OVERTIME_THRESHOLD_MINUTES), (300, 0));
/// ```
pub fn split_daily_minutes(total_minutes: i64, threshold_minutes: i64) -> (i64, i64) {
    if total_minutes > threshold_minutes {
        (threshold_minutes, total_minutes - threshold_minutes)
    } else {
        (total_minutes, 0)
    }
}

/// Computes one [`DaySummary`] per calendar day represented in `events`.
///
/// Events are paired per day by [`pair_sessions`]; days whose events form
/// no valid pair (a lone clock-in, say) still appear, with zero totals.
/// The result is ascending by date. Empty input yields an empty vec.
pub fn calculate_daily_summaries(
    events: &[ClockEvent],
    threshold_minutes: i64,
) -> Vec<DaySummary> {
    let mut minutes_by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for event in events {
        minutes_by_date.entry(event.date()).or_insert(0);
    }
    for session in pair_sessions(events) {
        *minutes_by_date.entry(session.date).or_insert(0) += session.minutes;
    }

    minutes_by_date
        .into_iter()
        .map(|(date, total)| {
            let (regular_minutes, overtime_minutes) =
                split_daily_minutes(total, threshold_minutes);
            DaySummary {
                date,
                regular_minutes,
                overtime_minutes,
            }
        })
        .collect()
}

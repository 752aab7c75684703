//! Bi-weekly pay period partitioning.
//!
//! Partitions a user's clock events into consecutive, non-overlapping
//! 14-day windows anchored to the Sunday on or before the earliest event,
//! materializing only the windows that contain activity.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{ClockEvent, PayPeriod, PayrollSubmission};

use super::pairing::pair_sessions;

/// Partitions `events` into materialized bi-weekly [`PayPeriod`]s.
///
/// The algorithm:
///
/// 1. Returns `[]` for empty input.
/// 2. Sorts events ascending by timestamp.
/// 3. Anchors the first window at the most recent Sunday on or before the
///    earliest event's date.
/// 4. Tiles `[start, start + 13 days 23:59:59.999]` windows forward while
///    the window start is on or before `now`, skipping windows with no
///    events.
/// 5. Returns the materialized periods most recent first, each with its
///    matched sessions, total hours (2 dp), and distinct work-day count.
///
/// `is_complete` is true when the period's end date is strictly before
/// the date of `now`. `is_submitted` starts false; see [`mark_submitted`].
///
/// Because the tiling advances a fixed 14 days regardless of content,
/// shuffling the input produces identical output.
pub fn calculate_biweekly_periods(events: &[ClockEvent], now: NaiveDateTime) -> Vec<PayPeriod> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));

    let first_date = sorted[0].timestamp.date();
    let days_since_sunday = u64::from(first_date.weekday().num_days_from_sunday());
    let mut period_start = first_date - Days::new(days_since_sunday);

    let mut periods = Vec::new();
    while period_start <= now.date() {
        let end_date = PayPeriod::end_for_start(period_start);
        let window_start = PayPeriod::window_start(period_start);
        let window_end = PayPeriod::window_end(end_date);

        let entries: Vec<ClockEvent> = sorted
            .iter()
            .filter(|e| e.timestamp >= window_start && e.timestamp <= window_end)
            .cloned()
            .collect();

        if !entries.is_empty() {
            let sessions = pair_sessions(&entries);
            let total_minutes: i64 = sessions.iter().map(|s| s.minutes).sum();
            let total_hours =
                (Decimal::new(total_minutes, 0) / Decimal::new(60, 0)).round_dp(2);
            let work_days = entries
                .iter()
                .map(ClockEvent::date)
                .collect::<BTreeSet<_>>()
                .len();

            periods.push(PayPeriod {
                id: periods.len(),
                start_date: period_start,
                end_date,
                entries,
                sessions,
                total_hours,
                work_days,
                is_submitted: false,
                is_complete: end_date < now.date(),
            });
        }

        period_start = end_date + Days::new(1);
    }

    periods.reverse();
    periods
}

/// Flags periods that already have a payroll submission.
///
/// A period is submitted when some submission references its exact
/// `(start_date, end_date)` pair, regardless of the submission's review
/// status.
pub fn mark_submitted(periods: &mut [PayPeriod], submissions: &[PayrollSubmission]) {
    for period in periods {
        period.is_submitted = submissions
            .iter()
            .any(|s| s.period_start == period.start_date && s.period_end == period.end_date);
    }
}

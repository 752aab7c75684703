//! Payroll submission building.
//!
//! Applies the period-level overtime policy (80 hours per bi-weekly
//! period) and assembles an immutable [`PayrollSubmission`]. This
//! threshold is independent of the daily 8-hour split in
//! [`daily_hours`](super::daily_hours); the daily view feeds display
//! aggregation while this one feeds pay.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{PayPeriod, PayrollSubmission, SubmissionStatus};

/// Default period overtime threshold in hours (2 weeks x 40 h).
pub const PERIOD_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Default hourly rate applied when no per-employee rate is configured.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Default overtime pay multiplier (time and a half).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Splits a period's total hours at the period overtime threshold.
///
/// # Example
///
/// ```
/// use timeclock_engine::aggregation::{split_period_hours, PERIOD_OVERTIME_THRESHOLD_HOURS};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let (regular, overtime) =
///     split_period_hours(Decimal::from_str("88").unwrap(), PERIOD_OVERTIME_THRESHOLD_HOURS);
/// assert_eq!(regular, Decimal::from_str("80").unwrap());
/// assert_eq!(overtime, Decimal::from_str("8").unwrap());
/// ```
pub fn split_period_hours(total_hours: Decimal, threshold_hours: Decimal) -> (Decimal, Decimal) {
    if total_hours > threshold_hours {
        (threshold_hours, total_hours - threshold_hours)
    } else {
        (total_hours, Decimal::ZERO)
    }
}

/// Computes gross pay from split hours.
///
/// `gross = regular * rate + overtime * rate * multiplier`, rounded to
/// 2 decimals.
pub fn gross_pay(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    overtime_multiplier: Decimal,
) -> Decimal {
    (regular_hours * hourly_rate + overtime_hours * hourly_rate * overtime_multiplier).round_dp(2)
}

/// Assembles a pending [`PayrollSubmission`] for a computed pay period.
///
/// The submission snapshots the period's entries; afterwards only status
/// transitions are allowed on it.
#[allow(clippy::too_many_arguments)]
pub fn build_submission(
    period: &PayPeriod,
    user_id: &str,
    user_name: &str,
    hourly_rate: Decimal,
    threshold_hours: Decimal,
    overtime_multiplier: Decimal,
    notes: &str,
    submitted_at: NaiveDateTime,
) -> PayrollSubmission {
    let (regular_hours, overtime_hours) = split_period_hours(period.total_hours, threshold_hours);
    let gross = gross_pay(regular_hours, overtime_hours, hourly_rate, overtime_multiplier);

    PayrollSubmission {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        period_start: period.start_date,
        period_end: period.end_date,
        regular_hours,
        overtime_hours,
        gross_pay: gross,
        entries: period.entries.clone(),
        notes: notes.to_string(),
        submitted_at,
        status: SubmissionStatus::Pending,
        approved_by: None,
        approved_at: None,
        rejected_by: None,
        rejected_at: None,
        rejection_reason: None,
    }
}

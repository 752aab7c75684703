//! Aggregation logic for the Timeclock Engine.
//!
//! This module contains the pairing of raw clock events into work
//! sessions, the daily-hours view with its 8-hour overtime split, the
//! bi-weekly pay period partitioner, and the payroll submission builder
//! with its independent 80-hour period threshold.

mod daily_hours;
mod pairing;
mod payroll;
mod periods;

pub use daily_hours::{
    DAILY_OVERTIME_THRESHOLD_MINUTES, calculate_daily_summaries, split_daily_minutes,
};
pub use pairing::pair_sessions;
pub use payroll::{
    DEFAULT_HOURLY_RATE, OVERTIME_MULTIPLIER, PERIOD_OVERTIME_THRESHOLD_HOURS, build_submission,
    gross_pay, split_period_hours,
};
pub use periods::{calculate_biweekly_periods, mark_submitted};

//! Core data models for the Timeclock Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod day_summary;
mod pay_period;
mod submission;
mod timesheet;
mod work_session;

pub use clock_event::{ClockEvent, ClockEventType};
pub use day_summary::DaySummary;
pub use pay_period::{PERIOD_LENGTH_DAYS, PayPeriod};
pub use submission::{PayrollSubmission, SubmissionStatus};
pub use timesheet::{ApprovalState, Break, TimesheetEntry};
pub use work_session::WorkSession;

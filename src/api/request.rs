//! Request types for the Timeclock Engine API.
//!
//! This module defines the JSON request structures for the periods and
//! payroll endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ClockEvent;

/// Request body for the `/periods` endpoint.
///
/// Carries the raw clock events to partition; the events are also cached
/// so later payroll submissions can refer to the computed periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodsRequest {
    /// The raw clock events to partition into bi-weekly periods.
    pub events: Vec<ClockEvent>,
    /// Reference time for the period walk. Defaults to the current UTC
    /// time when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
}

/// Request body for `POST /payroll/submissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPayrollRequest {
    /// The employee the submission is for.
    pub user_id: String,
    /// Display name recorded on the submission.
    pub user_name: String,
    /// The raw clock events covering the period being submitted.
    pub events: Vec<ClockEvent>,
    /// Start date of the pay period to submit. Must match a computed
    /// period exactly.
    pub period_start: NaiveDate,
    /// Optional note attached to the submission.
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional per-employee hourly rate overriding the configured default.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Reference time for the period walk. Defaults to the current UTC
    /// time when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
}

/// Request body for `POST /payroll/submissions/{id}/approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    /// Manager performing the approval.
    pub approved_by: String,
}

/// Request body for `POST /payroll/submissions/{id}/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    /// Manager performing the rejection.
    pub rejected_by: String,
    /// The rejection reason. Must not be blank.
    pub reason: String,
}

//! Payroll submission model and status transitions.
//!
//! A submission is created once per employee submit action and is
//! immutable afterwards except for status transitions performed by an
//! approver.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::ClockEvent;

/// Review status of a payroll submission.
///
/// `Pending` is the single canonical waiting state used by both the
/// employee submission flow and the admin review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Awaiting review.
    Pending,
    /// Approved by a manager; eligible for processing.
    Approved,
    /// Paid out. Terminal.
    Processed,
    /// Rejected by a manager. Terminal.
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Approved => write!(f, "approved"),
            SubmissionStatus::Processed => write!(f, "processed"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An employee's request for a pay period to be processed.
///
/// Created by [`build_submission`](crate::aggregation::build_submission)
/// with status [`SubmissionStatus::Pending`]; afterwards only the status
/// and its reviewer stamps change, via [`approve`](PayrollSubmission::approve)
/// and [`reject`](PayrollSubmission::reject).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSubmission {
    /// Unique identifier for the submission.
    pub id: Uuid,
    /// The submitting user.
    pub user_id: String,
    /// Display name of the submitting user.
    pub user_name: String,
    /// Start date of the submitted pay period (inclusive).
    pub period_start: NaiveDate,
    /// End date of the submitted pay period (inclusive).
    pub period_end: NaiveDate,
    /// Hours up to the period threshold.
    pub regular_hours: Decimal,
    /// Hours in excess of the period threshold.
    pub overtime_hours: Decimal,
    /// Regular pay plus overtime pay at the overtime multiplier.
    pub gross_pay: Decimal,
    /// The clock events the submission was computed from.
    pub entries: Vec<ClockEvent>,
    /// Free-text notes from the employee.
    pub notes: String,
    /// When the submission was created.
    pub submitted_at: NaiveDateTime,
    /// Current review status.
    pub status: SubmissionStatus,
    /// Manager who approved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// When the approval happened, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<NaiveDateTime>,
    /// Manager who rejected, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
    /// When the rejection happened, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<NaiveDateTime>,
    /// Mandatory reason recorded on rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl PayrollSubmission {
    /// Approves a pending submission, stamping the approver and time.
    ///
    /// Re-approving an already-approved submission is a no-op, so repeated
    /// manager clicks cannot double-apply. Approving a rejected or
    /// processed submission is an invalid transition.
    pub fn approve(&mut self, approved_by: &str, at: NaiveDateTime) -> EngineResult<()> {
        match self.status {
            SubmissionStatus::Pending => {
                self.status = SubmissionStatus::Approved;
                self.approved_by = Some(approved_by.to_string());
                self.approved_at = Some(at);
                Ok(())
            }
            SubmissionStatus::Approved => Ok(()),
            from => Err(EngineError::InvalidTransition {
                id: self.id.to_string(),
                from: from.to_string(),
                action: "approve".to_string(),
            }),
        }
    }

    /// Rejects a pending submission with a mandatory non-empty reason.
    ///
    /// A blank reason fails validation before any state change. Rejecting
    /// an already-rejected submission is a no-op.
    pub fn reject(
        &mut self,
        rejected_by: &str,
        at: NaiveDateTime,
        reason: &str,
    ) -> EngineResult<()> {
        if reason.trim().is_empty() {
            return Err(EngineError::ValidationError {
                field: "reason".to_string(),
                message: "rejection reason must not be blank".to_string(),
            });
        }
        match self.status {
            SubmissionStatus::Pending => {
                self.status = SubmissionStatus::Rejected;
                self.rejected_by = Some(rejected_by.to_string());
                self.rejected_at = Some(at);
                self.rejection_reason = Some(reason.trim().to_string());
                Ok(())
            }
            SubmissionStatus::Rejected => Ok(()),
            from => Err(EngineError::InvalidTransition {
                id: self.id.to_string(),
                from: from.to_string(),
                action: "reject".to_string(),
            }),
        }
    }

    /// Marks an approved submission as processed (paid out).
    pub fn mark_processed(&mut self) -> EngineResult<()> {
        match self.status {
            SubmissionStatus::Approved => {
                self.status = SubmissionStatus::Processed;
                Ok(())
            }
            SubmissionStatus::Processed => Ok(()),
            from => Err(EngineError::InvalidTransition {
                id: self.id.to_string(),
                from: from.to_string(),
                action: "process".to_string(),
            }),
        }
    }
}

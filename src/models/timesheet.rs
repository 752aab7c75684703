//! Timesheet entry model and the edit/approval state machine.
//!
//! A timesheet entry moves `Unsubmitted -> PendingApproval -> {Approved |
//! Rejected}`. Field edits are allowed only before submission and return
//! the previous value so callers can revert an optimistic edit when the
//! backing store rejects it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A break taken within a timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// Unique identifier for the break.
    pub id: String,
    /// When the break started.
    pub break_start: NaiveDateTime,
    /// When the break ended.
    pub break_end: NaiveDateTime,
    /// Break duration in whole minutes.
    pub break_minutes: i64,
}

impl Break {
    /// Builds a break, deriving `break_minutes` from the bounds.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            break_start: start,
            break_end: end,
            break_minutes: (end - start).num_minutes(),
        }
    }
}

/// Review state of a timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ApprovalState {
    /// Editable; not yet submitted for approval.
    Unsubmitted,
    /// Submitted with a reason; awaiting a manager decision.
    PendingApproval {
        /// The employee's non-empty submission reason.
        reason: String,
        /// When the entry was submitted.
        submitted_at: NaiveDateTime,
    },
    /// Approved by a manager. Terminal.
    Approved {
        /// Manager who approved.
        approved_by: String,
        /// When the approval happened.
        approved_at: NaiveDateTime,
    },
    /// Rejected by a manager with a reason. Terminal.
    Rejected {
        /// Manager who rejected.
        rejected_by: String,
        /// When the rejection happened.
        rejected_at: NaiveDateTime,
        /// The mandatory rejection reason.
        rejection_reason: String,
    },
}

impl ApprovalState {
    fn name(&self) -> &'static str {
        match self {
            ApprovalState::Unsubmitted => "unsubmitted",
            ApprovalState::PendingApproval { .. } => "pending_approval",
            ApprovalState::Approved { .. } => "approved",
            ApprovalState::Rejected { .. } => "rejected",
        }
    }
}

/// A single editable timesheet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The user the entry belongs to.
    pub user_id: String,
    /// Clock-in time for the entry.
    pub clockin_time: NaiveDateTime,
    /// Clock-out time for the entry.
    pub clockout_time: NaiveDateTime,
    /// Breaks taken during the entry.
    #[serde(default)]
    pub breaks: Vec<Break>,
    /// Current position in the edit/approval state machine.
    pub approval: ApprovalState,
}

impl TimesheetEntry {
    /// Returns worked minutes: clock-out minus clock-in minus all breaks.
    pub fn worked_minutes(&self) -> i64 {
        let total = (self.clockout_time - self.clockin_time).num_minutes();
        let break_minutes: i64 = self.breaks.iter().map(|b| b.break_minutes).sum();
        total - break_minutes
    }

    fn ensure_editable(&self, action: &str) -> EngineResult<()> {
        match self.approval {
            ApprovalState::Unsubmitted => Ok(()),
            ref from => Err(EngineError::InvalidTransition {
                id: self.id.clone(),
                from: from.name().to_string(),
                action: action.to_string(),
            }),
        }
    }

    /// Replaces the clock-in time, returning the previous value for revert.
    pub fn set_clockin_time(&mut self, new: NaiveDateTime) -> EngineResult<NaiveDateTime> {
        self.ensure_editable("edit clockin_time of")?;
        Ok(std::mem::replace(&mut self.clockin_time, new))
    }

    /// Replaces the clock-out time, returning the previous value for revert.
    pub fn set_clockout_time(&mut self, new: NaiveDateTime) -> EngineResult<NaiveDateTime> {
        self.ensure_editable("edit clockout_time of")?;
        Ok(std::mem::replace(&mut self.clockout_time, new))
    }

    /// Replaces a break's bounds, returning the previous break for revert.
    ///
    /// `break_minutes` is recomputed from the new bounds.
    pub fn set_break(
        &mut self,
        break_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<Break> {
        self.ensure_editable("edit break of")?;
        let slot = self
            .breaks
            .iter_mut()
            .find(|b| b.id == break_id)
            .ok_or_else(|| EngineError::ValidationError {
                field: "break_id".to_string(),
                message: format!("no break '{break_id}' on timesheet"),
            })?;
        let replacement = Break::new(break_id, start, end);
        Ok(std::mem::replace(slot, replacement))
    }

    /// Submits the entry for approval with a mandatory non-empty reason.
    ///
    /// A blank reason fails validation locally; no collaborator call is
    /// made and the entry stays editable.
    pub fn submit_for_approval(&mut self, reason: &str, at: NaiveDateTime) -> EngineResult<()> {
        if reason.trim().is_empty() {
            return Err(EngineError::ValidationError {
                field: "reason".to_string(),
                message: "submission reason must not be blank".to_string(),
            });
        }
        match self.approval {
            ApprovalState::Unsubmitted => {
                self.approval = ApprovalState::PendingApproval {
                    reason: reason.trim().to_string(),
                    submitted_at: at,
                };
                Ok(())
            }
            ref from => Err(EngineError::InvalidTransition {
                id: self.id.clone(),
                from: from.name().to_string(),
                action: "submit".to_string(),
            }),
        }
    }

    /// Approves a pending entry. Idempotent once approved.
    pub fn approve(&mut self, approved_by: &str, at: NaiveDateTime) -> EngineResult<()> {
        match self.approval {
            ApprovalState::PendingApproval { .. } => {
                self.approval = ApprovalState::Approved {
                    approved_by: approved_by.to_string(),
                    approved_at: at,
                };
                Ok(())
            }
            ApprovalState::Approved { .. } => Ok(()),
            ref from => Err(EngineError::InvalidTransition {
                id: self.id.clone(),
                from: from.name().to_string(),
                action: "approve".to_string(),
            }),
        }
    }

    /// Rejects a pending entry with a mandatory non-empty reason.
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
        match self.approval {
            ApprovalState::PendingApproval { .. } => {
                self.approval = ApprovalState::Rejected {
                    rejected_by: rejected_by.to_string(),
                    rejected_at: at,
                    rejection_reason: reason.trim().to_string(),
                };
                Ok(())
            }
            ApprovalState::Rejected { .. } => Ok(()),
            ref from => Err(EngineError::InvalidTransition {
                id: self.id.clone(),
                from: from.name().to_string(),
                action: "reject".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_entry() -> TimesheetEntry {
        TimesheetEntry {
            id: "ts_001".to_string(),
            user_id: "drv_042".to_string(),
            clockin_time: make_datetime("2025-03-03 08:00:00"),
            clockout_time: make_datetime("2025-03-03 17:00:00"),
            breaks: vec![Break::new(
                "brk_001",
                make_datetime("2025-03-03 12:00:00"),
                make_datetime("2025-03-03 12:30:00"),
            )],
            approval: ApprovalState::Unsubmitted,
        }
    }

    #[test]
    fn test_worked_minutes_subtracts_breaks() {
        let entry = make_entry();
        // 9 hours minus 30 minute break
        assert_eq!(entry.worked_minutes(), 510);
    }

    #[test]
    fn test_edit_returns_previous_value() {
        let mut entry = make_entry();
        let previous = entry
            .set_clockin_time(make_datetime("2025-03-03 07:30:00"))
            .unwrap();

        assert_eq!(previous, make_datetime("2025-03-03 08:00:00"));
        assert_eq!(entry.clockin_time, make_datetime("2025-03-03 07:30:00"));

        // Reverting is just writing the previous value back.
        entry.set_clockin_time(previous).unwrap();
        assert_eq!(entry.clockin_time, make_datetime("2025-03-03 08:00:00"));
    }

    #[test]
    fn test_edit_break_recomputes_minutes() {
        let mut entry = make_entry();
        let previous = entry
            .set_break(
                "brk_001",
                make_datetime("2025-03-03 12:00:00"),
                make_datetime("2025-03-03 13:00:00"),
            )
            .unwrap();

        assert_eq!(previous.break_minutes, 30);
        assert_eq!(entry.breaks[0].break_minutes, 60);
        assert_eq!(entry.worked_minutes(), 480);
    }

    #[test]
    fn test_edit_unknown_break_fails() {
        let mut entry = make_entry();
        let result = entry.set_break(
            "brk_404",
            make_datetime("2025-03-03 12:00:00"),
            make_datetime("2025-03-03 12:15:00"),
        );
        assert!(matches!(result, Err(EngineError::ValidationError { .. })));
    }

    #[test]
    fn test_submit_requires_reason() {
        let mut entry = make_entry();
        let result = entry.submit_for_approval("", make_datetime("2025-03-04 09:00:00"));
        assert!(matches!(result, Err(EngineError::ValidationError { .. })));
        assert_eq!(entry.approval, ApprovalState::Unsubmitted);
    }

    #[test]
    fn test_submit_then_approve() {
        let mut entry = make_entry();
        entry
            .submit_for_approval("forgot to clock out", make_datetime("2025-03-04 09:00:00"))
            .unwrap();
        entry
            .approve("mgr_007", make_datetime("2025-03-04 10:00:00"))
            .unwrap();

        assert!(matches!(entry.approval, ApprovalState::Approved { .. }));
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut entry = make_entry();
        entry
            .submit_for_approval("forgot to clock out", make_datetime("2025-03-04 09:00:00"))
            .unwrap();
        entry
            .approve("mgr_007", make_datetime("2025-03-04 10:00:00"))
            .unwrap();
        entry
            .approve("mgr_008", make_datetime("2025-03-05 10:00:00"))
            .unwrap();

        // First approval stamp survives.
        match &entry.approval {
            ApprovalState::Approved { approved_by, approved_at } => {
                assert_eq!(approved_by, "mgr_007");
                assert_eq!(*approved_at, make_datetime("2025-03-04 10:00:00"));
            }
            other => panic!("expected approved, got {other:?}"),
        }
    }

    #[test]
    fn test_approve_unsubmitted_is_invalid() {
        let mut entry = make_entry();
        let result = entry.approve("mgr_007", make_datetime("2025-03-04 10:00:00"));
        assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut entry = make_entry();
        entry
            .submit_for_approval("forgot to clock out", make_datetime("2025-03-04 09:00:00"))
            .unwrap();
        let result = entry.reject("mgr_007", make_datetime("2025-03-04 10:00:00"), "  ");
        assert!(matches!(result, Err(EngineError::ValidationError { .. })));
        assert!(matches!(entry.approval, ApprovalState::PendingApproval { .. }));
    }

    #[test]
    fn test_rejected_is_terminal() {
        let mut entry = make_entry();
        entry
            .submit_for_approval("forgot to clock out", make_datetime("2025-03-04 09:00:00"))
            .unwrap();
        entry
            .reject(
                "mgr_007",
                make_datetime("2025-03-04 10:00:00"),
                "times do not match the route log",
            )
            .unwrap();

        let at = make_datetime("2025-03-05 10:00:00");
        assert!(entry.approve("mgr_007", at).is_err());
        assert!(entry.submit_for_approval("try again", at).is_err());
    }

    #[test]
    fn test_no_edits_after_submission() {
        let mut entry = make_entry();
        entry
            .submit_for_approval("forgot to clock out", make_datetime("2025-03-04 09:00:00"))
            .unwrap();

        let result = entry.set_clockout_time(make_datetime("2025-03-03 18:00:00"));
        assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
    }

    #[test]
    fn test_approval_state_serialization() {
        let state = ApprovalState::PendingApproval {
            reason: "forgot to clock out".to_string(),
            submitted_at: make_datetime("2025-03-04 09:00:00"),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"state\":\"pending_approval\""));

        let deserialized: ApprovalState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

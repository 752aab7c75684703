//! In-memory application state and its command reducer.
//!
//! The ledger replaces a string-keyed action store with an explicit state
//! struct updated through a closed [`LedgerCommand`] enum, so every
//! command kind is checked exhaustively at compile time and every payload
//! is precisely typed.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::aggregation::{calculate_biweekly_periods, mark_submitted};
use crate::error::{EngineError, EngineResult};
use crate::models::{Break, ClockEvent, PayPeriod, PayrollSubmission, TimesheetEntry};

/// A typed command applied to the [`Ledger`].
#[derive(Debug, Clone)]
pub enum LedgerCommand {
    /// Replaces the cached clock events (e.g., after a backend fetch).
    LoadEvents(Vec<ClockEvent>),
    /// Replaces the cached timesheet entries.
    LoadTimesheets(Vec<TimesheetEntry>),
    /// Appends a newly built payroll submission.
    RecordSubmission(PayrollSubmission),
    /// Approves a pending submission.
    ApproveSubmission {
        /// The submission to approve.
        id: Uuid,
        /// Manager performing the approval.
        approved_by: String,
        /// When the approval happened.
        at: NaiveDateTime,
    },
    /// Rejects a pending submission with a mandatory reason.
    RejectSubmission {
        /// The submission to reject.
        id: Uuid,
        /// Manager performing the rejection.
        rejected_by: String,
        /// When the rejection happened.
        at: NaiveDateTime,
        /// The non-empty rejection reason.
        reason: String,
    },
    /// Marks an approved submission as processed.
    ProcessSubmission {
        /// The submission to process.
        id: Uuid,
    },
    /// Edits a timesheet field in place.
    EditTimesheet {
        /// The timesheet to edit.
        id: String,
        /// The field patch to apply.
        patch: TimesheetPatch,
    },
    /// Submits a timesheet for approval.
    SubmitTimesheet {
        /// The timesheet to submit.
        id: String,
        /// The non-empty submission reason.
        reason: String,
        /// When the submission happened.
        at: NaiveDateTime,
    },
    /// Approves a pending timesheet.
    ApproveTimesheet {
        /// The timesheet to approve.
        id: String,
        /// Manager performing the approval.
        approved_by: String,
        /// When the approval happened.
        at: NaiveDateTime,
    },
    /// Rejects a pending timesheet with a mandatory reason.
    RejectTimesheet {
        /// The timesheet to reject.
        id: String,
        /// Manager performing the rejection.
        rejected_by: String,
        /// When the rejection happened.
        at: NaiveDateTime,
        /// The non-empty rejection reason.
        reason: String,
    },
}

/// A single-field timesheet edit.
#[derive(Debug, Clone)]
pub enum TimesheetPatch {
    /// Replace the clock-in time.
    ClockIn(NaiveDateTime),
    /// Replace the clock-out time.
    ClockOut(NaiveDateTime),
    /// Replace a break's bounds.
    Break {
        /// The break to replace.
        break_id: String,
        /// New break start.
        break_start: NaiveDateTime,
        /// New break end.
        break_end: NaiveDateTime,
    },
}

/// The value displaced by an applied [`TimesheetPatch`], kept so the
/// caller can revert an optimistic edit.
#[derive(Debug, Clone)]
enum PatchUndo {
    ClockIn(NaiveDateTime),
    ClockOut(NaiveDateTime),
    Break(Break),
}

/// In-memory state: cached events, submission history, and timesheets.
#[derive(Debug, Default)]
pub struct Ledger {
    events: Vec<ClockEvent>,
    submissions: Vec<PayrollSubmission>,
    timesheets: BTreeMap<String, TimesheetEntry>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command, mutating state only when the command succeeds.
    pub fn apply(&mut self, command: LedgerCommand) -> EngineResult<()> {
        match command {
            LedgerCommand::LoadEvents(events) => {
                self.events = events;
                Ok(())
            }
            LedgerCommand::LoadTimesheets(entries) => {
                self.timesheets = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
                Ok(())
            }
            LedgerCommand::RecordSubmission(submission) => {
                self.submissions.push(submission);
                Ok(())
            }
            LedgerCommand::ApproveSubmission { id, approved_by, at } => {
                self.submission_mut(id)?.approve(&approved_by, at)
            }
            LedgerCommand::RejectSubmission {
                id,
                rejected_by,
                at,
                reason,
            } => self.submission_mut(id)?.reject(&rejected_by, at, &reason),
            LedgerCommand::ProcessSubmission { id } => self.submission_mut(id)?.mark_processed(),
            LedgerCommand::EditTimesheet { id, patch } => {
                let entry = self.timesheet_mut(&id)?;
                Self::apply_patch(entry, &patch)?;
                Ok(())
            }
            LedgerCommand::SubmitTimesheet { id, reason, at } => {
                self.timesheet_mut(&id)?.submit_for_approval(&reason, at)
            }
            LedgerCommand::ApproveTimesheet { id, approved_by, at } => {
                self.timesheet_mut(&id)?.approve(&approved_by, at)
            }
            LedgerCommand::RejectTimesheet {
                id,
                rejected_by,
                at,
                reason,
            } => self.timesheet_mut(&id)?.reject(&rejected_by, at, &reason),
        }
    }

    /// Applies an optimistic timesheet edit around a fallible collaborator
    /// call, reverting the edit when the call fails.
    ///
    /// The patch is applied locally first, then `remote` runs with the
    /// patched entry. On `Err` the displaced value is written back, so the
    /// local state never drifts from a backend that refused the edit.
    pub fn edit_timesheet_with<T>(
        &mut self,
        id: &str,
        patch: TimesheetPatch,
        remote: impl FnOnce(&TimesheetEntry) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let entry = self.timesheet_mut(id)?;
        let undo = Self::apply_patch(entry, &patch)?;

        match remote(entry) {
            Ok(value) => Ok(value),
            Err(err) => {
                match undo {
                    PatchUndo::ClockIn(previous) => entry.clockin_time = previous,
                    PatchUndo::ClockOut(previous) => entry.clockout_time = previous,
                    PatchUndo::Break(previous) => {
                        if let Some(slot) =
                            entry.breaks.iter_mut().find(|b| b.id == previous.id)
                        {
                            *slot = previous;
                        }
                    }
                }
                Err(err)
            }
        }
    }

    fn apply_patch(entry: &mut TimesheetEntry, patch: &TimesheetPatch) -> EngineResult<PatchUndo> {
        match patch {
            TimesheetPatch::ClockIn(new) => Ok(PatchUndo::ClockIn(entry.set_clockin_time(*new)?)),
            TimesheetPatch::ClockOut(new) => {
                Ok(PatchUndo::ClockOut(entry.set_clockout_time(*new)?))
            }
            TimesheetPatch::Break {
                break_id,
                break_start,
                break_end,
            } => Ok(PatchUndo::Break(entry.set_break(
                break_id,
                *break_start,
                *break_end,
            )?)),
        }
    }

    /// Recomputes pay periods from the cached events, flagging windows
    /// that already have a submission.
    pub fn periods(&self, now: NaiveDateTime) -> Vec<PayPeriod> {
        let mut periods = calculate_biweekly_periods(&self.events, now);
        mark_submitted(&mut periods, &self.submissions);
        periods
    }

    /// Returns the cached clock events.
    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    /// Returns the submission history, oldest first.
    pub fn submissions(&self) -> &[PayrollSubmission] {
        &self.submissions
    }

    /// Looks up a submission by id.
    pub fn submission(&self, id: Uuid) -> Option<&PayrollSubmission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Looks up a timesheet entry by id.
    pub fn timesheet(&self, id: &str) -> Option<&TimesheetEntry> {
        self.timesheets.get(id)
    }

    fn submission_mut(&mut self, id: Uuid) -> EngineResult<&mut PayrollSubmission> {
        self.submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EngineError::SubmissionNotFound { id })
    }

    fn timesheet_mut(&mut self, id: &str) -> EngineResult<&mut TimesheetEntry> {
        self.timesheets
            .get_mut(id)
            .ok_or_else(|| EngineError::TimesheetNotFound { id: id.to_string() })
    }
}

//! Clock event model and related types.
//!
//! This module defines the ClockEvent struct and ClockEventType enum
//! for representing raw clock-in/clock-out records in the aggregation system.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kind of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventType {
    /// The start of a work session.
    ClockIn,
    /// The end of a work session.
    ClockOut,
}

/// A single clock-in or clock-out record for a user.
///
/// Events arrive in no particular order; callers sort them by `timestamp`
/// ascending before pairing.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDateTime;
///
/// let event = ClockEvent {
///     id: "evt_001".to_string(),
///     event_type: ClockEventType::ClockIn,
///     timestamp: NaiveDateTime::parse_from_str("2025-03-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     user_id: "drv_042".to_string(),
///     user_name: "Dana Reyes".to_string(),
/// };
/// assert_eq!(event.date(), event.timestamp.date());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Opaque identifier for the event.
    pub id: String,
    /// Whether this is a clock-in or a clock-out.
    #[serde(rename = "type")]
    pub event_type: ClockEventType,
    /// When the event occurred (local time).
    pub timestamp: NaiveDateTime,
    /// The user the event belongs to.
    pub user_id: String,
    /// Display name of the user.
    pub user_name: String,
}

impl ClockEvent {
    /// Returns the local calendar date the event falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns true if this is a clock-in event.
    pub fn is_clock_in(&self) -> bool {
        self.event_type == ClockEventType::ClockIn
    }
}

//! Clock event pairing.
//!
//! This is the single pairing implementation shared by the daily-hours
//! view and the bi-weekly period view, which apply different overtime
//! thresholds (8 h/day and 80 h/period respectively) to the same matched
//! sessions.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ClockEvent, WorkSession};

/// Matches clock-in/clock-out pairs within each calendar day.
///
/// Events are sorted ascending by timestamp (id breaks ties so the result
/// is deterministic for arbitrarily-ordered input), grouped by the local
/// calendar date of their timestamp, and consumed two at a time in
/// positional pairs. A pair contributes a session only when the first
/// event is a clock-in and the second a clock-out; mismatched pairs and a
/// trailing unpaired event contribute nothing.
///
/// # Example
///
/// ```
/// use timeclock_engine::aggregation::pair_sessions;
/// use timeclock_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDateTime;
///
/// let ts = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let event = |id: &str, t, s| ClockEvent {
///     id: id.to_string(),
///     event_type: t,
///     timestamp: ts(s),
///     user_id: "drv_042".to_string(),
///     user_name: "Dana Reyes".to_string(),
/// };
///
/// let sessions = pair_sessions(&[
///     event("e2", ClockEventType::ClockOut, "2025-03-03 16:00:00"),
///     event("e1", ClockEventType::ClockIn, "2025-03-03 08:00:00"),
/// ]);
/// assert_eq!(sessions.len(), 1);
/// assert_eq!(sessions[0].minutes, 480);
/// ```
pub fn pair_sessions(events: &[ClockEvent]) -> Vec<WorkSession> {
    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut by_date: BTreeMap<NaiveDate, Vec<&ClockEvent>> = BTreeMap::new();
    for event in sorted {
        by_date.entry(event.date()).or_default().push(event);
    }

    let mut sessions = Vec::new();
    for (date, day_events) in by_date {
        for pair in day_events.chunks_exact(2) {
            if pair[0].is_clock_in() && !pair[1].is_clock_in() {
                sessions.push(WorkSession {
                    date,
                    clock_in: pair[0].timestamp,
                    clock_out: pair[1].timestamp,
                    minutes: (pair[1].timestamp - pair[0].timestamp).num_minutes(),
                });
            }
        }
    }
    sessions
}

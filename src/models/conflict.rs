//! Conflict diagnostics.
//!
//! Conflicts are an ordered, append-only log of human-readable
//! messages describing infeasibility or fallback placements. The order
//! reflects discovery order and is part of the observable output: the
//! log is returned even when the run aborts with a null schedule.

use serde::{Deserialize, Serialize};

use super::{Day, TimeSlot};

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Total required sessions exceed total free slots; terminal.
    CapacityExceeded,
    /// A course has no free day at its preferred slot; terminal.
    PreferredSlotUnavailable,
    /// Informational: a session was moved to an alternate slot.
    AlternateSlotUsed,
    /// A queued session found no free cell anywhere in its search.
    SessionUnplaced,
}

/// A single diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

impl Conflict {
    /// Global infeasibility: more sessions required than free slots.
    pub fn capacity_exceeded(required: u64, available: usize) -> Self {
        Self {
            kind: ConflictKind::CapacityExceeded,
            message: format!(
                "Cannot create schedule: Required {required} sessions but only \
                 {available} slots are available in the schedule."
            ),
        }
    }

    /// A course's preferred slot is occupied on every day of the week.
    pub fn preferred_slot_unavailable(course: &str) -> Self {
        Self {
            kind: ConflictKind::PreferredSlotUnavailable,
            message: format!("No solution possible for {course} - not enough available slots!"),
        }
    }

    /// A session was placed in an alternate slot instead of the
    /// preferred one.
    pub fn alternate_slot_used(course: &str, day: Day, slot: TimeSlot, preferred: TimeSlot) -> Self {
        Self {
            kind: ConflictKind::AlternateSlotUsed,
            message: format!(
                "Course '{course}' has been mapped in day '{day}' in timeslot '{slot}' \
                 due to no free slots on timeslot '{preferred}'"
            ),
        }
    }

    /// A queued session exhausted every alternate day/slot candidate.
    pub fn session_unplaced(course: &str, preferred: TimeSlot) -> Self {
        Self {
            kind: ConflictKind::SessionUnplaced,
            message: format!(
                "Course '{course}' has a session that could not be placed: no free slot \
                 remains on any day near timeslot '{preferred}'"
            ),
        }
    }
}

/// Ordered, append-only collection of conflicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictLog {
    entries: Vec<Conflict>,
}

impl ConflictLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a conflict.
    pub fn push(&mut self, conflict: Conflict) {
        self.entries.push(conflict);
    }

    /// Whether any conflicts were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded conflicts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.entries.iter()
    }

    /// Messages in discovery order, as emitted in the response document.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.message.clone()).collect()
    }
}

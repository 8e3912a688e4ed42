//! Course requirement model.
//!
//! A `CourseRequirement` is the planner's only input per course: a
//! preferred timeslot and how many weekly study sessions are needed.
//! How it was produced (user input, a trained predictor) is outside
//! the core — see [`crate::scheduler::RequirementSource`].

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Builds the grid label for a course's study session.
pub fn study_label(course: &str) -> String {
    format!("Study: {course}")
}

/// A course's weekly study demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequirement {
    /// Course name.
    pub name: String,
    /// Timeslot the sessions should preferably land in.
    pub preferred_slot: TimeSlot,
    /// Number of sessions needed per week (at least 1).
    pub sessions_required: u32,
}

impl CourseRequirement {
    /// Creates a new course requirement.
    pub fn new(name: impl Into<String>, preferred_slot: TimeSlot, sessions_required: u32) -> Self {
        Self {
            name: name.into(),
            preferred_slot,
            sessions_required,
        }
    }

    /// The grid label this course's sessions are written under.
    pub fn study_label(&self) -> String {
        study_label(&self.name)
    }
}

/// Sessions a course could not place during the preferred-slot pass,
/// carried into the fallback pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingSessions {
    /// Course name.
    pub course: String,
    /// The slot the course originally preferred.
    pub preferred_slot: TimeSlot,
    /// Sessions still to place.
    pub remaining: u32,
}

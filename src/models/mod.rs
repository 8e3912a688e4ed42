//! Study-planning domain models.
//!
//! Core data types for the weekly planning problem: the grid axes and
//! the grid itself, the commitments that seed it, the per-course
//! demand the planner consumes, and the conflict diagnostics it emits.

mod activity;
mod conflict;
mod course;
mod grid;
mod week;

pub use activity::{ExternalActivity, LocationKind};
pub use conflict::{Conflict, ConflictKind, ConflictLog};
pub use course::{study_label, CourseRequirement, RemainingSessions};
pub use grid::{FixedCommitments, ScheduleGrid, BREAK_LABEL};
pub use week::{Day, TimeSlot};

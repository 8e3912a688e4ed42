//! Weekly study-session planning.
//!
//! # Pipeline
//!
//! 1. Seed the grid with fixed commitments and external activities
//!    (`seed_grid`), inserting recovery breaks.
//! 2. Pre-check capacity: if total required sessions exceed total free
//!    cells, abort with a single conflict and a null schedule.
//! 3. For each course in supplied order, run the preferred-slot pass
//!    against the grid as left by earlier courses; queue shortfalls.
//!    A course with zero free preferred-slot days aborts the run.
//! 4. Drain the shortfall queue into alternate slots, appending a
//!    diagnostic per placement.
//!
//! Everything is a pure function of the inputs: the grid and the
//! conflict log live for one `plan` call, so concurrent requests never
//! share state.

mod seed;
mod solver;

pub use seed::seed_grid;

use crate::models::{
    Conflict, ConflictLog, CourseRequirement, ExternalActivity, FixedCommitments, ScheduleGrid,
};
use solver::{allocate_preferred, place_fallbacks, PreferredOutcome};

/// Produces the course requirements the planner consumes.
///
/// The planner depends only on the output shape, never on how it was
/// produced — a trained predictor, stored preferences, and plain
/// vectors are interchangeable behind this trait.
pub trait RequirementSource {
    /// Course requirements in processing order.
    fn course_requirements(&self) -> Vec<CourseRequirement>;
}

impl RequirementSource for [CourseRequirement] {
    fn course_requirements(&self) -> Vec<CourseRequirement> {
        self.to_vec()
    }
}

impl RequirementSource for Vec<CourseRequirement> {
    fn course_requirements(&self) -> Vec<CourseRequirement> {
        self.clone()
    }
}

/// Result of one planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    /// The filled grid, or `None` when the run aborted.
    pub schedule: Option<ScheduleGrid>,
    /// Diagnostics in discovery order, populated even on abort.
    pub conflicts: ConflictLog,
}

impl PlanOutcome {
    /// Whether a schedule was produced.
    pub fn is_feasible(&self) -> bool {
        self.schedule.is_some()
    }

    fn infeasible(conflicts: ConflictLog) -> Self {
        Self {
            schedule: None,
            conflicts,
        }
    }
}

/// The study-session planner.
///
/// Stateless: every call to [`StudyPlanner::plan`] builds its own grid
/// and conflict log.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use study_schedule::models::{CourseRequirement, TimeSlot};
/// use study_schedule::scheduler::StudyPlanner;
///
/// let courses = vec![CourseRequirement::new("Math", TimeSlot::Evening, 3)];
/// let outcome = StudyPlanner::new().plan(&HashMap::new(), &[], &courses);
/// assert!(outcome.is_feasible());
/// assert!(outcome.conflicts.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner;

impl StudyPlanner {
    /// Creates a planner.
    pub fn new() -> Self {
        Self
    }

    /// Plans one week of study sessions.
    ///
    /// Courses are processed in exactly the order the source yields
    /// them; earlier courses get first access to the most open days.
    pub fn plan(
        &self,
        commitments: &FixedCommitments,
        activities: &[ExternalActivity],
        source: &(impl RequirementSource + ?Sized),
    ) -> PlanOutcome {
        let mut conflicts = ConflictLog::new();
        let mut grid = seed_grid(commitments, activities);
        let courses = source.course_requirements();

        // Per-course counts are u32; the total gets a wider type so a
        // huge request reports infeasibility instead of overflowing.
        let required: u64 = courses
            .iter()
            .map(|c| u64::from(c.sessions_required))
            .sum();
        let available = grid.total_free();
        if required > available as u64 {
            conflicts.push(Conflict::capacity_exceeded(required, available));
            return PlanOutcome::infeasible(conflicts);
        }

        let mut shortfalls = Vec::new();
        for course in &courses {
            match allocate_preferred(&mut grid, course) {
                PreferredOutcome::Placed => {}
                PreferredOutcome::Shortfall(pending) => shortfalls.push(pending),
                PreferredOutcome::Exhausted => {
                    conflicts.push(Conflict::preferred_slot_unavailable(&course.name));
                    return PlanOutcome::infeasible(conflicts);
                }
            }
        }

        place_fallbacks(&mut grid, &shortfalls, &mut conflicts);

        PlanOutcome {
            schedule: Some(grid),
            conflicts,
        }
    }
}

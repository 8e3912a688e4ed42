//! Weekly study-session planning.
//!
//! Allocates repeating study sessions for a set of courses into a
//! fixed 7-day × 7-slot weekly grid that is already partially occupied
//! by lectures and external activities. Each course names a preferred
//! timeslot; sessions are spread across the days with the most
//! remaining openness, and overflow lands in nearby alternate slots
//! with a human-readable conflict diagnostic per move.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `TimeSlot`, `ScheduleGrid`,
//!   `ExternalActivity`, `CourseRequirement`, `Conflict`
//! - **`scheduler`**: The planner — occupancy seeding, preferred-slot
//!   allocation, fallback placement
//! - **`validation`**: Input integrity checks (duplicate names, zero
//!   session counts)
//! - **`request`**: JSON request/response documents for the process
//!   boundary
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use study_schedule::models::{CourseRequirement, Day, TimeSlot};
//! use study_schedule::scheduler::StudyPlanner;
//!
//! let courses = vec![
//!     CourseRequirement::new("Math", TimeSlot::Night, 3),
//!     CourseRequirement::new("Physics", TimeSlot::LateAfternoon, 2),
//! ];
//! let outcome = StudyPlanner::new().plan(&HashMap::new(), &[], &courses);
//!
//! let grid = outcome.schedule.expect("plenty of room in an empty week");
//! assert_eq!(grid.get(Day::Monday, TimeSlot::Night), "Study: Math");
//! ```

pub mod models;
pub mod request;
pub mod scheduler;
pub mod validation;

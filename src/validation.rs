//! Input validation for planning requests.
//!
//! Checks structural integrity of the request before any allocation:
//! - Duplicate course names
//! - Duplicate activity names
//! - Courses requiring zero sessions
//!
//! Validation failures abort the request before the grid is built;
//! they are errors, not conflicts.

use crate::models::{CourseRequirement, ExternalActivity};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same name.
    DuplicateCourse,
    /// Two activities share the same name.
    DuplicateActivity,
    /// A course requires zero weekly sessions.
    ZeroSessions,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the activities and courses of a planning request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    activities: &[ExternalActivity],
    courses: &[CourseRequirement],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut activity_names = HashSet::new();
    for activity in activities {
        if !activity_names.insert(activity.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateActivity,
                format!("Duplicate activity name: {}", activity.name),
            ));
        }
    }

    let mut course_names = HashSet::new();
    for course in courses {
        if !course_names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course name: {}", course.name),
            ));
        }
        if course.sessions_required == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSessions,
                format!("Course '{}' requires zero sessions", course.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

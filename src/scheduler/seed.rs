//! Occupancy seeding.
//!
//! Builds the initial grid from fixed commitments and external
//! activities before any study session is placed.
//!
//! # Ordering
//!
//! Each day is seeded independently: commitment cells are copied in
//! slot order, then a single `Break` is written directly after the
//! day's last commitment slot (if a next slot exists). External
//! activities are applied afterwards, in supplied order, each followed
//! by its own `Break` when outdoor. The phase order is a contract: an
//! activity or its break may overwrite a class-derived break, never
//! the other way around.

use crate::models::{Day, ExternalActivity, FixedCommitments, ScheduleGrid, TimeSlot, BREAK_LABEL};

/// Seeds a fresh grid with fixed commitments and external activities.
pub fn seed_grid(commitments: &FixedCommitments, activities: &[ExternalActivity]) -> ScheduleGrid {
    let mut grid = ScheduleGrid::new();

    for day in Day::ALL {
        let mut last_occupied: Option<TimeSlot> = None;
        if let Some(row) = commitments.get(&day) {
            for slot in TimeSlot::ALL {
                if let Some(label) = row.get(&slot) {
                    grid.set(day, slot, label.clone());
                    last_occupied = Some(slot);
                }
            }
        }

        // One recovery break after the day's last lecture or section.
        if let Some(next) = last_occupied.and_then(TimeSlot::next) {
            grid.set(day, next, BREAK_LABEL);
        }
    }

    for activity in activities {
        grid.set(activity.day, activity.slot, activity.name.clone());
        if activity.location.forces_break() {
            if let Some(next) = activity.slot.next() {
                grid.set(activity.day, next, BREAK_LABEL);
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationKind;
    use std::collections::HashMap;

    fn commitments(entries: &[(Day, TimeSlot, &str)]) -> FixedCommitments {
        let mut map: FixedCommitments = HashMap::new();
        for &(day, slot, label) in entries {
            map.entry(day).or_default().insert(slot, label.to_string());
        }
        map
    }

    #[test]
    fn test_break_after_last_commitment() {
        let fixed = commitments(&[
            (Day::Monday, TimeSlot::EarlyMorning, "Calculus"),
            (Day::Monday, TimeSlot::Midday, "Physics"),
        ]);
        let grid = seed_grid(&fixed, &[]);

        assert_eq!(grid.get(Day::Monday, TimeSlot::EarlyMorning), "Calculus");
        assert_eq!(grid.get(Day::Monday, TimeSlot::Midday), "Physics");
        // Break lands after the *last* commitment, not each one.
        assert!(grid.is_free(Day::Monday, TimeSlot::LateMorning));
        assert_eq!(grid.get(Day::Monday, TimeSlot::EarlyAfternoon), BREAK_LABEL);
        assert_eq!(grid.free_slots(Day::Monday), 4);
    }

    #[test]
    fn test_no_break_past_end_of_day() {
        let fixed = commitments(&[(Day::Friday, TimeSlot::Night, "Evening Seminar")]);
        let grid = seed_grid(&fixed, &[]);

        assert_eq!(grid.get(Day::Friday, TimeSlot::Night), "Evening Seminar");
        assert_eq!(grid.free_slots(Day::Friday), 6);
    }

    #[test]
    fn test_outdoor_activity_gets_break() {
        let football = ExternalActivity::new(
            "Football",
            Day::Saturday,
            TimeSlot::LateAfternoon,
            LocationKind::Outdoor,
        );
        let grid = seed_grid(&HashMap::new(), &[football]);

        assert_eq!(grid.get(Day::Saturday, TimeSlot::LateAfternoon), "Football");
        assert_eq!(grid.get(Day::Saturday, TimeSlot::Evening), BREAK_LABEL);
    }

    #[test]
    fn test_indoor_activity_no_break() {
        let chess = ExternalActivity::new(
            "Chess Club",
            Day::Sunday,
            TimeSlot::Midday,
            LocationKind::Indoor,
        );
        let grid = seed_grid(&HashMap::new(), &[chess]);

        assert_eq!(grid.get(Day::Sunday, TimeSlot::Midday), "Chess Club");
        assert!(grid.is_free(Day::Sunday, TimeSlot::EarlyAfternoon));
    }

    #[test]
    fn test_outdoor_at_last_slot_skips_break() {
        let run = ExternalActivity::new(
            "Night Run",
            Day::Wednesday,
            TimeSlot::Night,
            LocationKind::Outdoor,
        );
        let grid = seed_grid(&HashMap::new(), &[run]);
        assert_eq!(grid.free_slots(Day::Wednesday), 6);
    }

    #[test]
    fn test_activity_overwrites_class_break() {
        // Lecture at 8AM-10AM puts a break at 10AM-12PM; an activity
        // applied afterwards claims that cell.
        let fixed = commitments(&[(Day::Tuesday, TimeSlot::EarlyMorning, "Biology")]);
        let gym = ExternalActivity::new(
            "Gym",
            Day::Tuesday,
            TimeSlot::LateMorning,
            LocationKind::Indoor,
        );
        let grid = seed_grid(&fixed, &[gym]);

        assert_eq!(grid.get(Day::Tuesday, TimeSlot::LateMorning), "Gym");
    }

    #[test]
    fn test_later_activity_overwrites_earlier() {
        let first = ExternalActivity::new(
            "Swimming",
            Day::Thursday,
            TimeSlot::Evening,
            LocationKind::Indoor,
        );
        let second = ExternalActivity::new(
            "Volunteering",
            Day::Thursday,
            TimeSlot::Evening,
            LocationKind::Indoor,
        );
        let grid = seed_grid(&HashMap::new(), &[first, second]);

        assert_eq!(grid.get(Day::Thursday, TimeSlot::Evening), "Volunteering");
    }
}

//! Preferred-slot allocation and fallback placement.
//!
//! # Algorithm
//!
//! Per course, the allocator looks only at the course's preferred
//! timeslot: it collects the days where that cell is free (canonical
//! order), ranks them by the current day weights, and writes the top
//! `min(required, free days)` sessions. Ties keep canonical day order
//! via a stable sort, so the selection is a deterministic top-k — no
//! search or backtracking.
//!
//! Shortfalls are queued and drained after every course has run. The
//! fallback placer alternates outward from the preferred slot (one
//! before, one after, two before, ...) and, for each session in turn,
//! re-ranks all seven days by freshly computed weights and takes the
//! first free cell in that scan order.

use crate::models::{
    Conflict, ConflictLog, CourseRequirement, Day, RemainingSessions, ScheduleGrid,
};

/// What the preferred-slot pass did for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PreferredOutcome {
    /// Every required session landed in the preferred slot.
    Placed,
    /// Some sessions placed; the rest must go to alternate slots.
    Shortfall(RemainingSessions),
    /// The preferred slot is occupied on all seven days; terminal.
    Exhausted,
}

/// Ranks days descending by weight; equal weights keep the incoming
/// (canonical) order because the sort is stable.
fn rank_days_by_weight(days: &mut [Day], weights: &[usize; Day::COUNT]) {
    days.sort_by(|a, b| weights[b.index()].cmp(&weights[a.index()]));
}

/// Runs the preferred-slot pass for one course against the current
/// grid state.
pub(crate) fn allocate_preferred(
    grid: &mut ScheduleGrid,
    course: &CourseRequirement,
) -> PreferredOutcome {
    let slot = course.preferred_slot;
    let mut free_days: Vec<Day> = Day::ALL
        .into_iter()
        .filter(|&day| grid.is_free(day, slot))
        .collect();

    if free_days.is_empty() {
        return PreferredOutcome::Exhausted;
    }

    // Weights are read once per course, before any of its sessions
    // are written.
    let weights = grid.day_weights();
    rank_days_by_weight(&mut free_days, &weights);

    let placed = (course.sessions_required as usize).min(free_days.len());
    let label = course.study_label();
    for &day in free_days.iter().take(placed) {
        grid.set(day, slot, label.clone());
    }

    let remaining = course.sessions_required - placed as u32;
    if remaining == 0 {
        PreferredOutcome::Placed
    } else {
        PreferredOutcome::Shortfall(RemainingSessions {
            course: course.name.clone(),
            preferred_slot: slot,
            remaining,
        })
    }
}

/// Drains the shortfall queue into alternate slots, appending a
/// diagnostic for every placement and for every session that finds no
/// free cell at all.
pub(crate) fn place_fallbacks(
    grid: &mut ScheduleGrid,
    queue: &[RemainingSessions],
    conflicts: &mut ConflictLog,
) {
    for pending in queue {
        let alternates = pending.preferred_slot.alternates();
        let label = crate::models::study_label(&pending.course);

        // One session at a time: later sessions see the cells taken
        // by earlier ones.
        for _ in 0..pending.remaining {
            let weights = grid.day_weights();
            let mut days = Day::ALL.to_vec();
            rank_days_by_weight(&mut days, &weights);

            let cell = days.iter().find_map(|&day| {
                alternates
                    .iter()
                    .find(|&&slot| grid.is_free(day, slot))
                    .map(|&slot| (day, slot))
            });

            match cell {
                Some((day, slot)) => {
                    grid.set(day, slot, label.clone());
                    conflicts.push(Conflict::alternate_slot_used(
                        &pending.course,
                        day,
                        slot,
                        pending.preferred_slot,
                    ));
                }
                None => {
                    conflicts.push(Conflict::session_unplaced(
                        &pending.course,
                        pending.preferred_slot,
                    ));
                }
            }
        }
    }
}

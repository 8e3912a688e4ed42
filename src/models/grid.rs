//! Schedule grid model.
//!
//! The grid is a total function Day × TimeSlot → label. An empty
//! string means the cell is free; exactly one label occupies a cell at
//! a time and later writes overwrite earlier ones. One grid is created
//! per planning request, mutated in place through seeding and
//! allocation, then assembled into the response and discarded.
//!
//! The per-day empty-cell counts (`free_slots`, `day_weights`) are the
//! availability weights that drive day selection. They are computed
//! fresh from the grid on every call — never cached — so each reading
//! reflects the grid at that instant.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{Day, TimeSlot};

/// Label written into the slot following a day's last lecture, and
/// after outdoor activities.
pub const BREAK_LABEL: &str = "Break";

/// Fixed commitments supplied by the caller: only occupied cells are
/// present.
pub type FixedCommitments = HashMap<Day, HashMap<TimeSlot, String>>;

/// The weekly Day × TimeSlot grid of cell labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    cells: [[String; TimeSlot::COUNT]; Day::COUNT],
}

impl ScheduleGrid {
    /// Creates a grid with every cell free.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
        }
    }

    /// The label at a cell; empty string means free.
    #[inline]
    pub fn get(&self, day: Day, slot: TimeSlot) -> &str {
        &self.cells[day.index()][slot.index()]
    }

    /// Writes a label into a cell, overwriting any previous label.
    pub fn set(&mut self, day: Day, slot: TimeSlot, label: impl Into<String>) {
        self.cells[day.index()][slot.index()] = label.into();
    }

    /// Whether a cell is free.
    #[inline]
    pub fn is_free(&self, day: Day, slot: TimeSlot) -> bool {
        self.get(day, slot).is_empty()
    }

    /// Count of free cells in one day, over the full slot span.
    pub fn free_slots(&self, day: Day) -> usize {
        self.cells[day.index()]
            .iter()
            .filter(|label| label.is_empty())
            .count()
    }

    /// Free-cell count per day, indexed by canonical day order.
    ///
    /// This is the selection weight for day ranking.
    pub fn day_weights(&self) -> [usize; Day::COUNT] {
        std::array::from_fn(|i| self.free_slots(Day::ALL[i]))
    }

    /// Count of free cells across the whole grid.
    pub fn total_free(&self) -> usize {
        Day::ALL.iter().map(|&day| self.free_slots(day)).sum()
    }

    /// Renders the grid as nested day → slot → label maps in canonical
    /// order, including free cells as empty strings.
    pub fn to_table(&self) -> BTreeMap<Day, BTreeMap<TimeSlot, String>> {
        Day::ALL
            .iter()
            .map(|&day| {
                let row = TimeSlot::ALL
                    .iter()
                    .map(|&slot| (slot, self.get(day, slot).to_string()))
                    .collect();
                (day, row)
            })
            .collect()
    }
}

impl Default for ScheduleGrid {
    fn default() -> Self {
        Self::new()
    }
}

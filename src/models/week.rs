//! Weekly grid axes: days and timeslots.
//!
//! Both axes are small ordered enumerations rather than free-form
//! strings. The declaration order is the canonical order: it drives
//! tie-breaking during day selection and the outward alternation used
//! by the fallback search, so it is part of the observable contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week, in canonical Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Number of days in the grid.
    pub const COUNT: usize = 7;

    /// All days in canonical order.
    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in canonical order (0-based).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label ("Monday" .. "Sunday").
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A two-hour timeslot within the 8AM-10PM daily span.
///
/// Slots are contiguous; adjacency in declaration order is what the
/// fallback placer alternates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "8AM-10AM")]
    EarlyMorning,
    #[serde(rename = "10AM-12PM")]
    LateMorning,
    #[serde(rename = "12PM-2PM")]
    Midday,
    #[serde(rename = "2PM-4PM")]
    EarlyAfternoon,
    #[serde(rename = "4PM-6PM")]
    LateAfternoon,
    #[serde(rename = "6PM-8PM")]
    Evening,
    #[serde(rename = "8PM-10PM")]
    Night,
}

impl TimeSlot {
    /// Number of timeslots per day.
    pub const COUNT: usize = 7;

    /// All timeslots in daily order.
    pub const ALL: [TimeSlot; TimeSlot::COUNT] = [
        TimeSlot::EarlyMorning,
        TimeSlot::LateMorning,
        TimeSlot::Midday,
        TimeSlot::EarlyAfternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Position in daily order (0-based).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label ("8AM-10AM" .. "8PM-10PM").
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "8AM-10AM",
            TimeSlot::LateMorning => "10AM-12PM",
            TimeSlot::Midday => "12PM-2PM",
            TimeSlot::EarlyAfternoon => "2PM-4PM",
            TimeSlot::LateAfternoon => "4PM-6PM",
            TimeSlot::Evening => "6PM-8PM",
            TimeSlot::Night => "8PM-10PM",
        }
    }

    /// The slot directly after this one, if still within the daily span.
    pub fn next(self) -> Option<TimeSlot> {
        TimeSlot::ALL.get(self.index() + 1).copied()
    }

    /// Alternate slots around this one, nearest first.
    ///
    /// Alternates outward: one slot before, one after, two before, two
    /// after, and so on. Distances that leave the daily span are
    /// skipped; the alternation continues on whichever side remains.
    /// The slot itself is never included.
    pub fn alternates(self) -> Vec<TimeSlot> {
        let center = self.index();
        let mut slots = Vec::with_capacity(TimeSlot::COUNT - 1);
        for distance in 1..TimeSlot::COUNT {
            if let Some(before) = center.checked_sub(distance) {
                slots.push(TimeSlot::ALL[before]);
            }
            if let Some(&after) = TimeSlot::ALL.get(center + distance) {
                slots.push(after);
            }
        }
        slots
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_day_order() {
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[6], Day::Sunday);
        assert!(Day::Monday < Day::Sunday);
        assert_eq!(Day::Wednesday.index(), 2);
    }

    #[test]
    fn test_slot_next() {
        assert_eq!(TimeSlot::EarlyMorning.next(), Some(TimeSlot::LateMorning));
        assert_eq!(TimeSlot::Night.next(), None);
    }

    #[test]
    fn test_alternates_interior_slot() {
        // 4PM-6PM: 2PM-4PM, 6PM-8PM, 12PM-2PM, 8PM-10PM, 10AM-12PM, 8AM-10AM
        let alts = TimeSlot::LateAfternoon.alternates();
        assert_eq!(
            alts,
            vec![
                TimeSlot::EarlyAfternoon,
                TimeSlot::Evening,
                TimeSlot::Midday,
                TimeSlot::Night,
                TimeSlot::LateMorning,
                TimeSlot::EarlyMorning,
            ]
        );
    }

    #[test]
    fn test_alternates_edge_slot() {
        // First slot has no "before" side; everything comes from after.
        let alts = TimeSlot::EarlyMorning.alternates();
        assert_eq!(alts, TimeSlot::ALL[1..].to_vec());

        // Last slot mirrors it.
        let alts = TimeSlot::Night.alternates();
        let mut expected = TimeSlot::ALL[..6].to_vec();
        expected.reverse();
        assert_eq!(alts, expected);
    }

    #[test]
    fn test_alternates_cover_all_other_slots() {
        for slot in TimeSlot::ALL {
            let alts = slot.alternates();
            assert_eq!(alts.len(), TimeSlot::COUNT - 1);
            assert!(!alts.contains(&slot));
        }
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&TimeSlot::Midday).unwrap();
        assert_eq!(json, "\"12PM-2PM\"");
        let slot: TimeSlot = serde_json::from_str("\"8PM-10PM\"").unwrap();
        assert_eq!(slot, TimeSlot::Night);

        let json = serde_json::to_string(&Day::Saturday).unwrap();
        assert_eq!(json, "\"Saturday\"");
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Day::Friday.to_string(), "Friday");
        assert_eq!(TimeSlot::Evening.to_string(), "6PM-8PM");
    }
}

//! External activity model.
//!
//! A named one-slot commitment outside the academic timetable (sports,
//! clubs, work shifts). Outdoor activities force a break in the
//! immediately following slot, when one exists in the daily span.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Day, TimeSlot};

/// Where an activity takes place.
///
/// Only `Outdoor` has scheduling consequences; unrecognized kinds are
/// accepted and treated like `Indoor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationKind {
    Indoor,
    Outdoor,
    Other,
}

impl<'de> Deserialize<'de> for LocationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "Indoor" => LocationKind::Indoor,
            "Outdoor" => LocationKind::Outdoor,
            _ => LocationKind::Other,
        })
    }
}

impl LocationKind {
    /// Whether a recovery break is required after the activity.
    #[inline]
    pub fn forces_break(self) -> bool {
        matches!(self, LocationKind::Outdoor)
    }
}

/// A one-off external commitment occupying a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalActivity {
    /// Activity name, written verbatim into the grid cell.
    pub name: String,
    /// Day the activity takes place.
    pub day: Day,
    /// Slot the activity occupies.
    pub slot: TimeSlot,
    /// Location kind; `Outdoor` forces a following break.
    pub location: LocationKind,
}

impl ExternalActivity {
    /// Creates a new external activity.
    pub fn new(name: impl Into<String>, day: Day, slot: TimeSlot, location: LocationKind) -> Self {
        Self {
            name: name.into(),
            day,
            slot,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forces_break() {
        assert!(LocationKind::Outdoor.forces_break());
        assert!(!LocationKind::Indoor.forces_break());
        assert!(!LocationKind::Other.forces_break());
    }

    #[test]
    fn test_unknown_location_kind_deserializes() {
        let kind: LocationKind = serde_json::from_str("\"Rooftop\"").unwrap();
        assert_eq!(kind, LocationKind::Other);
    }
}

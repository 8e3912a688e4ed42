//! Request and response documents.
//!
//! The process boundary exchanges one JSON request for one JSON
//! response. Object order in `external_activities` and `courses` is
//! the processing order, so both are deserialized into ordered
//! `(name, value)` pairs instead of hash maps — identical documents
//! must always produce identical plans.
//!
//! # Request shape
//!
//! ```json
//! {
//!   "college_schedule": {"Monday": {"8AM-10AM": "Calculus"}},
//!   "external_activities": {"Football": ["Saturday", "12PM-2PM", "Outdoor"]},
//!   "courses": {"Math": ["8PM-10PM", 3]}
//! }
//! ```
//!
//! # Response shape
//!
//! `{"schedule": {day: {slot: label}} | null, "conflicts": [..]}`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{
    CourseRequirement, Day, ExternalActivity, FixedCommitments, LocationKind, TimeSlot,
};
use crate::scheduler::PlanOutcome;
use crate::validation::{validate_input, ValidationError};

/// Why a request document was rejected.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The document is not valid JSON or does not match the schema.
    #[error("malformed request document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document parsed but failed integrity checks.
    #[error("invalid request: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// One planning request document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Fixed timetable; only occupied cells are present.
    #[serde(default)]
    pub college_schedule: FixedCommitments,
    /// Activity name → (day, slot, location kind), in document order.
    #[serde(default, with = "ordered_map")]
    pub external_activities: Vec<(String, (Day, TimeSlot, LocationKind))>,
    /// Course name → (preferred slot, sessions required), in document
    /// order. Document order is processing order.
    #[serde(default, with = "ordered_map")]
    pub courses: Vec<(String, (TimeSlot, u32))>,
}

impl PlanRequest {
    /// External activities as model values, in document order.
    pub fn activities(&self) -> Vec<ExternalActivity> {
        self.external_activities
            .iter()
            .map(|(name, (day, slot, location))| {
                ExternalActivity::new(name.clone(), *day, *slot, *location)
            })
            .collect()
    }

    /// Course requirements as model values, in document order.
    pub fn course_requirements(&self) -> Vec<CourseRequirement> {
        self.courses
            .iter()
            .map(|(name, (slot, sessions))| CourseRequirement::new(name.clone(), *slot, *sessions))
            .collect()
    }
}

/// Parses and validates a request document.
pub fn parse_request(document: &str) -> Result<PlanRequest, RequestError> {
    let request: PlanRequest = serde_json::from_str(document)?;
    validate_input(&request.activities(), &request.course_requirements())
        .map_err(RequestError::Invalid)?;
    Ok(request)
}

/// One planning response document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// The filled grid, or `null` when planning aborted.
    pub schedule: Option<BTreeMap<Day, BTreeMap<TimeSlot, String>>>,
    /// Diagnostics in discovery order; empty if none.
    pub conflicts: Vec<String>,
}

impl From<&PlanOutcome> for PlanResponse {
    fn from(outcome: &PlanOutcome) -> Self {
        Self {
            schedule: outcome.schedule.as_ref().map(|grid| grid.to_table()),
            conflicts: outcome.conflicts.messages(),
        }
    }
}

/// The error document emitted instead of a response on rejected input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

/// Serde adapter preserving JSON object order as a `Vec` of pairs.
mod ordered_map {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<K, V, S>(entries: &[(K, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        struct PairsVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for PairsVisitor<K, V>
        where
            K: Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = Vec<(K, V)>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(PairsVisitor(PhantomData))
    }
}

//! Event-type classification — an ordered list of phrase predicates.
//!
//! Notice vocabularies overlap (a raid body can mention "encounter"), so
//! determinism comes from a total order: the first matching rule wins.
//! Input must already be normalized (`normalize::normalize`).

use pxstats_core::{EncounterSource, EventType};

/// The outcome of classifying one notice blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: EventType,
    /// Present exactly for `Encounter` outcomes.
    pub source: Option<EncounterSource>,
}

impl Classification {
    fn of(kind: EventType) -> Self {
        Self { kind, source: None }
    }
}

const ROCKET_WORDS: [&str; 5] = ["rocket", "invasion", "grunt", "leader", "giovanni"];
const FLED_WORDS: [&str; 3] = ["fled", "flee", "ran away"];

/// Classify a normalized blob into a single canonical event type.
/// `None` means the notice carries no recognized phrase and is discarded.
pub fn classify(norm: &str) -> Option<Classification> {
    // Catch success outranks everything: catch notices echo the original
    // encounter vocabulary.
    if norm.contains("pokemon caught successfully") || norm.contains("pokemon caught") {
        return Some(Classification::of(EventType::Catch));
    }

    if FLED_WORDS.iter().any(|w| norm.contains(w)) {
        return Some(Classification::of(EventType::Fled));
    }

    if ROCKET_WORDS.iter().any(|w| norm.contains(w)) {
        return Some(Classification::of(EventType::Rocket));
    }

    if norm.contains("raid battle") || norm.contains("raid") {
        return Some(Classification::of(EventType::Raid));
    }

    if norm.contains("max battle") {
        return Some(Classification::of(EventType::MaxBattle));
    }

    if norm.contains("quest") {
        return Some(Classification::of(EventType::Quest));
    }

    if norm.contains("hatch") {
        return Some(Classification::of(EventType::Hatch));
    }

    if norm.contains("encounter ping") || norm.contains("encounter") {
        let source = if norm.contains("incense") {
            EncounterSource::Incense
        } else if norm.contains("lure") {
            EncounterSource::Lure
        } else {
            EncounterSource::Wild
        };
        return Some(Classification {
            kind: EventType::Encounter,
            source: Some(source),
        });
    }

    None
}

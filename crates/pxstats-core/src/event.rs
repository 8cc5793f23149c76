//! Event model — the durable unit produced by classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain maximum for a single IV component.
pub const MAX_IV: u8 = 15;

/// Canonical event taxonomy. Closed set; classification never produces
/// anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Encounter,
    Catch,
    Fled,
    Quest,
    Raid,
    Rocket,
    MaxBattle,
    Hatch,
}

/// Sub-source carried by `Encounter` events.
///
/// Classification only emits `Wild`, `Incense`, and `Lure`; the remaining
/// values are legal on the wire and can enter via backfilled logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterSource {
    Wild,
    Incense,
    Lure,
    Quest,
    Raid,
    Rocket,
    Max,
}

/// A 3-component quality-stat tuple. The type guarantees exactly three
/// components; range is a domain convention, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IvTriple(pub u8, pub u8, pub u8);

impl IvTriple {
    /// All three components at the domain maximum.
    pub fn is_perfect(&self) -> bool {
        self.0 == MAX_IV && self.1 == MAX_IV && self.2 == MAX_IV
    }
}

impl std::fmt::Display for IvTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.0, self.1, self.2)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::Encounter => "Encounter",
            EventType::Catch => "Catch",
            EventType::Fled => "Fled",
            EventType::Quest => "Quest",
            EventType::Raid => "Raid",
            EventType::Rocket => "Rocket",
            EventType::MaxBattle => "MaxBattle",
            EventType::Hatch => "Hatch",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for EncounterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EncounterSource::Wild => "wild",
            EncounterSource::Incense => "incense",
            EncounterSource::Lure => "lure",
            EncounterSource::Quest => "quest",
            EncounterSource::Raid => "raid",
            EncounterSource::Rocket => "rocket",
            EncounterSource::Max => "max",
        };
        f.write_str(s)
    }
}

/// A classified, timestamped event. Immutable after construction; only
/// ever evicted by ring-buffer overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Present exactly for `Encounter` events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EncounterSource>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<IvTriple>,
    #[serde(default)]
    pub shiny: bool,
}

impl Event {
    pub fn new(kind: EventType, name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            kind,
            source: None,
            name: name.into(),
            iv: None,
            shiny: false,
        }
    }

    pub fn is_catch(&self) -> bool {
        self.kind == EventType::Catch
    }

    pub fn is_shiny_catch(&self) -> bool {
        self.kind == EventType::Catch && self.shiny
    }
}

/// One inbound notice from the chat-platform relay: opaque text surfaces
/// describing a single in-game occurrence. Not retained after
/// classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<NoticeField>,
}

/// A labeled sub-field of a notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeField {
    pub label: String,
    pub value: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(NoticeField {
            label: label.into(),
            value: value.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_iv() {
        assert!(IvTriple(15, 15, 15).is_perfect());
        assert!(!IvTriple(15, 15, 14).is_perfect());
        assert!(!IvTriple(0, 0, 0).is_perfect());
    }

    #[test]
    fn test_event_serde_round_trip() {
        let mut event = Event::new(EventType::Catch, "Larvitar", Utc::now());
        event.iv = Some(IvTriple(7, 9, 10));
        event.shiny = true;

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_encounter_source_wire_format() {
        let mut event = Event::new(EventType::Encounter, "Pidgey", Utc::now());
        event.source = Some(EncounterSource::Incense);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"source\":\"incense\""));
        assert!(json.contains("\"type\":\"Encounter\""));
    }

    #[test]
    fn test_absent_iv_not_serialized() {
        let event = Event::new(EventType::Fled, "?", Utc::now());
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("\"iv\""));
        assert!(!json.contains("\"source\""));
    }
}

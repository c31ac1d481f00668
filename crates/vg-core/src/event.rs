use std::fmt;

use serde::{Deserialize, Serialize};

/// The tag classifying a recorded event.
///
/// Serialized as the record format's plain strings ("incontro", "dialogo",
/// or a free tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    /// First meeting with a new character.
    Encounter,
    /// A conversation with a known character.
    Dialogue,
    /// A story-defined tag.
    Custom(String),
}

impl EventKind {
    /// The string form used in records.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Encounter => "incontro",
            Self::Dialogue => "dialogo",
            Self::Custom(s) => s.as_str(),
        }
    }
}

impl From<String> for EventKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "incontro" => Self::Encounter,
            "dialogo" => Self::Dialogue,
            _ => Self::Custom(s),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_tag().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// One significant event in the session's history.
///
/// Events are a human-readable log: append-only, never mutated or replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// What kind of event this is.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Human-readable description of what happened.
    #[serde(default)]
    pub description: String,
}

impl GameEvent {
    /// Record a new event.
    pub fn new(kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Shorthand for an "incontro" event.
    pub fn encounter(description: impl Into<String>) -> Self {
        Self::new(EventKind::Encounter, description)
    }

    /// Shorthand for a "dialogo" event.
    pub fn dialogue(description: impl Into<String>) -> Self {
        Self::new(EventKind::Dialogue, description)
    }
}

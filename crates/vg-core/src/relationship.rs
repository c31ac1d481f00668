use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounds for trust and hostility values.
const RELATION_MIN: i32 = 0;
const RELATION_MAX: i32 = 10;

/// The narrative role a known character plays.
///
/// Serialized as the plain strings of the record format ("villain", "npc",
/// or a free label) so saved games stay readable key-value documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// An adversarial character.
    Villain,
    /// A neutral or friendly character.
    Npc,
    /// A user- or story-defined label.
    Custom(String),
}

impl Role {
    /// The string form used in records and listings.
    pub fn as_label(&self) -> &str {
        match self {
            Self::Villain => "villain",
            Self::Npc => "npc",
            Self::Custom(s) => s.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "villain" => Self::Villain,
            "npc" => Self::Npc,
            _ => Self::Custom(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_label().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// How the player stands with one known character.
///
/// Created the first time a character is encountered, mutated by dialogue,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Trust toward the player, clamped to [0, 10].
    #[serde(default)]
    pub trust: i32,
    /// Hostility toward the player, clamped to [0, 10].
    #[serde(default)]
    pub hostility: i32,
    /// The character's narrative role.
    #[serde(default = "Role::default_npc")]
    pub role: Role,
    /// Free-form personality descriptor used to frame dialogue.
    #[serde(default)]
    pub personality: String,
}

impl Role {
    fn default_npc() -> Self {
        Self::Npc
    }
}

impl Relationship {
    /// Create a relationship record for a newly met character.
    pub fn new(role: Role, personality: impl Into<String>, trust: i32, hostility: i32) -> Self {
        Self {
            trust: trust.clamp(RELATION_MIN, RELATION_MAX),
            hostility: hostility.clamp(RELATION_MIN, RELATION_MAX),
            role,
            personality: personality.into(),
        }
    }

    /// Shift trust by `delta` and hostility by `-delta`, both clamped to
    /// [0, 10]. One shared draw moves the two values in opposite directions.
    pub fn adjust(&mut self, delta: i32) {
        self.trust = (self.trust + delta).clamp(RELATION_MIN, RELATION_MAX);
        self.hostility = (self.hostility - delta).clamp(RELATION_MIN, RELATION_MAX);
    }

    /// True when the character is an outright adversary: a villain whose
    /// hostility outweighs their trust.
    pub fn is_threatening(&self) -> bool {
        self.role == Role::Villain && self.hostility > self.trust
    }
}

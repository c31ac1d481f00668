use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::event::GameEvent;
use crate::relationship::Relationship;

fn default_location() -> String {
    "foresta".to_string()
}

fn default_region() -> String {
    "Italia".to_string()
}

fn default_language() -> String {
    "italiano".to_string()
}

fn default_known_languages() -> Vec<String> {
    vec![default_language()]
}

fn default_difficulty() -> String {
    "normale".to_string()
}

/// The persistent state of one game session.
///
/// Created once per session (fresh or decoded from a saved record) and
/// mutated by the command interpreter. Every field carries a serde default
/// so partial records decode to the values a fresh game would use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character.
    #[serde(default)]
    pub character: Character,
    /// Free-form description of the current place. Movement prepends the
    /// direction, producing compound strings like "nord del foresta" — a
    /// quirk of the record format, preserved deliberately.
    #[serde(default = "default_location")]
    pub location: String,
    /// Number of durability boundaries crossed so far. Incremented exactly
    /// when the state is persisted after a command.
    #[serde(default)]
    pub turn: u32,
    /// Append-only narrative log, insertion order = chronological.
    #[serde(default)]
    pub narrative_history: Vec<String>,
    /// Known characters keyed by their unique name. A character absent from
    /// this map is unknown and cannot be talked to.
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
    /// Append-only log of significant events.
    #[serde(default)]
    pub events: Vec<GameEvent>,
    /// Geographic region the session started in.
    #[serde(default = "default_region")]
    pub region: String,
    /// The language currently spoken around the player.
    #[serde(default = "default_language")]
    pub language: String,
    /// Languages the character understands. Never empty after creation.
    #[serde(default = "default_known_languages")]
    pub known_languages: Vec<String>,
    /// Difficulty label (e.g. "facile", "normale", "difficile").
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Character::default())
    }
}

impl GameState {
    /// Create a fresh state in the default forest, region, and language.
    pub fn new(character: Character) -> Self {
        Self {
            character,
            location: default_location(),
            turn: 0,
            narrative_history: Vec::new(),
            relationships: BTreeMap::new(),
            events: Vec::new(),
            region: default_region(),
            language: default_language(),
            known_languages: default_known_languages(),
            difficulty: default_difficulty(),
        }
    }

    /// Create a fresh state for a chosen region and difficulty. The starting
    /// language is derived from the region and becomes the only known one.
    pub fn for_region(
        character: Character,
        region: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        let region = region.into();
        let language = language_for_region(&region);
        Self {
            region,
            language: language.clone(),
            known_languages: vec![language],
            difficulty: difficulty.into(),
            ..Self::new(character)
        }
    }

    /// True if the character understands the language currently spoken.
    pub fn speaks_current_language(&self) -> bool {
        self.known_languages.contains(&self.language)
    }

    /// Replace the location with the compound form
    /// `"{direction} del {previous}"` and return the new value.
    pub fn move_toward(&mut self, direction: &str) -> &str {
        self.location = format!("{direction} del {}", self.location);
        &self.location
    }

    /// Encode this state as a JSON record for the persistence boundary.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(CoreError::Encode)
    }

    /// Decode a state from a JSON record. Missing fields fall back to the
    /// fresh-game defaults; only malformed JSON is an error.
    pub fn from_json(record: &str) -> CoreResult<Self> {
        serde_json::from_str(record).map_err(CoreError::Decode)
    }
}

/// The main language spoken in a region, defaulting to Italian for any
/// region not in the short built-in mapping. Case-insensitive.
pub fn language_for_region(region: &str) -> String {
    let language = match region.to_lowercase().as_str() {
        "inghilterra" | "usa" | "stati uniti" => "inglese",
        "francia" => "francese",
        "spagna" => "spagnolo",
        "germania" => "tedesco",
        _ => "italiano",
    };
    language.to_string()
}

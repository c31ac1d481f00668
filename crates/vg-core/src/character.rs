use serde::{Deserialize, Serialize};

/// Hit point ceiling enforced by game logic (not by the type system).
pub const MAX_HP: i32 = 10;

/// The six ability names, DnD style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Strength.
    Strength,
    /// Dexterity.
    Dexterity,
    /// Constitution.
    Constitution,
    /// Intelligence.
    Intelligence,
    /// Wisdom.
    Wisdom,
    /// Charisma.
    Charisma,
}

impl Ability {
    /// The short tag used when printing a character sheet.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Strength => "FOR",
            Self::Dexterity => "DES",
            Self::Constitution => "COS",
            Self::Intelligence => "INT",
            Self::Wisdom => "SAG",
            Self::Charisma => "CAR",
        }
    }
}

/// Derived bonus for an ability score: `floor((score - 10) / 2)`.
///
/// Euclidean division keeps the floor semantics for odd scores below 10
/// (`ability_modifier(9) == -1`, not 0). Recomputed on read, never stored.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

fn default_score() -> i32 {
    10
}

/// The six raw ability scores of a character.
///
/// Scores are rolled in [8, 15] at creation; nothing clamps them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Raw strength score.
    #[serde(default = "default_score")]
    pub strength: i32,
    /// Raw dexterity score.
    #[serde(default = "default_score")]
    pub dexterity: i32,
    /// Raw constitution score.
    #[serde(default = "default_score")]
    pub constitution: i32,
    /// Raw intelligence score.
    #[serde(default = "default_score")]
    pub intelligence: i32,
    /// Raw wisdom score.
    #[serde(default = "default_score")]
    pub wisdom: i32,
    /// Raw charisma score.
    #[serde(default = "default_score")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    /// Get the raw score for an ability.
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Get the derived modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.score(ability))
    }
}

fn default_name() -> String {
    "Sopravvissuto".to_string()
}

fn default_hp() -> i32 {
    MAX_HP
}

/// The player character: name, scores, inventory, and health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    #[serde(default = "default_name")]
    pub name: String,
    /// The six raw ability scores, flattened into the record.
    #[serde(flatten)]
    pub scores: AbilityScores,
    /// Carried item names, in pickup order. Duplicates are allowed.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Current hit points, kept in [0, MAX_HP] by [`Character::heal`] and
    /// [`Character::take_damage`].
    #[serde(default = "default_hp")]
    pub hp: i32,
    /// Whether the character has been infected. Tracked for future use;
    /// no current command mutates it.
    #[serde(default)]
    pub infected: bool,
}

impl Default for Character {
    fn default() -> Self {
        Self::new(default_name(), AbilityScores::default())
    }
}

impl Character {
    /// Create a character at full health with an empty inventory.
    pub fn new(name: impl Into<String>, scores: AbilityScores) -> Self {
        Self {
            name: name.into(),
            scores,
            inventory: Vec::new(),
            hp: MAX_HP,
            infected: false,
        }
    }

    /// Derived modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.scores.modifier(ability)
    }

    /// Restore hit points, capped at [`MAX_HP`]. Returns the new total.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hp = (self.hp + amount).min(MAX_HP);
        self.hp
    }

    /// Lose hit points, floored at zero. Returns the new total.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.hp = (self.hp - amount).max(0);
        self.hp
    }

    /// True if the inventory holds at least one item with this exact name.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Remove the first inventory entry with this exact name.
    /// Returns true if something was removed.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_reference_values() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(18), 4);
    }

    proptest! {
        #[test]
        fn modifier_is_floored_halving(score in 3i32..=18) {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            prop_assert_eq!(ability_modifier(score), expected);
        }
    }

    #[test]
    fn heal_caps_at_max() {
        let mut c = Character {
            hp: 5,
            ..Character::default()
        };
        assert_eq!(c.heal(5), 10);
        assert_eq!(c.heal(3), 10);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut c = Character::default();
        c.take_damage(7);
        assert_eq!(c.hp, 3);
        c.take_damage(100);
        assert_eq!(c.hp, 0);
    }

    #[test]
    fn inventory_allows_duplicates() {
        let mut c = Character::default();
        c.inventory.push("corda".to_string());
        c.inventory.push("corda".to_string());
        assert!(c.has_item("corda"));
        assert!(c.remove_item("corda"));
        assert!(c.has_item("corda"));
        assert!(c.remove_item("corda"));
        assert!(!c.has_item("corda"));
        assert!(!c.remove_item("corda"));
    }

    #[test]
    fn scores_lookup() {
        let scores = AbilityScores {
            wisdom: 14,
            ..Default::default()
        };
        assert_eq!(scores.score(Ability::Wisdom), 14);
        assert_eq!(scores.modifier(Ability::Wisdom), 2);
        assert_eq!(scores.modifier(Ability::Charisma), 0);
    }

    #[test]
    fn partial_record_uses_defaults() {
        let c: Character = serde_json::from_str(r#"{"name": "Rick", "wisdom": 12}"#).unwrap();
        assert_eq!(c.name, "Rick");
        assert_eq!(c.scores.wisdom, 12);
        assert_eq!(c.scores.strength, 10);
        assert_eq!(c.hp, MAX_HP);
        assert!(c.inventory.is_empty());
        assert!(!c.infected);
    }

    #[test]
    fn empty_record_is_default_survivor() {
        let c: Character = serde_json::from_str("{}").unwrap();
        assert_eq!(c.name, "Sopravvissuto");
        assert_eq!(c, Character::default());
    }
}

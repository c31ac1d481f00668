//! Random villain generation for `guarda` encounters.

use rand::Rng;

use vg_core::{Relationship, Role};

/// Probability that `guarda` spawns a new adversarial character.
pub const ENCOUNTER_CHANCE: f64 = 0.3;

const FIRST_NAMES: &[&str] = &["Daryl", "Morgan", "Alpha", "Beta", "Marauder", "Raider"];
const SURNAMES: &[&str] = &["Smith", "Jones", "Brown"];
const PERSONALITIES: &[&str] = &[
    "spietato leader",
    "carismatico manipolatore",
    "spregiudicato opportunista",
];

/// A freshly generated adversary.
#[derive(Debug, Clone)]
pub struct Villain {
    /// Full name, first name plus surname.
    pub name: String,
    /// The relationship record to insert: trust 0, role villain,
    /// hostility uniform in [5, 10].
    pub relationship: Relationship,
}

impl Villain {
    /// The "incontro" event line for meeting this villain.
    pub fn encounter_line(&self) -> String {
        format!(
            "Hai incontrato {}, un {}.",
            self.name, self.relationship.personality
        )
    }
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Generate a villain from the fixed name and personality pools.
pub fn spawn_villain(rng: &mut impl Rng) -> Villain {
    let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, SURNAMES));
    let personality = pick(rng, PERSONALITIES);
    let hostility = rng.random_range(5..=10);
    Villain {
        name,
        relationship: Relationship::new(Role::Villain, personality, 0, hostility),
    }
}

//! Random ability-score generation for character creation.

use rand::Rng;

use vg_core::AbilityScores;

/// Creation range for each ability score, inclusive.
const SCORE_RANGE: std::ops::RangeInclusive<i32> = 8..=15;

/// Roll a full set of ability scores, each sampled independently and
/// uniformly from [8, 15]. Used once at character creation.
pub fn generate_ability_scores(rng: &mut impl Rng) -> AbilityScores {
    AbilityScores {
        strength: rng.random_range(SCORE_RANGE),
        dexterity: rng.random_range(SCORE_RANGE),
        constitution: rng.random_range(SCORE_RANGE),
        intelligence: rng.random_range(SCORE_RANGE),
        wisdom: rng.random_range(SCORE_RANGE),
        charisma: rng.random_range(SCORE_RANGE),
    }
}

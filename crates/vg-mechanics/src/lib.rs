//! Dice rolling and rule mechanics for Vagante.
//!
//! Everything here is either a pure function of its inputs or takes an
//! explicit RNG, so outcomes are reproducible from a seed and checks can be
//! tested with forced rolls.

/// Ability checks: die roll + modifier against a difficulty class.
pub mod check;
/// Single-die rolling.
pub mod dice;
/// Random ability-score generation for character creation.
pub mod scores;

/// Re-export check types.
pub use check::{AbilityCheck, PERCEPTION_DC, ability_check, roll_check};
/// Re-export dice helpers.
pub use dice::{roll_d20, roll_die};
/// Re-export score generation.
pub use scores::generate_ability_scores;

//! Ability checks: a die roll plus an ability modifier against a fixed
//! difficulty class.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::roll_d20;

/// Difficulty class for perception checks (used by `prendi`).
pub const PERCEPTION_DC: i32 = 10;

/// The outcome of one ability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCheck {
    /// The raw d20 roll.
    pub roll: u32,
    /// The ability modifier applied to the roll.
    pub modifier: i32,
    /// `roll + modifier`.
    pub total: i32,
    /// The difficulty class the total was compared against.
    pub dc: i32,
}

impl AbilityCheck {
    /// True if the check met or beat its difficulty class.
    pub fn passed(&self) -> bool {
        self.total >= self.dc
    }
}

impl fmt::Display for AbilityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}={}", self.roll, self.modifier, self.total)
    }
}

/// Resolve a check from an already-rolled die. Pure: the die roll is the
/// only randomness source, supplied by the caller.
pub fn ability_check(roll: u32, modifier: i32, dc: i32) -> AbilityCheck {
    AbilityCheck {
        roll,
        modifier,
        total: roll as i32 + modifier,
        dc,
    }
}

/// Roll a d20 and resolve the check in one step.
pub fn roll_check(rng: &mut impl Rng, modifier: i32, dc: i32) -> AbilityCheck {
    ability_check(roll_d20(rng), modifier, dc)
}

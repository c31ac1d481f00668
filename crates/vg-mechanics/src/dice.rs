//! Single-die rolling.

use rand::Rng;

/// Roll one die with the given number of sides, uniform in `[1, sides]`.
pub fn roll_die(rng: &mut impl Rng, sides: u32) -> u32 {
    rng.random_range(1..=sides)
}

/// Roll a twenty-sided die.
pub fn roll_d20(rng: &mut impl Rng) -> u32 {
    roll_die(rng, 20)
}

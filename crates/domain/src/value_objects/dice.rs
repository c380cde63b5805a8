//! Die rolls for character creation.
//!
//! Into the Odd needs exactly three kinds of roll: a single d6, a 3d6
//! ability score, and a d66 (two d6 read as tens and units digits).
//! All rolls draw on a caller-supplied [`Rng`] so tests can seed them.

use rand::Rng;

/// Roll a single six-sided die (1-6).
pub fn roll_d6<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6)
}

/// Roll an ability score: the sum of three independent d6 (3-18).
pub fn roll_ability<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    roll_d6(rng) + roll_d6(rng) + roll_d6(rng)
}

/// Roll a d66: first die is the tens digit, second the units digit.
///
/// Valid results are the 36 values from 11 to 66 whose digits are each
/// in 1-6 (12, 13, ... 65, 66 - never 17, 20, or 70).
pub fn roll_d66<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    roll_d6(rng) * 10 + roll_d6(rng)
}

//! Value objects - small immutable types with no identity.

pub mod dice;
pub mod gender;
pub mod mood;

pub use dice::{roll_ability, roll_d6, roll_d66};
pub use gender::{Gender, GenderChoice};
pub use mood::Mood;

//! Entities - records with identity and lifecycle.

pub mod character;
pub mod portrait;

pub use character::{Ability, AbilityScores, Arcanum, Character};
pub use portrait::{BatchStatus, GeneratedImage, PortraitBatch};

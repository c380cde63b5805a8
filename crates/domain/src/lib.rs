//! Limner domain - the rules of the portrait machine.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! drawing on an injected [`rand::Rng`]. The engine crate owns all I/O.

pub mod composer;
pub mod entities;
pub mod error;
pub mod generator;
pub mod ids;
pub mod tables;
pub mod value_objects;

pub use composer::compose;
pub use entities::{
    Ability, AbilityScores, Arcanum, BatchStatus, Character, GeneratedImage, PortraitBatch,
};
pub use error::DomainError;
pub use generator::{generate, resolve_name};
pub use ids::{BatchId, ImageId};
pub use value_objects::{Gender, GenderChoice, Mood};

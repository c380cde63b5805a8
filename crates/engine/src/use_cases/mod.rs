//! Use cases - application services orchestrating domain logic and ports.

pub mod portraits;

pub use portraits::{GeneratePortraits, PacingConfig, PortraitUseCases};

//! Infrastructure - clients and adapters behind the port traits.

pub mod artic;
pub mod clock;
pub mod gemini;
pub mod pollinations;
pub mod ports;

pub use artic::ArtInstituteClient;
pub use clock::SystemClock;
pub use gemini::GeminiClient;
pub use pollinations::{PollinationsClient, PollinationsModel};

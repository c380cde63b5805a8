//! Ports - trait boundaries between use cases and infrastructure.

mod error;
mod external;
mod testing;

pub use error::PortraitGenError;
pub use external::{PortraitArt, PortraitGenPort, PortraitRequest};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockPortraitGenPort;
#[cfg(test)]
pub use testing::MockClockPort;

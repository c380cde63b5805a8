//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::ports::{ClockPort, PortraitGenPort};
use crate::use_cases::{GeneratePortraits, PacingConfig, PortraitUseCases};

/// Main application state.
///
/// Wires the chosen portrait provider into the use cases.
pub struct App {
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub portraits: PortraitUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(provider: Arc<dyn PortraitGenPort>, provider_name: &str) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let generate = Arc::new(GeneratePortraits::new(
            provider,
            provider_name,
            clock.clone(),
            PacingConfig::for_provider(provider_name),
        ));

        Self {
            use_cases: UseCases {
                portraits: PortraitUseCases::new(generate),
            },
            clock,
        }
    }
}

//! Error types for port operations.

/// Classified failure from a portrait provider.
///
/// The domain core has no failure modes by construction; everything that
/// can go wrong lives here, classified so the batch use case can decide
/// per-mood whether to cool down, skip, or give up.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortraitGenError {
    /// Provider quota exhausted or 429 - worth a cool-down before the
    /// next plate.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Content-safety filter rejected the prompt.
    #[error("Safety filter blocked the vision: {0}")]
    SafetyBlocked(String),

    /// Model or artwork not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider returned something we could not parse.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The request timed out.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Provider is unreachable.
    #[error("Service unavailable")]
    Unavailable,

    /// Anything else.
    #[error("Generation failed: {0}")]
    Failed(String),
}

impl PortraitGenError {
    /// Whether the batch loop should pause longer before the next plate.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Map a reqwest error onto the classification.
impl From<reqwest::Error> for PortraitGenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Unavailable
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Failed(err.to_string())
        }
    }
}

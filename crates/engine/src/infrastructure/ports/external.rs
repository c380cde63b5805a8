//! External service port traits (portrait generation).

use async_trait::async_trait;

use super::error::PortraitGenError;

/// One plate to develop.
#[derive(Debug, Clone)]
pub struct PortraitRequest {
    /// The finished prompt, exactly as composed.
    pub prompt: String,
    /// Mood label, for providers that key their medium on it.
    pub mood: String,
    /// Short subject line ("Female Whaler"), for search-backed providers.
    pub subject: String,
    pub width: u32,
    pub height: u32,
}

impl PortraitRequest {
    pub fn new(
        prompt: impl Into<String>,
        mood: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            mood: mood.into(),
            subject: subject.into(),
            width: 768,
            height: 768,
        }
    }

}

/// A developed plate: a hosted URL or a data URI.
#[derive(Debug, Clone)]
pub struct PortraitArt {
    pub url: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortraitGenPort: Send + Sync {
    async fn generate(&self, request: PortraitRequest) -> Result<PortraitArt, PortraitGenError>;
    async fn check_health(&self) -> Result<bool, PortraitGenError>;
}

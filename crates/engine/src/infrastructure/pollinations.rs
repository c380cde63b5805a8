//! Pollinations.ai image generation client.
//!
//! Implements the PortraitGenPort trait. Pollinations serves images
//! straight off a URL that embeds the prompt, so "generation" here is
//! building the URL with a fresh seed and verifying it actually loads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::sleep;
use url::Url;

use crate::infrastructure::ports::{PortraitArt, PortraitGenError, PortraitGenPort, PortraitRequest};

/// Suffix appended to every prompt before dispatch.
const QUALITY_SUFFIX: &str = ", masterpiece, best quality, detailed, 8k, artstation";

/// URL length safety - prompts beyond this are truncated to avoid 400/414.
const MAX_PROMPT_LENGTH: usize = 800;

const ATTEMPTS: u32 = 3;
const RETRY_PAUSE: Duration = Duration::from_millis(1500);

/// Which Pollinations model to route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollinationsModel {
    Flux,
    Turbo,
}

impl PollinationsModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollinationsModel::Flux => "flux",
            PollinationsModel::Turbo => "turbo",
        }
    }
}

/// Client for the Pollinations image API.
#[derive(Clone)]
pub struct PollinationsClient {
    client: Client,
    base_url: String,
    model: PollinationsModel,
}

impl PollinationsClient {
    pub fn new(base_url: &str, model: PollinationsModel) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Build the seeded generation URL for a request.
    fn build_url(&self, request: &PortraitRequest) -> Result<Url, PortraitGenError> {
        let prompt = format!("{}{}", clamp_prompt(&request.prompt), QUALITY_SUFFIX);
        let seed = rand::random::<u32>() % 1_000_000;

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PortraitGenError::Failed(format!("bad base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| PortraitGenError::Failed("base url cannot be a base".into()))?
            .push("p")
            .push(&prompt);
        url.query_pairs_mut()
            .append_pair("width", &request.width.to_string())
            .append_pair("height", &request.height.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("model", self.model.as_str())
            .append_pair("nologo", "true");
        Ok(url)
    }
}

#[async_trait]
impl PortraitGenPort for PollinationsClient {
    async fn generate(&self, request: PortraitRequest) -> Result<PortraitArt, PortraitGenError> {
        let url = self.build_url(&request)?;

        let mut last_error = PortraitGenError::Failed("no attempts made".into());
        for attempt in 1..=ATTEMPTS {
            match self.client.get(url.clone()).send().await {
                Ok(response) if response.status().is_success() => {
                    return Ok(PortraitArt {
                        url: url.to_string(),
                    });
                }
                Ok(response) if response.status().as_u16() == 429 => {
                    // Not worth retrying locally; let the batch loop cool down.
                    return Err(PortraitGenError::RateLimited(format!(
                        "pollinations ({})",
                        self.model.as_str()
                    )));
                }
                Ok(response) => {
                    last_error =
                        PortraitGenError::Failed(format!("status {}", response.status()));
                }
                Err(e) => {
                    last_error = e.into();
                }
            }

            tracing::warn!(
                attempt,
                model = self.model.as_str(),
                error = %last_error,
                "Pollinations plate failed to load"
            );
            if attempt < ATTEMPTS {
                sleep(RETRY_PAUSE).await;
            }
        }

        Err(last_error)
    }

    async fn check_health(&self) -> Result<bool, PortraitGenError> {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|_| PortraitGenError::Unavailable)?;

        Ok(response.status().is_success())
    }
}

/// Truncate a prompt to the URL-safe length on a char boundary.
fn clamp_prompt(prompt: &str) -> &str {
    if prompt.len() <= MAX_PROMPT_LENGTH {
        return prompt;
    }
    let mut end = MAX_PROMPT_LENGTH;
    while !prompt.is_char_boundary(end) {
        end -= 1;
    }
    &prompt[..end]
}

//! Google Imagen (Gemini API) portrait client.
//!
//! Implements the PortraitGenPort trait against the REST `:predict`
//! endpoint. Fast and high quality, but subject to quotas and safety
//! filters - both are mapped onto the error classification so the batch
//! loop can react per plate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{PortraitArt, PortraitGenError, PortraitGenPort, PortraitRequest};

const QUALITY_SUFFIX: &str =
    ", masterpiece, best quality, detailed, 8k, artstation, into the odd style";

/// Client for the Gemini image generation API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub const DEFAULT_MODEL: &'static str = "imagen-4.0-generate-001";

    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn classify_failure(status: u16, body: &str) -> PortraitGenError {
        if status == 429 || body.contains("RESOURCE_EXHAUSTED") {
            return PortraitGenError::RateLimited(
                "the mind's eye is exhausted (quota exceeded)".into(),
            );
        }
        if status == 404 || body.contains("NOT_FOUND") {
            return PortraitGenError::NotFound(
                "the vision engine is unavailable (model not found)".into(),
            );
        }
        if body.to_lowercase().contains("safety") {
            return PortraitGenError::SafetyBlocked(
                "the vision was too disturbing (safety filter triggered)".into(),
            );
        }
        PortraitGenError::Failed(format!("status {status}: {body}"))
    }
}

#[async_trait]
impl PortraitGenPort for GeminiClient {
    async fn generate(&self, request: PortraitRequest) -> Result<PortraitArt, PortraitGenError> {
        let body = PredictRequest {
            instances: vec![Instance {
                prompt: format!("{}{}", request.prompt, QUALITY_SUFFIX),
            }],
            parameters: Parameters {
                sample_count: 1,
                aspect_ratio: "1:1".into(),
                output_mime_type: "image/jpeg".into(),
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:predict",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::classify_failure(status.as_u16(), &error_text));
        }

        let predict: PredictResponse = response
            .json()
            .await
            .map_err(|e| PortraitGenError::Malformed(e.to_string()))?;

        let image = predict
            .predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .ok_or_else(|| PortraitGenError::Malformed("Gemini returned no image data".into()))?;

        Ok(PortraitArt {
            url: format!("data:image/jpeg;base64,{image}"),
        })
    }

    async fn check_health(&self) -> Result<bool, PortraitGenError> {
        let response = self
            .client
            .get(format!("{}/v1beta/models", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|_| PortraitGenError::Unavailable)?;

        Ok(response.status().is_success())
    }
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u8,
    aspect_ratio: String,
    output_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

//! Portrait batch entity - one run of plate generation for a character.
//!
//! Batches are snapshots: a reroll or regenerate produces a wholly new
//! batch, never an edit of a previous one. Images are append-only within
//! a batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BatchId, ImageId};
use crate::value_objects::Mood;

/// Status of a portrait batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum BatchStatus {
    Queued,
    Generating { completed: u8 },
    Complete,
    Failed { error: String },
}

/// One developed plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: ImageId,
    /// URL or data URI returned by the provider.
    pub url: String,
    /// The exact prompt that was dispatched.
    pub prompt: String,
    /// Mood label the plate was developed in.
    pub mood: String,
    pub character_name: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedImage {
    pub fn new(
        url: impl Into<String>,
        prompt: impl Into<String>,
        mood: Mood,
        character_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ImageId::new(),
            url: url.into(),
            prompt: prompt.into(),
            mood: mood.label().to_string(),
            character_name: character_name.into(),
            created_at: now,
        }
    }
}

/// A batch of plates generated together for one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitBatch {
    pub id: BatchId,
    pub character_name: String,
    /// Provider label this batch was dispatched to.
    pub provider: String,
    /// Moods requested, in dispatch order.
    pub moods: Vec<Mood>,
    /// Plates that have landed so far. Append-only.
    pub images: Vec<GeneratedImage>,
    pub status: BatchStatus,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PortraitBatch {
    pub fn new(
        character_name: impl Into<String>,
        provider: impl Into<String>,
        moods: Vec<Mood>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: BatchId::new(),
            character_name: character_name.into(),
            provider: provider.into(),
            moods,
            images: Vec::new(),
            status: BatchStatus::Queued,
            requested_at: now,
            completed_at: None,
        }
    }

    /// Start developing this batch.
    pub fn start_generating(&mut self) {
        self.status = BatchStatus::Generating { completed: 0 };
    }

    /// Append a finished plate and advance progress.
    pub fn push_image(&mut self, image: GeneratedImage) {
        self.images.push(image);
        self.status = BatchStatus::Generating {
            completed: self.images.len().min(u8::MAX as usize) as u8,
        };
    }

    /// Mark the batch complete.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = BatchStatus::Complete;
        self.completed_at = Some(now);
    }

    /// Mark the batch failed.
    pub fn fail(&mut self, error: impl Into<String>, now: DateTime<Utc>) {
        self.status = BatchStatus::Failed {
            error: error.into(),
        };
        self.completed_at = Some(now);
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            BatchStatus::Complete | BatchStatus::Failed { .. }
        )
    }
}

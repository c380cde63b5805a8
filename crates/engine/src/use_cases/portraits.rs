//! Portrait batch use case - develops one plate per mood for a character.
//!
//! Moods are processed sequentially with inter-call delays so external
//! rate limits are respected, and a single failed plate never aborts the
//! batch: it is logged and skipped, and the batch fails only when every
//! plate failed.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use limner_domain::{compose, Character, GeneratedImage, Mood, PortraitBatch};

use crate::infrastructure::ports::{ClockPort, PortraitGenPort, PortraitRequest};

/// Delays between plates, tuned per provider.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// Pause before every plate after the first.
    pub inter_plate_delay: Duration,
    /// Extra pause after a rate-limited failure.
    pub rate_limit_cooldown: Duration,
}

impl PacingConfig {
    /// Pacing for a named provider. Gemini needs stricter delays; turbo
    /// skips them entirely to maximize speed.
    pub fn for_provider(provider: &str) -> Self {
        let inter_plate_delay = match provider {
            "gemini" => Duration::from_millis(2000),
            "turbo" => Duration::ZERO,
            _ => Duration::from_millis(1000),
        };
        Self {
            inter_plate_delay,
            rate_limit_cooldown: Duration::from_millis(4000),
        }
    }

    /// No delays at all - for tests.
    pub fn immediate() -> Self {
        Self {
            inter_plate_delay: Duration::ZERO,
            rate_limit_cooldown: Duration::ZERO,
        }
    }
}

/// Container for portrait use cases.
pub struct PortraitUseCases {
    pub generate: Arc<GeneratePortraits>,
}

impl PortraitUseCases {
    pub fn new(generate: Arc<GeneratePortraits>) -> Self {
        Self { generate }
    }
}

/// Develops a batch of portrait plates for one character.
pub struct GeneratePortraits {
    provider: Arc<dyn PortraitGenPort>,
    provider_name: String,
    clock: Arc<dyn ClockPort>,
    pacing: PacingConfig,
}

impl GeneratePortraits {
    pub fn new(
        provider: Arc<dyn PortraitGenPort>,
        provider_name: impl Into<String>,
        clock: Arc<dyn ClockPort>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            provider,
            provider_name: provider_name.into(),
            clock,
            pacing,
        }
    }

    /// Develop one plate per mood. Returns a fresh batch snapshot; the
    /// caller replaces any previous batch wholesale.
    pub async fn execute(&self, character: &Character, moods: &[Mood]) -> PortraitBatch {
        let mut batch = PortraitBatch::new(
            character.name.clone(),
            self.provider_name.clone(),
            moods.to_vec(),
            self.clock.now(),
        );
        batch.start_generating();

        tracing::info!(
            character = %character.name,
            provider = %self.provider_name,
            plates = moods.len(),
            "Initializing visualisation protocols"
        );

        for (index, &mood) in moods.iter().enumerate() {
            if index > 0 && !self.pacing.inter_plate_delay.is_zero() {
                sleep(self.pacing.inter_plate_delay).await;
            }

            let prompt = compose(character, mood, &mut rand::thread_rng());
            let subject = format!("{} {}", character.gender, character.occupation);
            let request = PortraitRequest::new(prompt.clone(), mood.label(), subject);

            tracing::debug!(
                plate = index + 1,
                total = moods.len(),
                mood = mood.label(),
                "Developing plate"
            );

            match self.provider.generate(request).await {
                Ok(art) => {
                    tracing::info!(mood = mood.label(), url = %art.url, "Plate developed");
                    batch.push_image(GeneratedImage::new(
                        art.url,
                        prompt,
                        mood,
                        character.name.clone(),
                        self.clock.now(),
                    ));
                }
                Err(error) => {
                    tracing::warn!(
                        mood = mood.label(),
                        %error,
                        "Plate failed, continuing with next mood"
                    );
                    if error.is_rate_limited() && !self.pacing.rate_limit_cooldown.is_zero() {
                        sleep(self.pacing.rate_limit_cooldown).await;
                    }
                }
            }
        }

        let now = self.clock.now();
        if batch.images.is_empty() {
            batch.fail(
                format!(
                    "All portrait attempts failed via {}. Try switching providers.",
                    self.provider_name
                ),
                now,
            );
        } else {
            batch.complete(now);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockClockPort, MockPortraitGenPort, PortraitArt, PortraitGenError,
    };
    use chrono::{TimeZone, Utc};
    use limner_domain::{generate, BatchStatus, GenderChoice};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_character() -> Character {
        let mut rng = StdRng::seed_from_u64(99);
        generate(GenderChoice::Female, &mut rng)
    }

    fn test_clock() -> MockClockPort {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid time");
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || now);
        clock
    }

    #[tokio::test]
    async fn every_plate_succeeding_completes_the_batch() {
        let mut provider = MockPortraitGenPort::new();
        provider.expect_generate().times(4).returning(|request| {
            Ok(PortraitArt {
                url: format!("https://img/{}.jpg", request.mood),
            })
        });

        let use_case = GeneratePortraits::new(
            Arc::new(provider),
            "flux",
            Arc::new(test_clock()),
            PacingConfig::immediate(),
        );

        let character = test_character();
        let batch = use_case.execute(&character, &Mood::STANDARD).await;

        assert_eq!(batch.status, BatchStatus::Complete);
        assert_eq!(batch.images.len(), 4);
        assert_eq!(batch.character_name, character.name);
        // Plates land in mood order
        let labels: Vec<&str> = batch.images.iter().map(|i| i.mood.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Grim Engraving",
                "Desaturated Oil",
                "Ethereal Watercolor",
                "Vintage Daguerreotype"
            ]
        );
    }

    #[tokio::test]
    async fn a_single_failed_plate_is_skipped_not_fatal() {
        let mut provider = MockPortraitGenPort::new();
        let mut call = 0u32;
        provider.expect_generate().times(4).returning(move |_| {
            call += 1;
            if call == 2 {
                Err(PortraitGenError::SafetyBlocked("too disturbing".into()))
            } else {
                Ok(PortraitArt {
                    url: "https://img/ok.jpg".into(),
                })
            }
        });

        let use_case = GeneratePortraits::new(
            Arc::new(provider),
            "gemini",
            Arc::new(test_clock()),
            PacingConfig::immediate(),
        );

        let batch = use_case.execute(&test_character(), &Mood::STANDARD).await;

        assert_eq!(batch.status, BatchStatus::Complete);
        assert_eq!(batch.images.len(), 3);
    }

    #[tokio::test]
    async fn all_plates_failing_fails_the_batch() {
        let mut provider = MockPortraitGenPort::new();
        provider
            .expect_generate()
            .times(4)
            .returning(|_| Err(PortraitGenError::Unavailable));

        let use_case = GeneratePortraits::new(
            Arc::new(provider),
            "flux",
            Arc::new(test_clock()),
            PacingConfig::immediate(),
        );

        let batch = use_case.execute(&test_character(), &Mood::STANDARD).await;

        assert!(matches!(batch.status, BatchStatus::Failed { .. }));
        assert!(batch.images.is_empty());
        assert!(batch.completed_at.is_some());
    }

    #[tokio::test]
    async fn rate_limited_plates_are_skipped_and_the_rest_continue() {
        let mut provider = MockPortraitGenPort::new();
        let mut call = 0u32;
        provider.expect_generate().times(4).returning(move |_| {
            call += 1;
            if call == 1 {
                Err(PortraitGenError::RateLimited("quota".into()))
            } else {
                Ok(PortraitArt {
                    url: "https://img/ok.jpg".into(),
                })
            }
        });

        let use_case = GeneratePortraits::new(
            Arc::new(provider),
            "gemini",
            Arc::new(test_clock()),
            PacingConfig::immediate(),
        );

        let batch = use_case.execute(&test_character(), &Mood::STANDARD).await;

        assert_eq!(batch.status, BatchStatus::Complete);
        assert_eq!(batch.images.len(), 3);
    }

    #[tokio::test]
    async fn each_plate_gets_its_own_composed_prompt() {
        let mut provider = MockPortraitGenPort::new();
        provider.expect_generate().times(2).returning(|request| {
            assert!(request.prompt.contains("Close-up head-and-shoulders portrait"));
            assert!(!request.prompt.is_empty());
            Ok(PortraitArt {
                url: "https://img/ok.jpg".into(),
            })
        });

        let use_case = GeneratePortraits::new(
            Arc::new(provider),
            "turbo",
            Arc::new(test_clock()),
            PacingConfig::immediate(),
        );

        let moods = [Mood::GrimEngraving, Mood::Unknown];
        let batch = use_case.execute(&test_character(), &moods).await;

        assert_eq!(batch.images.len(), 2);
        assert!(batch.images[0].prompt.contains("(Style: Grim Engraving)"));
        assert!(batch.images[1].prompt.contains("(Style: Mixed Media)"));
    }

    #[test]
    fn pacing_is_tuned_per_provider() {
        assert_eq!(
            PacingConfig::for_provider("gemini").inter_plate_delay,
            Duration::from_millis(2000)
        );
        assert_eq!(
            PacingConfig::for_provider("turbo").inter_plate_delay,
            Duration::ZERO
        );
        assert_eq!(
            PacingConfig::for_provider("flux").inter_plate_delay,
            Duration::from_millis(1000)
        );
    }
}

//! Gender selection for character creation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A character's resolved gender. Fixed on the record once rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase form used in prose ("a male Whaler").
    pub fn as_prose(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// What the caller asked for. `Random` resolves to a concrete [`Gender`]
/// with a fair coin flip at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderChoice {
    Male,
    Female,
    Random,
}

impl GenderChoice {
    /// Resolve the request to a concrete gender.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Gender {
        match self {
            GenderChoice::Male => Gender::Male,
            GenderChoice::Female => Gender::Female,
            GenderChoice::Random => {
                if rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                }
            }
        }
    }
}

impl std::str::FromStr for GenderChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(GenderChoice::Male),
            "female" | "f" => Ok(GenderChoice::Female),
            "random" | "any" => Ok(GenderChoice::Random),
            other => Err(DomainError::parse(format!(
                "Unknown gender choice: '{other}' (expected male, female or random)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn explicit_choices_resolve_to_themselves() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(GenderChoice::Male.resolve(&mut rng), Gender::Male);
        assert_eq!(GenderChoice::Female.resolve(&mut rng), Gender::Female);
    }

    #[test]
    fn random_resolves_to_both_over_many_trials() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut males = 0u32;
        let trials = 10_000;
        for _ in 0..trials {
            if GenderChoice::Random.resolve(&mut rng) == Gender::Male {
                males += 1;
            }
        }
        // Fair coin: expect roughly half, allow a wide band
        assert!((4000..=6000).contains(&males), "males = {males}");
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("Male".parse::<GenderChoice>(), Ok(GenderChoice::Male));
        assert_eq!("  f ".parse::<GenderChoice>(), Ok(GenderChoice::Female));
        assert_eq!("RANDOM".parse::<GenderChoice>(), Ok(GenderChoice::Random));
        assert!("sprocket".parse::<GenderChoice>().is_err());
    }
}

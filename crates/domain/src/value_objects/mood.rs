//! Artistic moods - the rendering styles a portrait can be developed in.

use serde::{Deserialize, Serialize};

/// A named artistic rendering style applied uniformly to one portrait
/// variant. Unrecognized labels deserialize to [`Mood::Unknown`], which
/// composes with a generic mixed-media style block instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// High-contrast black ink engraving / woodcut.
    GrimEngraving,
    /// Desaturated 19th-century realist oil painting.
    DesaturatedOil,
    /// Pale, ghostly watercolor and ink wash.
    EtherealWatercolor,
    /// Grainy 1850s photographic plate.
    VintageDaguerreotype,

    /// Forward-compatibility fallback for unrecognized moods.
    #[serde(other)]
    Unknown,
}

impl Mood {
    /// The four standard plates, in development order.
    pub const STANDARD: [Mood; 4] = [
        Mood::GrimEngraving,
        Mood::DesaturatedOil,
        Mood::EtherealWatercolor,
        Mood::VintageDaguerreotype,
    ];

    /// Display label, as shown on the plate and embedded in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::GrimEngraving => "Grim Engraving",
            Mood::DesaturatedOil => "Desaturated Oil",
            Mood::EtherealWatercolor => "Ethereal Watercolor",
            Mood::VintageDaguerreotype => "Vintage Daguerreotype",
            Mood::Unknown => "Mixed Media",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Mood {
    // Never fails: unrecognized moods become Mood::Unknown.
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "grimengraving" | "engraving" => Mood::GrimEngraving,
            "desaturatedoil" | "oil" => Mood::DesaturatedOil,
            "etherealwatercolor" | "watercolor" => Mood::EtherealWatercolor,
            "vintagedaguerreotype" | "daguerreotype" => Mood::VintageDaguerreotype,
            _ => Mood::Unknown,
        })
    }
}

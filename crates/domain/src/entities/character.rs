//! Character entity - one rolled Into the Odd character.
//!
//! A character is created whole by the generator and never mutated
//! field-by-field; a reroll replaces the entire record.

use serde::{Deserialize, Serialize};

use crate::value_objects::Gender;

/// The three abilities, each the sum of three d6 (3-18). Immutable once
/// rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub willpower: u8,
}

/// Which ability to talk about. Tie-breaks everywhere use the fixed
/// STR > DEX > WIL precedence rather than the roll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Willpower,
}

impl AbilityScores {
    /// The highest rolled value.
    pub fn highest(&self) -> u8 {
        self.strength.max(self.dexterity).max(self.willpower)
    }

    /// The dominant ability, STR > DEX > WIL precedence on ties.
    pub fn dominant(&self) -> Ability {
        let highest = self.highest();
        if self.strength == highest {
            Ability::Strength
        } else if self.dexterity == highest {
            Ability::Dexterity
        } else {
            Ability::Willpower
        }
    }
}

/// A magical item resolved from the d66 arcana table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arcanum {
    pub name: String,
    pub description: String,
}

impl Arcanum {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A fully rolled character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Composed forename + surname.
    pub name: String,
    /// Resolved at creation; a "Random" request is settled before the
    /// record exists.
    pub gender: Gender,
    pub occupation: String,
    /// Flavor text tied to the occupation, drawn from the same row.
    pub capability: String,
    pub abilities: AbilityScores,
    /// Single d6 roll, independent of abilities.
    pub hp: u8,
    /// Single d6 roll, in shillings.
    pub wealth: u8,
    /// Ordered; the first two items are primary and feed the prompt.
    pub equipment: Vec<String>,
    /// Present iff the starter package contained the Arcanum placeholder.
    pub arcanum: Option<Arcanum>,
    /// A distinguishing physical feature found in the equipment text.
    /// Always one of the fixed vocabulary terms.
    pub oddity: Option<String>,
    /// Derived one-line summary; informational only.
    pub description: String,
}

impl Character {
    /// The first two equipment entries - the visually significant ones.
    pub fn primary_equipment(&self) -> &[String] {
        let n = self.equipment.len().min(2);
        &self.equipment[..n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(strength: u8, dexterity: u8, willpower: u8) -> AbilityScores {
        AbilityScores {
            strength,
            dexterity,
            willpower,
        }
    }

    #[test]
    fn highest_picks_the_maximum() {
        assert_eq!(scores(10, 14, 12).highest(), 14);
        assert_eq!(scores(18, 3, 3).highest(), 18);
    }

    #[test]
    fn dominant_follows_str_dex_wil_precedence_on_ties() {
        assert_eq!(scores(12, 12, 12).dominant(), Ability::Strength);
        assert_eq!(scores(9, 12, 12).dominant(), Ability::Dexterity);
        assert_eq!(scores(9, 10, 12).dominant(), Ability::Willpower);
    }

    #[test]
    fn primary_equipment_is_at_most_two_items() {
        let character = Character {
            name: "Peta Fox".into(),
            gender: Gender::Female,
            occupation: "Whaler".into(),
            capability: "Unreliable Genius".into(),
            abilities: scores(10, 11, 12),
            hp: 4,
            wealth: 2,
            equipment: vec!["Sword (d6)".into(), "Shield".into(), "Illiterate".into()],
            arcanum: None,
            oddity: None,
            description: String::new(),
        };
        assert_eq!(character.primary_equipment(), &["Sword (d6)", "Shield"]);
    }
}

//! Prompt composer - turns a character and a mood into an image prompt.
//!
//! Composition is a pure function of (character, mood) plus one random
//! phrase pick, and never mutates the character. Game-mechanical noise
//! (damage dice, parenthetical annotations) is stripped from equipment
//! before it reaches the prompt - the generator wants visuals, not rules.

use rand::Rng;

use crate::entities::{Ability, Character};
use crate::value_objects::Mood;

/// Physical-description pools, one per dominant ability. Several
/// interchangeable phrasings keep repeated plates from looking cloned.
const STR_PHRASES: &[&str] = &[
    "Burly physique, strong jaw, thick neck, scarred knuckles",
    "Broad-shouldered, imposing presence, weathered skin, heavy brow",
    "Muscular build, resolute expression, veins prominent, sturdy",
    "Stocky, battered features, aura of toughness, physical fortitude",
];

const DEX_PHRASES: &[&str] = &[
    "Lean and lithe, restless eyes, wiry frame, long fingers",
    "Slender, graceful posture, nimble, alert and twitchy",
    "Athletic build, quick movements, sharp bird-like features",
    "Sinuous, poised, cat-like eyes, coiled energy",
];

const WIL_PHRASES: &[&str] = &[
    "Intense gaze, commanding presence, stern expression, disciplined",
    "Charismatic smirk, focused eyes, air of authority, confident",
    "Upright posture, piercing stare, unnervingly calm",
    "Magnetic personality visible in eyes, stoic, calculating",
];

/// Compose the full prompt for one plate.
pub fn compose<R: Rng + ?Sized>(character: &Character, mood: Mood, rng: &mut R) -> String {
    let physical = physical_phrase(character.abilities.dominant(), rng);
    let style = style_block(mood);

    let distinction = match &character.oddity {
        Some(oddity) => format!(" Distinction: {oddity}."),
        None => String::new(),
    };

    let equipment = character
        .primary_equipment()
        .iter()
        .map(|item| strip_mechanics(item))
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "(Style: {label}) {style} Subject: Close-up head-and-shoulders portrait of a \
         {gender} {occupation}. Appearance: {physical}.{distinction} Equipment: {equipment}.",
        label = mood.label(),
        gender = character.gender,
        occupation = character.occupation,
    )
}

/// Medium/style/palette instruction block for a mood. Exhaustive;
/// unrecognized moods get the generic mixed-media block.
fn style_block(mood: Mood) -> &'static str {
    match mood {
        Mood::GrimEngraving => {
            "Medium: Copperplate Engraving or Woodcut. Style: High contrast black ink on \
             textured paper. Cross-hatching, thick lines, stark shadows. No color. Rough \
             and gritty."
        }
        Mood::DesaturatedOil => {
            "Medium: Oil Painting on Canvas. Style: 19th century realism, visible \
             brushstrokes. Palette: Muted, desaturated earth tones (rust, slate, olive, \
             ochre, beige). Low saturation but definitely containing color. Chiaroscuro \
             lighting."
        }
        Mood::EtherealWatercolor => {
            "Medium: Watercolor and Ink Wash. Style: Bleeding edges, wet-on-wet technique. \
             Palette: Pale, ghostly greys, blues, and whites. Atmosphere: Misty, \
             dreamlike, soft focus, translucent."
        }
        Mood::VintageDaguerreotype => {
            "Medium: Early 1850s Photography (Daguerreotype). Style: Heavy film grain, \
             silver nitrate tarnish, scratches, vignette. Palette: Monochromatic sepia or \
             black and white. Hauntingly realistic, slight motion blur."
        }
        Mood::Unknown => "Medium: Mixed Media. Style: Industrial grit, textured.",
    }
}

fn physical_phrase<R: Rng + ?Sized>(dominant: Ability, rng: &mut R) -> &'static str {
    let pool = match dominant {
        Ability::Strength => STR_PHRASES,
        Ability::Dexterity => DEX_PHRASES,
        Ability::Willpower => WIL_PHRASES,
    };
    pool[rng.gen_range(0..pool.len())]
}

/// Strip game-mechanical annotations from an equipment name.
///
/// Removes parenthetical segments ("Musket (d8 B)" -> "Musket") and any
/// leftover bare damage-die tokens ("d6", "d8" with a trailing "B").
/// Parsed by hand - the domain layer stays regex-free.
fn strip_mechanics(item: &str) -> String {
    let mut without_parens = String::with_capacity(item.len());
    let mut depth = 0usize;
    for c in item.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => without_parens.push(c),
            _ => {}
        }
    }

    let words: Vec<&str> = without_parens
        .split_whitespace()
        .filter(|word| !is_damage_token(word))
        .collect();
    words.join(" ")
}

/// A bare damage-die token: "d6", "d8", "d10"... or the lone "B" burst
/// marker that trails one.
fn is_damage_token(word: &str) -> bool {
    if word == "B" {
        return true;
    }
    let mut chars = word.chars();
    matches!(chars.next(), Some('d')) && chars.as_str().chars().all(|c| c.is_ascii_digit())
        && word.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AbilityScores;
    use crate::value_objects::Gender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_character() -> Character {
        Character {
            name: "Breen Fox".into(),
            gender: Gender::Female,
            occupation: "Whaler".into(),
            capability: "Unreliable Genius".into(),
            abilities: AbilityScores {
                strength: 14,
                dexterity: 9,
                willpower: 11,
            },
            hp: 3,
            wealth: 5,
            equipment: vec![
                "Musket (d8 B)".into(),
                "Hatchet (d6)".into(),
                "Flashbang".into(),
            ],
            arcanum: None,
            oddity: Some("Lost Eye".into()),
            description: "A female Whaler (Unreliable Genius). Wields Musket (d8 B), Hatchet (d6)."
                .into(),
        }
    }

    #[test]
    fn prompt_assembles_in_fixed_order() {
        let character = sample_character();
        let mut rng = StdRng::seed_from_u64(21);
        let prompt = compose(&character, Mood::GrimEngraving, &mut rng);

        let style_at = prompt.find("(Style: Grim Engraving)").expect("style header");
        let subject_at = prompt.find("Subject: Close-up head-and-shoulders portrait of a Female Whaler.")
            .expect("framing clause");
        let appearance_at = prompt.find("Appearance: ").expect("appearance clause");
        let distinction_at = prompt.find("Distinction: Lost Eye.").expect("distinction clause");
        let equipment_at = prompt.find("Equipment: Musket, Hatchet.").expect("equipment clause");

        assert!(style_at < subject_at);
        assert!(subject_at < appearance_at);
        assert!(appearance_at < distinction_at);
        assert!(distinction_at < equipment_at);
    }

    #[test]
    fn prompt_never_leaks_damage_tokens() {
        let character = sample_character();
        let mut rng = StdRng::seed_from_u64(22);
        for mood in Mood::STANDARD {
            let prompt = compose(&character, mood, &mut rng);
            assert!(!prompt.contains("(d"), "paren remnant in: {prompt}");
            assert!(!prompt.contains("d8 B"), "damage token in: {prompt}");
            assert!(!prompt.contains("d6"), "damage token in: {prompt}");
        }
    }

    #[test]
    fn unknown_mood_uses_the_fallback_style_block() {
        let character = sample_character();
        let mut rng = StdRng::seed_from_u64(23);
        let prompt = compose(&character, Mood::Unknown, &mut rng);
        assert!(!prompt.is_empty());
        assert!(prompt.contains("Medium: Mixed Media."));
        assert!(prompt.contains("(Style: Mixed Media)"));
    }

    #[test]
    fn composing_twice_leaves_the_character_untouched() {
        let character = sample_character();
        let before = character.clone();
        let mut rng = StdRng::seed_from_u64(24);
        let _ = compose(&character, Mood::DesaturatedOil, &mut rng);
        let _ = compose(&character, Mood::DesaturatedOil, &mut rng);
        assert_eq!(character, before);
    }

    #[test]
    fn dominant_ability_picks_from_the_matching_pool() {
        let mut character = sample_character();
        let mut rng = StdRng::seed_from_u64(25);

        // STR-dominant
        let prompt = compose(&character, Mood::GrimEngraving, &mut rng);
        assert!(STR_PHRASES.iter().any(|phrase| prompt.contains(phrase)));

        character.abilities = AbilityScores {
            strength: 8,
            dexterity: 16,
            willpower: 10,
        };
        let prompt = compose(&character, Mood::GrimEngraving, &mut rng);
        assert!(DEX_PHRASES.iter().any(|phrase| prompt.contains(phrase)));

        character.abilities = AbilityScores {
            strength: 8,
            dexterity: 9,
            willpower: 17,
        };
        let prompt = compose(&character, Mood::GrimEngraving, &mut rng);
        assert!(WIL_PHRASES.iter().any(|phrase| prompt.contains(phrase)));
    }

    #[test]
    fn missing_oddity_omits_the_distinction_clause() {
        let mut character = sample_character();
        character.oddity = None;
        let mut rng = StdRng::seed_from_u64(26);
        let prompt = compose(&character, Mood::EtherealWatercolor, &mut rng);
        assert!(!prompt.contains("Distinction:"));
    }

    #[test]
    fn strip_mechanics_removes_parens_and_bare_dice() {
        assert_eq!(strip_mechanics("Musket (d8 B)"), "Musket");
        assert_eq!(strip_mechanics("Sword & Dagger (d8 B)"), "Sword & Dagger");
        assert_eq!(strip_mechanics("Throwing Knives d6"), "Throwing Knives");
        assert_eq!(strip_mechanics("Rifle d8 B"), "Rifle");
        assert_eq!(strip_mechanics("Debt (3G)"), "Debt");
        // Words that merely start with 'd' survive
        assert_eq!(strip_mechanics("Drum"), "Drum");
        assert_eq!(strip_mechanics("dagger"), "dagger");
    }
}

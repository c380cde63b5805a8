//! The fixed rulebook tables, transcribed from Into the Odd.
//!
//! Immutable tables baked into the binary at compile time: name pairs,
//! surnames, occupations, the d66 arcana table, and the starter package
//! matrix. All lookups are pure functions of their keys.

/// An occupation and the flavor text tied to it. The pair is always
/// drawn together - capability is never chosen independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupation {
    pub name: &'static str,
    pub capability: &'static str,
}

/// Name pairs, encoded as `"Male/FemaleSuffixOrReplacement"`.
///
/// If the part after the slash starts lowercase it is appended to the
/// male name ("Augost/a" -> "Augosta"); if uppercase it replaces it
/// ("Brin/Breen" -> "Breen"). Entries without a slash ("Quinn") are
/// gender-invariant.
pub const NAME_PAIRS: &[&str] = &[
    "Augost/a",
    "Benedict/a",
    "Brin/Breen",
    "Chumwan/Chumwel",
    "Calahed/Calit",
    "Dorren/Dorret",
    "Emmett/Emma",
    "Felix/Felora",
    "Fred/Freda",
    "Grobin/a",
    "Gizard/Giza",
    "Helroff/Helriel",
    "Istan/Isti",
    "Ilmer/Ilda",
    "Junas/Julia",
    "Katsun/Katsin",
    "Lurpax/Lunda",
    "Litton/a",
    "Munfud/Munfi",
    "Narmun/Nadya",
    "Orren/a",
    "Podder/Poddin",
    "Peta",
    "Picklow/Pickelle",
    "Pipp/ita",
    "Quinn",
    "Rosher/Roshel",
    "Stellan/Stella",
    "Samford/Sambay",
    "Tucker/Tuckis",
    "Teevan/Teeva",
    "Urntin/Urna",
    "Varran/Varin",
    "Vanis/sa",
    "Volta/Voltel",
    "Weckster/Weckin",
    "Yurnak/Yurna",
    "Zarm/Zarrack",
];

/// Surnames, independent of gender.
pub const SURNAMES: &[&str] = &[
    "Allane",
    "Bargroll",
    "Brunfield",
    "Chop",
    "Creed",
    "Dunbell",
    "Eggler",
    "Fox",
    "Farsee",
    "Gill",
    "Gullwin",
    "Huckle",
    "Horrican",
    "Ingle",
    "Jongler",
    "Kross",
    "Lix",
    "Lowbile",
    "Montane",
    "Nutbush",
    "Olifant",
    "Offenpot",
    "Ouze",
    "Phile",
    "Parfait",
    "Quigley",
    "Regal",
    "Stagger",
    "Shark",
    "Tumble",
    "Terrine",
    "Underhog",
    "Upperill",
    "Volfhole",
    "Vinifera",
    "Wickerspin",
    "Yarn",
    "Zarrack",
];

/// Occupation/capability pairs.
pub const OCCUPATIONS: &[Occupation] = &[
    Occupation { name: "Actor", capability: "Anal-Retentive" },
    Occupation { name: "Barge Pilot", capability: "Boringly Dependable" },
    Occupation { name: "Butler", capability: "Best in the City" },
    Occupation { name: "Coffee House Host", capability: "Cheap and Dirty" },
    Occupation { name: "Coal Miner", capability: "Charming and Oily" },
    Occupation { name: "Dog Breeder", capability: "Dabbler" },
    Occupation { name: "Engine Cleaner", capability: "Expensive and Flashy" },
    Occupation { name: "Fist Fighter", capability: "Fair and Down to Earth" },
    Occupation { name: "Fishmonger", capability: "Filthy but very cheap" },
    Occupation { name: "Gull-Catcher", capability: "Great, but hated for it" },
    Occupation { name: "Glue Maker", capability: "Good but Annoying" },
    Occupation { name: "Gunsmith", capability: "Highly Artistic" },
    Occupation { name: "Gin-Maker", capability: "Hardly Trained" },
    Occupation { name: "Hog-Slaughterer", capability: "Inherited Family Trade" },
    Occupation { name: "Ivory Worker", capability: "Interested in new career" },
    Occupation { name: "Jeweler", capability: "Imposter" },
    Occupation { name: "Lower-Politician", capability: "Jealous of Better Rival" },
    Occupation { name: "Life Servant", capability: "Learning, still" },
    Occupation { name: "Lamp-Lighter", capability: "Loves the job" },
    Occupation { name: "Lesser-Noble", capability: "Lazy and Greedy" },
    Occupation { name: "Mercenary", capability: "Money-Grabbing" },
    Occupation { name: "Newspaper Vendor", capability: "Moral, but not that good" },
    Occupation { name: "Octopus-Catcher", capability: "Only serves friends" },
    Occupation { name: "Oyster Seller", capability: "Old-Master-Trained" },
    Occupation { name: "Perfumer", capability: "Perfectionist" },
    Occupation { name: "Professor", capability: "Paragon of the Job" },
    Occupation { name: "Prison Guard", capability: "Poor from bad business" },
    Occupation { name: "Pie-Smith", capability: "Retired from Injury" },
    Occupation { name: "Road Sweeper", capability: "Ruthless" },
    Occupation { name: "Salt Farmer", capability: "Sworn into Profession" },
    Occupation { name: "Sweet-Maker", capability: "Silently Dutiful" },
    Occupation { name: "Trinket-Merchant", capability: "Trained from Birth" },
    Occupation { name: "Tax Collector", capability: "Trapped in Job" },
    Occupation { name: "Tunnel Digger", capability: "Uncaring" },
    Occupation { name: "Whaler", capability: "Unreliable Genius" },
    Occupation { name: "Watchmaker", capability: "Wedded into Career" },
    Occupation { name: "Watchman", capability: "Wasted Talent" },
    Occupation { name: "Writer", capability: "Warm and Friendly" },
    Occupation { name: "Wigmaker", capability: "Wealthy with Success" },
];

/// Fallback for arcanum keys outside the d66 table (cannot occur with
/// fair dice, but the lookup stays total).
pub const UNKNOWN_ARCANUM: (&str, &str) = ("Unknown Arcanum", "A mysterious object.");

/// Look up an arcanum by its d66 key (tens digit = first die, units
/// digit = second die). Returns `(name, description)`.
pub fn arcanum(key: u8) -> (&'static str, &'static str) {
    match key {
        11 => ("Gatekeeper\u{2019}s Sigil", "Create a gate between two flat surfaces that you can see."),
        12 => ("Pierced Heart", "Indicates direction and vague distance of an object you desire."),
        13 => ("Pale Flame", "Object glows with white light. Contact causes chilling pain."),
        14 => ("Soul Chain", "Target loses d6 WIL and you glimpse their desire."),
        15 => ("Gavel of the Unbreakable Seal", "One door or window is sealed until you open it."),
        16 => ("Foul Censer", "Green smoke surrounds you. Missiles cannot pass through."),
        21 => ("Bleeding Stave", "Spews blood-like oil. DEX Save to avoid falling."),
        22 => ("Pain Idol", "Roll a die. Odd: lose STR. Even: target loses STR."),
        23 => ("Webbed Hands", "Climb sheer surfaces as if you were a spider."),
        24 => ("Sunblessed Bands", "Glow and hum. Attackers suffer damage equal to what they deal."),
        25 => ("Flesh-Tome of Babble", "Speak strange language. Every living thing understands."),
        26 => ("Tyrant\u{2019}s Rod", "Order a target to drop, fall, flee or halt."),
        31 => ("Black Veil", "Target blinded until curse lifted or they Rest."),
        32 => ("Strands of Suffering", "Strands spread between surfaces. Movement causes pain."),
        33 => ("Heat Ray", "Metal object becomes too hot to touch. d8 Damage."),
        34 => ("Miniaturisation Coil", "Touch an object to shrink it into a tiny miniature."),
        35 => ("Frozen Cloud", "Floats at will. d6 Damage and cannot move within."),
        36 => ("Many Phase Key", "Phase through a wall or floor with objects."),
        41 => ("Skull Magnet", "Attract or repel a single target with a boney skull."),
        42 => ("Transreal Mirror", "Create a perfect duplicate of you that acts independently."),
        43 => ("Gorger\u{2019}s Mask", "Wearer can consume anything safely."),
        44 => ("Tomb Box", "Contains three tiny skeletons that obey the holder."),
        45 => ("Howling Lantern", "Blowing causes roar that terrifies prey but attracts predators."),
        46 => ("Rainbow Blade", "Sword (d6) fires harmless light beam."),
        51 => ("Hawk of Prosperity", "Mechanical bird helps accumulate wealth. Eats 1s/day."),
        52 => ("Inquisitor\u{2019}s Hood", "Target must answer truthfully or you blurt inconvenient truth."),
        53 => ("Winter\u{2019}s Sickle", "Damage causes cold/deprivation until warmed."),
        54 => ("Grief Cup", "Drinker has upsetting visions of past actions."),
        55 => ("Victory Globe", "Guides you to oath fulfillment. Punishes failure."),
        56 => ("Moon Lens", "Highlights object that best answers a question."),
        61 => ("Fool\u{2019}s Coin", "Others crave this coin. Effect lasts an hour."),
        62 => ("Chance Rose", "Crush to set odds of success to 50%."),
        63 => ("Homing Stick", "Staff that flies back to you."),
        64 => ("False Platter", "Viewer sees illusion of luxury they crave."),
        65 => ("Gold Visor", "Visualize honesty and sincerity of speaker."),
        66 => ("Infinity Icon", "Stop time, but can only observe and think."),
        _ => UNKNOWN_ARCANUM,
    }
}

/// Band a highest-ability score onto a starter-package row.
///
/// Rows exist for raw values 10 through 18; everything from 3 to 9
/// collapses onto the row keyed 3. This is a banding rule, not an index.
pub fn starter_row(highest: u8) -> u8 {
    if highest <= 9 {
        3
    } else {
        highest
    }
}

/// Look up the starter package string for a (row, hp) cell.
///
/// Rows are the banded highest-ability values (3, 10-18); hp is the d6
/// roll. Returns `None` for cells outside the matrix; callers fall back
/// to a generic single weapon.
pub fn starter_package(row: u8, hp: u8) -> Option<&'static str> {
    let package = match (row, hp) {
        // 3-9 band
        (3, 1) => "Sword (d6), Pistol (d6), Modern Armour, Sense nearby unearthly beings",
        (3, 2) => "Musket (d8 B), Sword (d6), Flashbang, Sense nearby Arcana",
        (3, 3) => "Musket (d8 B), Club (d6), Immunity to extreme heat and cold",
        (3, 4) => "Pistol (d6), Knife (d6), Telepathy if target fails WIL Save",
        (3, 5) => "Blunderbuss (d8 B), Hatchet (d6), Mutt, Dreams show your undiscovered surroundings",
        (3, 6) => "Musket (d8 B), Hatchet (d6), Flashbang, Arcanum, Iron Limb",
        (10, 1) => "Rifle (d8 B), Bayonet (d6), Lighter Boy, Arcanum",
        (10, 2) => "Musket (d8 B), Hatchet (d6), Hawk, Arcanum",
        (10, 3) => "Musket (d8 B), Protective Gloves, Arcanum",
        (10, 4) => "Claymore (d8 B), Pistol (d6), 2 Acid Flasks, Arcanum",
        (10, 5) => "Brace of Pistols (d8 B), Steel Wire, Grappling Hook, Arcanum",
        (10, 6) => "Rifle (d8 B), Mace (d6), Eagle, Poison",
        (11, 1) => "Rifle (d8 B), Modern Armour, Hound, Arcanum",
        (11, 2) => "Hatchet (d6), Pistol (d6), Bolt-Cutters, Arcanum",
        (11, 3) => "Musket (d8 B), Mallet, Marbles, Fancy Hat, Arcanum",
        (11, 4) => "Musket (d8 B), Bayonet (d6), Mutt with telepathic link",
        (11, 5) => "Machete (d6), Brace of Pistols (d8 B), Talking Parrot, Never Sleep",
        (11, 6) => "Club (d6), 3 Bombs, Rocket, Darkvision",
        (12, 1) => "Club (d6), Throwing Knives, Arcanum",
        (12, 2) => "Musket (d8 B), Mule, Arcanum",
        (12, 3) => "Pick-Axe (d6), Manacles, Arcanum",
        (12, 4) => "Pistol (d6), Rocket, Toxin-Immune",
        (12, 5) => "Harpoon Gun (d8 B), Baton (d6), Acid, Slightly Magnetic",
        (12, 6) => "Maul (d8 B), Dagger (d6), Chain",
        (13, 1) => "Pistol (d6), Ether, Poison, Arcanum",
        (13, 2) => "Sword (d6), Pistol (d6), Crude Armour",
        (13, 3) => "Pistol (d6), Smoke-bomb, Mutt, Shovel",
        (13, 4) => "Musket (d8 B), Portable Ram, Game Set",
        (13, 5) => "Bolt-Cutters, Blunderbuss (d8 B), Fiddle",
        (13, 6) => "Longaxe (d8 B), Rum, Bomb",
        (14, 1) => "Cane (d6), Acid, Spyglass, Arcanum",
        (14, 2) => "Pistol (d6), Bell, Steel Wire, Smoke-bomb",
        (14, 3) => "Longaxe (d8 B), Throwing Axes, Fire Oil",
        (14, 4) => "Pistol (d6), Saw, Animal Trap, Spyglass",
        (14, 5) => "Pistol (d6), Grease, Hand Drill, Drum",
        (14, 6) => "Dagger (d6), Fire Oil, Mirror",
        (15, 1) => "Brace of Pistols (d8 B), Canary, Ether",
        (15, 2) => "Longaxe (d8 B), Ferret, Fire Oil",
        (15, 3) => "Club (d6), Ether, Crowbar, Flute",
        (15, 4) => "Bow (d6 B), Knife (d6), Rocket, Fire Oil",
        (15, 5) => "Sword & Dagger (d8 B), Magnifying Glass, Lost Eye",
        (15, 6) => "Pistol (d6), Knife (d6), Bomb, Saw",
        (16, 1) => "Musket (d8 B), Pocket-watch, Bomb",
        (16, 2) => "Staff (d6 B), Tongs, Glue",
        (16, 3) => "Hatchet (d6), Net, Fire Oil, Burnt Face",
        (16, 4) => "Pistol (d6), Whip (d6), Cigars, Lost Eye",
        (16, 5) => "Pistol (d6), Acid, Animal Repellent, Prosthetic Hand",
        (16, 6) => "Pistol (d6), Bomb, Shovel, Glowing Eyes",
        (17, 1) => "Halberd (d8 B), Fake Pistol, Artificial Lung",
        (17, 2) => "Pistol (d6), Net, Trumpet, Prosthetic Leg",
        (17, 3) => "Club (d6), Paint, Crowbar, Loud Lungs",
        (17, 4) => "Musket (d8 B), Accordion, No Nose/Scent",
        (17, 5) => "Sword (d6), Steel Wire, Ugly Mutation",
        (17, 6) => "Staff (d6 B), Throwing Knives (d6)",
        (18, 1) => "Garotte (d6), Musket (d8 B), Mute",
        (18, 2) => "Pistol (d6), Grease, Hacksaw, One Arm",
        (18, 3) => "Pistol (d6), Cigars, Poison, Fugitive",
        (18, 4) => "Sword (d6), Shield, Illiterate",
        (18, 5) => "Sword (d6), Ferret, Tattered Clothes, Debt (3G)",
        (18, 6) => "Mace (d6), Pigeon, Disfigured",
        _ => return None,
    };
    Some(package)
}

//! Recruit catalogs: classes, rarity tiers, quirk banks, chaos-banded
//! outcome tables and the employment phrase banks.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcClass {
    Pilot,
    Engineer,
    Marine,
    Trader,
    Scientist,
    Medic,
}

pub const NPC_CLASSES: [NpcClass; 6] = [
    NpcClass::Pilot,
    NpcClass::Engineer,
    NpcClass::Marine,
    NpcClass::Trader,
    NpcClass::Scientist,
    NpcClass::Medic,
];

impl NpcClass {
    pub fn name(self) -> &'static str {
        match self {
            NpcClass::Pilot => "pilot",
            NpcClass::Engineer => "engineer",
            NpcClass::Marine => "marine",
            NpcClass::Trader => "trader",
            NpcClass::Scientist => "scientist",
            NpcClass::Medic => "medic",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NpcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NpcClass {
    type Err = GenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NPC_CLASSES
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenError::UnknownNpcClass(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Cumulative roll table; the weights sum to 100.
pub const RARITY_WEIGHTS: [(Rarity, u32); 4] = [
    (Rarity::Common, 70),
    (Rarity::Uncommon, 20),
    (Rarity::Rare, 8),
    (Rarity::Legendary, 2),
];

impl Rarity {
    pub fn skill_range(self) -> RangeInclusive<u64> {
        match self {
            Rarity::Common => 1..=40,
            Rarity::Uncommon => 30..=60,
            Rarity::Rare => 55..=80,
            Rarity::Legendary => 75..=100,
        }
    }

    pub fn wage_multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.5,
            Rarity::Legendary => 5.0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        };
        f.write_str(label)
    }
}

pub const WAGE_BASE: f64 = 100.0;
pub const WAGE_GROWTH: f64 = 1.03;

/// Specialties roll in this range before racial offsets are added.
pub const SPECIALTY_MIN: u64 = 1;
pub const SPECIALTY_MAX: u64 = 85;

pub const MAX_QUIRKS: u64 = 3;
pub const QUIRK_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

pub const POSITIVE_QUIRKS: &[&str] = &[
    "Steady Hands",
    "Night Owl",
    "Quick Study",
    "Iron Stomach",
    "Born Negotiator",
    "Unflappable",
    "Meticulous",
    "Lucky",
];

pub const NEUTRAL_QUIRKS: &[&str] = &[
    "Collects Star Charts",
    "Hums While Working",
    "Vegetarian",
    "Talks to Machines",
    "Superstitious",
    "Early Riser",
    "Keeps a Journal",
];

pub const NEGATIVE_QUIRKS: &[&str] = &[
    "Hot-Tempered",
    "Gambler",
    "Claustrophobic",
    "Kleptomaniac",
    "Chronic Insomniac",
    "Holds Grudges",
    "Reckless",
    "Space-Sick",
];

impl Polarity {
    pub fn bank(self) -> &'static [&'static str] {
        match self {
            Polarity::Positive => POSITIVE_QUIRKS,
            Polarity::Neutral => NEUTRAL_QUIRKS,
            Polarity::Negative => NEGATIVE_QUIRKS,
        }
    }
}

/// Chaos bands: `[0,25)`, `[25,50)`, `[50,75)`, `[75,100]`.
pub fn chaos_band(chaos_factor: u8) -> usize {
    match chaos_factor {
        0..=24 => 0,
        25..=49 => 1,
        50..=74 => 2,
        _ => 3,
    }
}

pub const QUIRK_POLARITY_BY_BAND: [[(Polarity, u32); 3]; 4] = [
    [
        (Polarity::Positive, 60),
        (Polarity::Neutral, 30),
        (Polarity::Negative, 10),
    ],
    [
        (Polarity::Positive, 40),
        (Polarity::Neutral, 40),
        (Polarity::Negative, 20),
    ],
    [
        (Polarity::Positive, 25),
        (Polarity::Neutral, 35),
        (Polarity::Negative, 40),
    ],
    [
        (Polarity::Positive, 10),
        (Polarity::Neutral, 30),
        (Polarity::Negative, 60),
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Clean,
    Incident,
    Catastrophe,
}

/// Each row sums to 100.
pub const OUTCOME_BY_BAND: [[(OutcomeCategory, u32); 3]; 4] = [
    [
        (OutcomeCategory::Clean, 80),
        (OutcomeCategory::Incident, 15),
        (OutcomeCategory::Catastrophe, 5),
    ],
    [
        (OutcomeCategory::Clean, 60),
        (OutcomeCategory::Incident, 28),
        (OutcomeCategory::Catastrophe, 12),
    ],
    [
        (OutcomeCategory::Clean, 40),
        (OutcomeCategory::Incident, 35),
        (OutcomeCategory::Catastrophe, 25),
    ],
    [
        (OutcomeCategory::Clean, 20),
        (OutcomeCategory::Incident, 40),
        (OutcomeCategory::Catastrophe, 40),
    ],
];

/// Tenure in months per chaos band; higher chaos, shorter stays.
pub const TENURE_BY_BAND: [(u64, u64); 4] = [(12, 60), (6, 36), (3, 18), (1, 9)];

pub const MIN_JOBS: u64 = 2;
pub const MAX_JOBS: u64 = 5;

/// Chaos factor at or above which unexplained gaps can appear.
pub const GAP_CHAOS_THRESHOLD: u8 = 75;
pub const GAP_CHANCE_PERCENT: u64 = 35;

pub const CLEAN_OUTCOMES: &[&str] = &[
    "Left on good terms with a glowing reference.",
    "Contract completed; offered an extension and declined.",
    "Promoted twice before moving on.",
    "Departed when the company relocated sectors.",
    "Finished the tour without a single write-up.",
];

pub const INCIDENT_OUTCOMES: &[&str] = &[
    "Dismissed after a dispute with the quartermaster.",
    "Reprimanded for unauthorized use of a shuttle.",
    "Left abruptly after a cargo manifest went missing.",
    "Suspended pending an inquiry that was never concluded.",
    "Quit mid-route following a bar fight on a waystation.",
];

pub const CATASTROPHE_OUTCOMES: &[&str] = &[
    "Sole survivor of a reactor breach; company dissolved.",
    "Ship impounded after a smuggling charge; crew scattered.",
    "Employer declared bankrupt after an unexplained hull loss.",
    "Blacklisted following a mutiny aboard the flagship.",
    "Station evacuated after a containment failure in their section.",
];

impl OutcomeCategory {
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            OutcomeCategory::Clean => CLEAN_OUTCOMES,
            OutcomeCategory::Incident => INCIDENT_OUTCOMES,
            OutcomeCategory::Catastrophe => CATASTROPHE_OUTCOMES,
        }
    }
}

pub const EMPLOYER_PREFIXES: &[&str] = &[
    "Helix", "Orbital", "Crimson", "Stellar", "Northstar", "Ironclad", "Blue Comet", "Tannhauser",
    "Obsidian", "Polaris",
];

pub const EMPLOYER_MIDDLES: &[&str] = &[
    "Mining", "Freight", "Salvage", "Logistics", "Security", "Biotech", "Shipyards", "Survey",
];

pub const EMPLOYER_SUFFIXES: &[&str] = &[
    "Consortium", "Collective", "Holdings", "Company", "Syndicate", "Guild", "Cooperative",
];

pub const GAP_EMPLOYER: &str = "Unaccounted";

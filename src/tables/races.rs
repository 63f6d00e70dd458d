use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Vexari,
    Krell,
    Zyth,
    Myrmid,
}

/// Table order is part of the output contract.
pub const RACES: [Race; 5] = [Race::Human, Race::Vexari, Race::Krell, Race::Zyth, Race::Myrmid];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecialtyBonus {
    pub piloting: u8,
    pub engineering: u8,
    pub combat: u8,
    pub barter: u8,
    pub science: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingModifiers {
    pub output: f64,
    pub income: f64,
    pub corruption: f64,
    pub durability: f64,
    pub pollution: f64,
    pub population: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipModifiers {
    pub cargo: f64,
    pub hull: f64,
    pub speed: f64,
    pub firepower: f64,
}

#[derive(Debug)]
pub struct RaceProfile {
    pub race: Race,
    pub label: &'static str,
    pub required_trait: &'static str,
    pub specialty_bonus: SpecialtyBonus,
    pub building: BuildingModifiers,
    pub ship: ShipModifiers,
    pub building_prefixes: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
}

const NEUTRAL_BUILDING: BuildingModifiers = BuildingModifiers {
    output: 1.0,
    income: 1.0,
    corruption: 1.0,
    durability: 1.0,
    pollution: 1.0,
    population: 1.0,
};

static PROFILES: [RaceProfile; 5] = [
    RaceProfile {
        race: Race::Human,
        label: "Human",
        required_trait: "Adaptable",
        specialty_bonus: SpecialtyBonus {
            piloting: 0,
            engineering: 5,
            combat: 0,
            barter: 0,
            science: 0,
        },
        building: NEUTRAL_BUILDING,
        ship: ShipModifiers {
            cargo: 1.0,
            hull: 1.0,
            speed: 1.0,
            firepower: 1.0,
        },
        building_prefixes: &["Terran", "Union", "Meridian", "Frontier"],
        given_names: &[
            "Ada", "Marcus", "Yuki", "Priya", "Omar", "Elena", "Diego", "Ingrid", "Kenji",
            "Amara", "Sven", "Leila",
        ],
        family_names: &[
            "Okafor", "Reyes", "Lindqvist", "Tanaka", "Moreau", "Kowalski", "Haddad", "Ibarra",
            "Novak", "Chen",
        ],
    },
    RaceProfile {
        race: Race::Vexari,
        label: "Vexari",
        required_trait: "Ledger-Minded",
        specialty_bonus: SpecialtyBonus {
            piloting: 0,
            engineering: 0,
            combat: 0,
            barter: 10,
            science: 0,
        },
        building: BuildingModifiers {
            income: 1.25,
            corruption: 1.5,
            ..NEUTRAL_BUILDING
        },
        ship: ShipModifiers {
            cargo: 1.35,
            hull: 0.9,
            speed: 1.0,
            firepower: 0.85,
        },
        building_prefixes: &["Consortium", "Exchange", "Tithe", "Guildhall"],
        given_names: &[
            "Vex", "Sarrow", "Ilith", "Quorr", "Methis", "Draal", "Oona", "Tessik",
        ],
        family_names: &[
            "of the Ninth Ledger", "Coinwright", "Tallyborn", "Marrowgild", "Ashtithe",
            "Quillmark",
        ],
    },
    RaceProfile {
        race: Race::Krell,
        label: "Krell",
        required_trait: "Stoneblooded",
        specialty_bonus: SpecialtyBonus {
            piloting: 0,
            engineering: 10,
            combat: 5,
            barter: 0,
            science: 0,
        },
        building: BuildingModifiers {
            durability: 1.4,
            pollution: 1.6,
            ..NEUTRAL_BUILDING
        },
        ship: ShipModifiers {
            cargo: 0.95,
            hull: 1.3,
            speed: 0.85,
            firepower: 1.0,
        },
        building_prefixes: &["Forge", "Deepcut", "Slagworks", "Anvil"],
        given_names: &["Grak", "Thul", "Borra", "Kesh", "Drom", "Uzga", "Mott", "Haldr"],
        family_names: &["Ironvein", "Cinderjaw", "Slagborn", "Deepmaw", "Ashplate"],
    },
    RaceProfile {
        race: Race::Zyth,
        label: "Zyth",
        required_trait: "Echo-Sighted",
        specialty_bonus: SpecialtyBonus {
            piloting: 5,
            engineering: 0,
            combat: 0,
            barter: 0,
            science: 10,
        },
        building: BuildingModifiers {
            output: 1.1,
            population: 0.8,
            ..NEUTRAL_BUILDING
        },
        ship: ShipModifiers {
            cargo: 0.9,
            hull: 0.85,
            speed: 1.2,
            firepower: 1.05,
        },
        building_prefixes: &["Lattice", "Resonant", "Prism", "Choral"],
        given_names: &["Ziri", "Ael", "Nyx", "Sohra", "Ithe", "Velu", "Caen", "Rhee"],
        family_names: &["Seventh Echo", "Of Glass", "Brightfold", "Tessellate", "Wanelight"],
    },
    RaceProfile {
        race: Race::Myrmid,
        label: "Myrmid",
        required_trait: "Hive-Bound",
        specialty_bonus: SpecialtyBonus {
            piloting: 0,
            engineering: 0,
            combat: 10,
            barter: 0,
            science: 0,
        },
        building: BuildingModifiers {
            population: 1.2,
            ..NEUTRAL_BUILDING
        },
        ship: ShipModifiers {
            cargo: 1.0,
            hull: 1.1,
            speed: 0.95,
            firepower: 1.2,
        },
        building_prefixes: &["Brood", "Chitin", "Swarm", "Queen's"],
        given_names: &["Kix", "Tchak", "Zzra", "Kirrit", "Ska", "Vrix", "Tal", "Chisk"],
        family_names: &["of Mound Seven", "Sixlimb", "Carapace", "Broodkin", "Driftwing"],
    },
];

impl Race {
    pub fn profile(self) -> &'static RaceProfile {
        &PROFILES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    pub fn from_index(index: u64) -> Race {
        RACES[index as usize % RACES.len()]
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Race {
    type Err = GenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RACES
            .iter()
            .copied()
            .find(|race| race.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenError::UnknownRace(value.to_string()))
    }
}

//! Building archetypes and ship hull catalogs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::tables::Race;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingFunction {
    Extraction,
    Refining,
    Manufacturing,
    Habitation,
    Defense,
    Storage,
    Research,
    Commerce,
    Wonder,
}

pub const BUILDING_FUNCTIONS: [BuildingFunction; 9] = [
    BuildingFunction::Extraction,
    BuildingFunction::Refining,
    BuildingFunction::Manufacturing,
    BuildingFunction::Habitation,
    BuildingFunction::Defense,
    BuildingFunction::Storage,
    BuildingFunction::Research,
    BuildingFunction::Commerce,
    BuildingFunction::Wonder,
];

impl BuildingFunction {
    pub fn name(self) -> &'static str {
        match self {
            BuildingFunction::Extraction => "extraction",
            BuildingFunction::Refining => "refining",
            BuildingFunction::Manufacturing => "manufacturing",
            BuildingFunction::Habitation => "habitation",
            BuildingFunction::Defense => "defense",
            BuildingFunction::Storage => "storage",
            BuildingFunction::Research => "research",
            BuildingFunction::Commerce => "commerce",
            BuildingFunction::Wonder => "wonder",
        }
    }

    pub fn base_cost(self) -> f64 {
        match self {
            BuildingFunction::Extraction => 1_000.0,
            BuildingFunction::Refining => 1_500.0,
            BuildingFunction::Manufacturing => 2_000.0,
            BuildingFunction::Habitation => 800.0,
            BuildingFunction::Defense => 2_500.0,
            BuildingFunction::Storage => 600.0,
            BuildingFunction::Research => 3_000.0,
            BuildingFunction::Commerce => 1_800.0,
            BuildingFunction::Wonder => 25_000.0,
        }
    }
}

impl fmt::Display for BuildingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildingFunction {
    type Err = GenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BUILDING_FUNCTIONS
            .iter()
            .copied()
            .find(|function| function.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenError::UnknownBuildingFunction(value.to_string()))
    }
}

#[derive(Debug)]
pub struct BuildingArchetype {
    pub label: &'static str,
    pub function: BuildingFunction,
    /// Race-affiliated archetypes are preferred for their race and
    /// unavailable to everyone else.
    pub race: Option<Race>,
    pub inputs: &'static [(&'static str, f64)],
    pub outputs: &'static [(&'static str, f64)],
    pub storage: f64,
    pub firepower: f64,
    pub population_support: f64,
    pub income: f64,
    pub durability: f64,
    pub pollution: f64,
    pub corruption: f64,
}

/// Selection weight of an archetype affiliated with the builder's race.
pub const SPECIAL_ARCHETYPE_WEIGHT: u32 = 3;
pub const GENERIC_ARCHETYPE_WEIGHT: u32 = 1;

/// Power-law exponents applied as `base * tier^exponent`.
pub const INPUT_EXPONENT: f64 = 0.8;
pub const OUTPUT_EXPONENT: f64 = 1.3;
pub const STORAGE_EXPONENT: f64 = 1.4;
pub const FIREPOWER_EXPONENT: f64 = 1.5;
pub const POPULATION_EXPONENT: f64 = 1.2;

pub const COST_GROWTH: f64 = 1.8;

const BLANK: BuildingArchetype = BuildingArchetype {
    label: "",
    function: BuildingFunction::Extraction,
    race: None,
    inputs: &[],
    outputs: &[],
    storage: 0.0,
    firepower: 0.0,
    population_support: 0.0,
    income: 0.0,
    durability: 100.0,
    pollution: 0.0,
    corruption: 0.0,
};

pub static BUILDING_ARCHETYPES: &[BuildingArchetype] = &[
    BuildingArchetype {
        label: "Mining Rig",
        function: BuildingFunction::Extraction,
        inputs: &[("energy", 10.0)],
        outputs: &[("ore", 20.0)],
        storage: 50.0,
        pollution: 6.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Gas Siphon",
        function: BuildingFunction::Extraction,
        inputs: &[("energy", 14.0)],
        outputs: &[("volatiles", 16.0)],
        storage: 40.0,
        pollution: 3.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Magma Tap",
        function: BuildingFunction::Extraction,
        race: Some(Race::Krell),
        inputs: &[("energy", 8.0)],
        outputs: &[("ore", 26.0), ("heat", 10.0)],
        storage: 60.0,
        durability: 140.0,
        pollution: 12.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Smelter",
        function: BuildingFunction::Refining,
        inputs: &[("ore", 20.0), ("energy", 12.0)],
        outputs: &[("alloy", 10.0)],
        storage: 40.0,
        pollution: 9.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Crystal Resonator",
        function: BuildingFunction::Refining,
        race: Some(Race::Zyth),
        inputs: &[("ore", 14.0), ("energy", 16.0)],
        outputs: &[("alloy", 9.0), ("crystal", 4.0)],
        storage: 30.0,
        pollution: 2.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Fabricator",
        function: BuildingFunction::Manufacturing,
        inputs: &[("alloy", 10.0), ("energy", 15.0)],
        outputs: &[("components", 6.0)],
        storage: 30.0,
        pollution: 5.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Shipwright",
        function: BuildingFunction::Manufacturing,
        inputs: &[("alloy", 18.0), ("components", 4.0), ("energy", 20.0)],
        outputs: &[("hull_plating", 3.0)],
        storage: 45.0,
        pollution: 7.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Hab Block",
        function: BuildingFunction::Habitation,
        inputs: &[("food", 10.0), ("energy", 6.0)],
        population_support: 200.0,
        income: 20.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Brood Warren",
        function: BuildingFunction::Habitation,
        race: Some(Race::Myrmid),
        inputs: &[("food", 14.0), ("energy", 4.0)],
        population_support: 320.0,
        income: 12.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Turret Nest",
        function: BuildingFunction::Defense,
        inputs: &[("energy", 12.0), ("munitions", 2.0)],
        firepower: 40.0,
        durability: 160.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Shield Pylon",
        function: BuildingFunction::Defense,
        inputs: &[("energy", 24.0)],
        firepower: 10.0,
        durability: 240.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Warehouse",
        function: BuildingFunction::Storage,
        inputs: &[("energy", 3.0)],
        storage: 400.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Cold Vault",
        function: BuildingFunction::Storage,
        inputs: &[("energy", 8.0)],
        storage: 300.0,
        durability: 180.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Laboratory",
        function: BuildingFunction::Research,
        inputs: &[("energy", 18.0), ("components", 2.0)],
        outputs: &[("research", 8.0)],
        storage: 10.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Trade Post",
        function: BuildingFunction::Commerce,
        inputs: &[("energy", 6.0)],
        storage: 80.0,
        income: 60.0,
        corruption: 4.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Tithe Exchange",
        function: BuildingFunction::Commerce,
        race: Some(Race::Vexari),
        inputs: &[("energy", 8.0)],
        storage: 120.0,
        income: 90.0,
        corruption: 10.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Grand Bourse",
        function: BuildingFunction::Wonder,
        race: Some(Race::Vexari),
        inputs: &[("energy", 60.0)],
        storage: 500.0,
        income: 600.0,
        corruption: 30.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Deep Core Foundry",
        function: BuildingFunction::Wonder,
        race: Some(Race::Krell),
        inputs: &[("energy", 80.0), ("ore", 60.0)],
        outputs: &[("alloy", 120.0)],
        storage: 300.0,
        durability: 600.0,
        pollution: 50.0,
        ..BLANK
    },
    BuildingArchetype {
        label: "Resonance Spire",
        function: BuildingFunction::Wonder,
        race: Some(Race::Zyth),
        inputs: &[("energy", 90.0)],
        outputs: &[("research", 70.0)],
        storage: 50.0,
        ..BLANK
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullClass {
    Shuttle,
    Freighter,
    Corvette,
    Frigate,
    Hauler,
}

pub const HULL_CLASSES: [HullClass; 5] = [
    HullClass::Shuttle,
    HullClass::Freighter,
    HullClass::Corvette,
    HullClass::Frigate,
    HullClass::Hauler,
];

#[derive(Debug)]
pub struct HullProfile {
    pub label: &'static str,
    pub cargo: f64,
    pub hull_points: f64,
    pub speed: f64,
    pub crew: f64,
    pub firepower: f64,
    pub base_cost: f64,
}

static HULL_PROFILES: [HullProfile; 5] = [
    HullProfile {
        label: "shuttle",
        cargo: 20.0,
        hull_points: 80.0,
        speed: 12.0,
        crew: 2.0,
        firepower: 0.0,
        base_cost: 2_000.0,
    },
    HullProfile {
        label: "freighter",
        cargo: 200.0,
        hull_points: 300.0,
        speed: 6.0,
        crew: 6.0,
        firepower: 5.0,
        base_cost: 8_000.0,
    },
    HullProfile {
        label: "corvette",
        cargo: 40.0,
        hull_points: 250.0,
        speed: 10.0,
        crew: 8.0,
        firepower: 40.0,
        base_cost: 9_500.0,
    },
    HullProfile {
        label: "frigate",
        cargo: 60.0,
        hull_points: 600.0,
        speed: 7.0,
        crew: 20.0,
        firepower: 90.0,
        base_cost: 18_000.0,
    },
    HullProfile {
        label: "hauler",
        cargo: 500.0,
        hull_points: 450.0,
        speed: 4.0,
        crew: 10.0,
        firepower: 0.0,
        base_cost: 14_000.0,
    },
];

impl HullClass {
    pub fn profile(self) -> &'static HullProfile {
        &HULL_PROFILES[self as usize]
    }
}

impl fmt::Display for HullClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().label)
    }
}

impl FromStr for HullClass {
    type Err = GenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        HULL_CLASSES
            .iter()
            .copied()
            .find(|hull| hull.profile().label.eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GenError::UnknownHullClass(value.to_string()))
    }
}

pub const SHIP_NAME_WORDS: &[&str] = &[
    "Endeavour", "Meridian", "Lodestar", "Halcyon", "Vagrant", "Tenacity", "Kestrel", "Ember",
    "Solace", "Harbinger", "Wayfarer", "Cinder", "Providence", "Quillon", "Bulwark", "Drifter",
];

//! Star, planet, mineral and flora catalogs.
//!
//! Every table here is indexed by seed extraction, so entry order is part of
//! the output contract. Append, never reorder.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarType {
    pub name: &'static str,
    pub hazard_bias: u8,
}

pub const STAR_TYPES: &[StarType] = &[
    StarType {
        name: "red_dwarf",
        hazard_bias: 5,
    },
    StarType {
        name: "orange_dwarf",
        hazard_bias: 0,
    },
    StarType {
        name: "yellow_dwarf",
        hazard_bias: 0,
    },
    StarType {
        name: "white_dwarf",
        hazard_bias: 10,
    },
    StarType {
        name: "blue_giant",
        hazard_bias: 20,
    },
    StarType {
        name: "red_giant",
        hazard_bias: 15,
    },
    StarType {
        name: "neutron_star",
        hazard_bias: 35,
    },
    StarType {
        name: "binary_pair",
        hazard_bias: 10,
    },
];

pub const TUTORIAL_STAR: &str = "yellow_dwarf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetType {
    Terrestrial,
    Oceanic,
    Desert,
    Arctic,
    Volcanic,
    GasGiant,
    Barren,
    Jungle,
    Toxic,
}

pub const PLANET_TYPES: [PlanetType; 9] = [
    PlanetType::Terrestrial,
    PlanetType::Oceanic,
    PlanetType::Desert,
    PlanetType::Arctic,
    PlanetType::Volcanic,
    PlanetType::GasGiant,
    PlanetType::Barren,
    PlanetType::Jungle,
    PlanetType::Toxic,
];

impl PlanetType {
    pub fn name(self) -> &'static str {
        match self {
            PlanetType::Terrestrial => "terrestrial",
            PlanetType::Oceanic => "oceanic",
            PlanetType::Desert => "desert",
            PlanetType::Arctic => "arctic",
            PlanetType::Volcanic => "volcanic",
            PlanetType::GasGiant => "gas_giant",
            PlanetType::Barren => "barren",
            PlanetType::Jungle => "jungle",
            PlanetType::Toxic => "toxic",
        }
    }

    /// Deposit quantity multiplier applied to the base quantity range.
    pub fn deposit_multiplier(self) -> f64 {
        match self {
            PlanetType::Terrestrial => 1.0,
            PlanetType::Oceanic => 0.6,
            PlanetType::Desert => 1.2,
            PlanetType::Arctic => 0.8,
            PlanetType::Volcanic => 2.0,
            PlanetType::GasGiant => 0.1,
            PlanetType::Barren => 1.5,
            PlanetType::Jungle => 0.7,
            PlanetType::Toxic => 1.3,
        }
    }

    /// Draw weight of a common mineral class on this biome. Zero rules the
    /// class out entirely.
    pub fn mineral_affinity(self, class: MineralClass) -> u32 {
        let [metal, rock, volatile, fuel] = match self {
            PlanetType::Terrestrial => [3, 3, 2, 1],
            PlanetType::Oceanic => [1, 2, 4, 2],
            PlanetType::Desert => [2, 4, 2, 1],
            PlanetType::Arctic => [1, 2, 4, 2],
            PlanetType::Volcanic => [4, 3, 2, 1],
            PlanetType::GasGiant => [0, 0, 4, 5],
            PlanetType::Barren => [4, 4, 1, 2],
            PlanetType::Jungle => [2, 3, 3, 1],
            PlanetType::Toxic => [3, 2, 3, 2],
        };
        match class {
            MineralClass::Metal => metal,
            MineralClass::Rock => rock,
            MineralClass::Volatile => volatile,
            MineralClass::Fuel => fuel,
            // Exotic draws ignore the biome.
            MineralClass::Exotic => 1,
        }
    }

    pub fn habitable(self) -> bool {
        matches!(
            self,
            PlanetType::Terrestrial | PlanetType::Oceanic | PlanetType::Jungle
        )
    }

    pub fn flora(self) -> &'static [&'static str] {
        match self {
            PlanetType::Terrestrial => TERRESTRIAL_FLORA,
            PlanetType::Oceanic => OCEANIC_FLORA,
            PlanetType::Desert => DESERT_FLORA,
            PlanetType::Arctic => ARCTIC_FLORA,
            PlanetType::Volcanic => VOLCANIC_FLORA,
            PlanetType::Jungle => JUNGLE_FLORA,
            PlanetType::Toxic => TOXIC_FLORA,
            PlanetType::GasGiant | PlanetType::Barren => &[],
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

pub const PLANET_SIZES: [PlanetSize; 5] = [
    PlanetSize::Tiny,
    PlanetSize::Small,
    PlanetSize::Medium,
    PlanetSize::Large,
    PlanetSize::Huge,
];

impl PlanetSize {
    /// Upper bound on deposits rolled for a planet of this size.
    pub fn max_deposits(self) -> u64 {
        match self {
            PlanetSize::Tiny => 2,
            PlanetSize::Small => 3,
            PlanetSize::Medium => 4,
            PlanetSize::Large => 5,
            PlanetSize::Huge => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mineral {
    pub name: &'static str,
    pub base_price: u32,
    pub class: MineralClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineralClass {
    Metal,
    Rock,
    Volatile,
    Fuel,
    Exotic,
}

use MineralClass::{Exotic, Fuel, Metal, Rock, Volatile};

const fn mineral(name: &'static str, base_price: u32, class: MineralClass) -> Mineral {
    Mineral {
        name,
        base_price,
        class,
    }
}

pub const COMMON_MINERALS: &[Mineral] = &[
    mineral("iron", 12, Metal),
    mineral("silicon", 14, Rock),
    mineral("copper", 18, Metal),
    mineral("aluminum", 16, Metal),
    mineral("nickel", 20, Metal),
    mineral("titanium", 45, Metal),
    mineral("carbon", 8, Volatile),
    mineral("sulfur", 9, Volatile),
    mineral("water_ice", 6, Volatile),
    mineral("quartz", 15, Rock),
    mineral("magnesium", 17, Metal),
    mineral("zinc", 19, Metal),
    mineral("lead", 13, Metal),
    mineral("tin", 22, Metal),
    mineral("cobalt", 38, Metal),
    mineral("chromium", 34, Metal),
    mineral("manganese", 24, Metal),
    mineral("tungsten", 55, Metal),
    mineral("lithium", 42, Metal),
    mineral("graphite", 21, Rock),
    mineral("bauxite", 11, Rock),
    mineral("feldspar", 10, Rock),
    mineral("gypsum", 7, Rock),
    mineral("halite", 5, Volatile),
    mineral("phosphate", 14, Volatile),
    mineral("potash", 13, Volatile),
    mineral("limestone", 6, Rock),
    mineral("basalt", 5, Rock),
    mineral("obsidian", 26, Rock),
    mineral("mica", 18, Rock),
    mineral("beryl", 48, Rock),
    mineral("corundum", 52, Rock),
    mineral("garnet", 36, Rock),
    mineral("olivine", 23, Rock),
    mineral("pyrite", 15, Metal),
    mineral("magnetite", 19, Metal),
    mineral("hematite", 17, Metal),
    mineral("cinnabar", 40, Metal),
    mineral("galena", 21, Metal),
    mineral("rutile", 44, Metal),
    mineral("zircon", 39, Rock),
    mineral("vanadium", 58, Metal),
    mineral("molybdenum", 61, Metal),
    mineral("silver", 75, Metal),
    mineral("gold", 110, Metal),
    mineral("platinum", 140, Metal),
    mineral("uranium", 120, Fuel),
    mineral("thorium", 95, Fuel),
    mineral("helium3", 130, Fuel),
    mineral("deuterium", 85, Fuel),
];

pub const EXOTIC_MINERALS: &[Mineral] = &[
    mineral("void_crystal", 900, Exotic),
    mineral("neutronium", 1_400, Exotic),
    mineral("chronoton_shard", 1_800, Exotic),
    mineral("dark_matter_lattice", 2_400, Exotic),
    mineral("stellar_pearl", 1_100, Exotic),
    mineral("quantum_foam", 2_000, Exotic),
];

/// Chance, in tenths of a percent, that a deposit draws from the exotic table.
pub const EXOTIC_ROLL_PERMILLE: u64 = 20;

pub const DEPOSIT_QUANTITY_MIN: u64 = 100;
pub const DEPOSIT_QUANTITY_MAX: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthCategory {
    Surface,
    Shallow,
    Deep,
    Core,
}

pub const DEPTH_CATEGORIES: [DepthCategory; 4] = [
    DepthCategory::Surface,
    DepthCategory::Shallow,
    DepthCategory::Deep,
    DepthCategory::Core,
];

pub fn mineral_by_name(name: &str) -> Option<&'static Mineral> {
    COMMON_MINERALS
        .iter()
        .chain(EXOTIC_MINERALS.iter())
        .find(|mineral| mineral.name == name)
}

pub fn is_exotic(name: &str) -> bool {
    EXOTIC_MINERALS.iter().any(|mineral| mineral.name == name)
}

/// Maximum flora species drawn per planet and the retry cap per draw.
pub const MAX_FLORA_PER_PLANET: u64 = 4;
pub const FLORA_ATTEMPTS: usize = 3;

const TERRESTRIAL_FLORA: &[&str] = &[
    "meadow_grass",
    "ironbark_oak",
    "sunpetal",
    "copperleaf_fern",
    "windreed",
    "amber_moss",
    "stone_clover",
];

const OCEANIC_FLORA: &[&str] = &[
    "kelp_spire",
    "glass_coral",
    "drift_lily",
    "tidebloom",
    "brine_algae",
];

const DESERT_FLORA: &[&str] = &["dune_cactus", "glass_thorn", "sandvine", "ember_sage"];

const ARCTIC_FLORA: &[&str] = &["frost_lichen", "snowcap_moss", "ice_orchid"];

const VOLCANIC_FLORA: &[&str] = &["ash_bloom", "magma_lichen"];

const JUNGLE_FLORA: &[&str] = &[
    "strangler_vine",
    "giant_pitcher",
    "glowcap",
    "canopy_palm",
    "bloodfruit",
    "whisper_fern",
    "rot_orchid",
    "spore_tree",
];

const TOXIC_FLORA: &[&str] = &["acid_reed", "blight_fungus", "corrosive_bloom"];

const SYSTEM_PREFIXES: &[&str] = &[
    "Alpha", "Kepler", "Vega", "Orion", "Tau", "Sigma", "Draco", "Lyra", "Nova", "Cygni",
    "Helix", "Corvus", "Antares", "Rigel", "Zeta", "Umbra",
];

const SYSTEM_SUFFIXES: &[&str] = &[
    "Prime", "Reach", "Drift", "Gate", "Hollow", "Verge", "Crossing", "Deep", "Spur", "Rest",
    "Expanse", "Cradle",
];

pub fn system_prefixes() -> &'static [&'static str] {
    SYSTEM_PREFIXES
}

pub fn system_suffixes() -> &'static [&'static str] {
    SYSTEM_SUFFIXES
}

pub fn roman_numeral(mut value: u32) -> String {
    const NUMERALS: [(u32, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (step, glyph) in NUMERALS {
        while value >= step {
            out.push_str(glyph);
            value -= step;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_table_is_around_fifty_entries() {
        assert_eq!(COMMON_MINERALS.len(), 50);
        assert!(EXOTIC_MINERALS.len() < 10);
    }

    #[test]
    fn mineral_names_are_unique() {
        let mut names: Vec<&str> = COMMON_MINERALS
            .iter()
            .chain(EXOTIC_MINERALS.iter())
            .map(|mineral| mineral.name)
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COMMON_MINERALS.len() + EXOTIC_MINERALS.len());
    }

    #[test]
    fn gas_giants_and_barren_worlds_have_no_flora() {
        assert!(PlanetType::GasGiant.flora().is_empty());
        assert!(PlanetType::Barren.flora().is_empty());
        assert!(!PlanetType::Jungle.flora().is_empty());
    }

    #[test]
    fn documented_multipliers_hold() {
        assert_eq!(PlanetType::GasGiant.deposit_multiplier(), 0.1);
        assert_eq!(PlanetType::Volcanic.deposit_multiplier(), 2.0);
    }

    #[test]
    fn every_biome_can_draw_common_minerals() {
        for planet_type in PLANET_TYPES {
            let total: u32 = COMMON_MINERALS
                .iter()
                .map(|mineral| planet_type.mineral_affinity(mineral.class))
                .sum();
            assert!(total > 0, "{planet_type}");
        }
        assert!(COMMON_MINERALS.iter().all(|mineral| mineral.class != MineralClass::Exotic));
        assert!(EXOTIC_MINERALS.iter().all(|mineral| mineral.class == MineralClass::Exotic));
        assert_eq!(PlanetType::GasGiant.mineral_affinity(MineralClass::Metal), 0);
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(9), "IX");
        assert_eq!(roman_numeral(12), "XII");
    }

    #[test]
    fn tutorial_star_is_catalogued() {
        assert!(STAR_TYPES.iter().any(|star| star.name == TUTORIAL_STAR));
    }
}

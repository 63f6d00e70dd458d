//! The hand-authored tutorial system at the origin and the reserved
//! neighbours around it.

use crate::seed::Seed;
use crate::tables::{DepthCategory, PlanetSize, PlanetType, TUTORIAL_STAR};

use super::{
    base_prices, summarize, Coordinate, Deposit, GeneratedPlanet, GeneratedSystem,
    PlanetOverrides,
};

#[derive(Debug)]
pub struct ReservedSystem {
    pub coordinate: Coordinate,
    pub primary: bool,
    pub planet_count: Option<u64>,
    pub hazard_ceiling: u8,
    pub first_planet: Option<PlanetType>,
    pub guaranteed_minerals: &'static [&'static str],
}

impl ReservedSystem {
    pub fn first_planet_overrides(&self) -> PlanetOverrides {
        PlanetOverrides {
            planet_type: self.first_planet,
            guaranteed_minerals: self.guaranteed_minerals,
        }
    }
}

pub static RESERVED_SYSTEMS: &[ReservedSystem] = &[
    ReservedSystem {
        coordinate: Coordinate { x: 1, y: 0, z: 0 },
        primary: true,
        planet_count: Some(3),
        hazard_ceiling: 0,
        first_planet: Some(PlanetType::Terrestrial),
        guaranteed_minerals: &["iron", "silicon"],
    },
    ReservedSystem {
        coordinate: Coordinate { x: -1, y: 0, z: 0 },
        primary: false,
        planet_count: Some(2),
        hazard_ceiling: 10,
        first_planet: Some(PlanetType::Desert),
        guaranteed_minerals: &["copper", "carbon"],
    },
    ReservedSystem {
        coordinate: Coordinate { x: 0, y: 1, z: 0 },
        primary: false,
        planet_count: Some(4),
        hazard_ceiling: 10,
        first_planet: Some(PlanetType::Arctic),
        guaranteed_minerals: &["water_ice"],
    },
    ReservedSystem {
        coordinate: Coordinate { x: 0, y: -1, z: 0 },
        primary: false,
        planet_count: Some(3),
        hazard_ceiling: 10,
        first_planet: None,
        guaranteed_minerals: &["aluminum"],
    },
    ReservedSystem {
        coordinate: Coordinate { x: 0, y: 0, z: 1 },
        primary: false,
        planet_count: Some(2),
        hazard_ceiling: 15,
        first_planet: None,
        guaranteed_minerals: &[],
    },
    ReservedSystem {
        coordinate: Coordinate { x: 0, y: 0, z: -1 },
        primary: false,
        planet_count: Some(5),
        hazard_ceiling: 15,
        first_planet: Some(PlanetType::Volcanic),
        guaranteed_minerals: &["sulfur"],
    },
];

pub fn reserved_system(coordinate: &Coordinate) -> Option<&'static ReservedSystem> {
    RESERVED_SYSTEMS
        .iter()
        .find(|entry| entry.coordinate == *coordinate)
}

fn deposit(name: &str, quantity: u32, purity: f64, depth: DepthCategory) -> Deposit {
    Deposit {
        mineral_name: name.to_string(),
        quantity,
        purity,
        depth_category: depth,
    }
}

/// Haven: identical for every base seed.
pub(crate) fn tutorial_system() -> GeneratedSystem {
    let planets = vec![
        GeneratedPlanet {
            name: "Haven I".to_string(),
            planet_type: PlanetType::Terrestrial,
            size: PlanetSize::Medium,
            minerals: vec![
                deposit("iron", 600, 0.8, DepthCategory::Surface),
                deposit("silicon", 500, 0.7, DepthCategory::Shallow),
                deposit("copper", 300, 0.6, DepthCategory::Shallow),
                deposit("water_ice", 400, 0.9, DepthCategory::Surface),
            ],
            plants: vec!["meadow_grass".to_string(), "sunpetal".to_string()],
        },
        GeneratedPlanet {
            name: "Haven II".to_string(),
            planet_type: PlanetType::Barren,
            size: PlanetSize::Small,
            minerals: vec![
                deposit("carbon", 350, 0.5, DepthCategory::Surface),
                deposit("nickel", 250, 0.55, DepthCategory::Deep),
            ],
            plants: Vec::new(),
        },
        GeneratedPlanet {
            name: "Haven III".to_string(),
            planet_type: PlanetType::GasGiant,
            size: PlanetSize::Huge,
            minerals: vec![
                deposit("helium3", 80, 0.4, DepthCategory::Deep),
                deposit("deuterium", 60, 0.35, DepthCategory::Core),
            ],
            plants: Vec::new(),
        },
    ];

    let price_seed = Seed::derive(&["tutorial".into()]);
    GeneratedSystem {
        coordinate: Coordinate::ORIGIN,
        name: "Haven".to_string(),
        star_type: TUTORIAL_STAR.to_string(),
        planet_count: planets.len() as u32,
        hazard_level: 0,
        base_prices: base_prices(&price_seed, &planets),
        resource_distribution: summarize(&planets),
        planets,
        reserved: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::generate_system;

    #[test]
    fn tutorial_ignores_base_seed() {
        let a = generate_system("alpha", 0, 0, 0).unwrap();
        let b = generate_system("omega", 0, 0, 0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hazard_level, 0);
        assert_eq!(a.star_type, TUTORIAL_STAR);
    }

    #[test]
    fn exactly_one_primary_reserved_system() {
        let primaries: Vec<_> = RESERVED_SYSTEMS.iter().filter(|entry| entry.primary).collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].coordinate, Coordinate::new(1, 0, 0));
    }

    #[test]
    fn reserved_systems_respect_their_ceilings() {
        for seed in ["a", "b", "c", "d"] {
            for entry in RESERVED_SYSTEMS {
                let c = entry.coordinate;
                let system = generate_system(seed, c.x, c.y, c.z).unwrap();
                assert!(system.reserved);
                assert!(system.hazard_level <= entry.hazard_ceiling);
                if let Some(count) = entry.planet_count {
                    assert_eq!(system.planets.len() as u64, count);
                }
                let first = &system.planets[0];
                for mineral in entry.guaranteed_minerals {
                    assert!(first.minerals.iter().any(|d| d.mineral_name == *mineral));
                }
                if let Some(planet_type) = entry.first_planet {
                    assert_eq!(first.planet_type, planet_type);
                }
            }
        }
    }
}

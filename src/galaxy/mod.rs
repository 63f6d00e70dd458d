//! Star systems and everything below them: planets, deposits and flora.
//!
//! Generation flows strictly downward. A system seed is derived from the
//! base seed and coordinate, planets from the system seed and their index,
//! deposits and flora from the planet seed.

mod mineral;
mod planet;
mod plant;
mod reserved;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::GridConfig;
use crate::error::{GenError, GenResult};
use crate::seed::Seed;
use crate::tables::{mineral_by_name, system_prefixes, system_suffixes, STAR_TYPES};

pub use mineral::{generate_deposits, Deposit};
pub use planet::{generate_planet, GeneratedPlanet, PlanetOverrides};
pub use plant::generate_flora;
pub use reserved::{reserved_system, ReservedSystem, RESERVED_SYSTEMS};

pub const MAX_PLANETS: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0, z: 0 };

    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn validate(&self, grid: &GridConfig) -> GenResult<()> {
        let axes = [('x', self.x), ('y', self.y), ('z', self.z)];
        let limit = grid.frontier_limit.unsigned_abs();
        for (axis, value) in axes {
            if value.unsigned_abs() > limit {
                return Err(GenError::InvalidCoordinate {
                    axis,
                    value,
                    reason: format!("beyond the frontier limit of {}", grid.frontier_limit),
                });
            }
        }
        if self.in_core(grid) {
            for (axis, value) in axes {
                if value % grid.spacing.max(1) != 0 {
                    return Err(GenError::InvalidCoordinate {
                        axis,
                        value,
                        reason: format!("not on the core lattice (spacing {})", grid.spacing),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn in_core(&self, grid: &GridConfig) -> bool {
        let radius = grid.core_radius.unsigned_abs();
        [self.x, self.y, self.z]
            .iter()
            .all(|value| value.unsigned_abs() <= radius)
    }

    /// Chebyshev distance from the origin.
    pub fn reach(&self) -> u64 {
        [self.x, self.y, self.z]
            .iter()
            .map(|value| value.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    pub fn seed(&self, base_seed: &str) -> Seed {
        Seed::derive(&[
            "system".into(),
            base_seed.into(),
            self.x.into(),
            self.y.into(),
            self.z.into(),
        ])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDistribution {
    pub total_deposits: u32,
    pub exotic_deposits: u32,
    pub mineral_totals: BTreeMap<String, u64>,
    pub dominant_mineral: Option<String>,
    pub habitable_planets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSystem {
    pub coordinate: Coordinate,
    pub name: String,
    pub star_type: String,
    pub planet_count: u32,
    pub planets: Vec<GeneratedPlanet>,
    pub hazard_level: u8,
    pub base_prices: BTreeMap<String, u32>,
    pub resource_distribution: ResourceDistribution,
    pub reserved: bool,
}

/// Generates the system at `(x, y, z)` on the default grid.
pub fn generate_system(base_seed: &str, x: i64, y: i64, z: i64) -> GenResult<GeneratedSystem> {
    generate_system_on(&GridConfig::default(), base_seed, Coordinate::new(x, y, z))
}

pub fn generate_system_on(
    grid: &GridConfig,
    base_seed: &str,
    coordinate: Coordinate,
) -> GenResult<GeneratedSystem> {
    coordinate.validate(grid)?;
    if coordinate == Coordinate::ORIGIN {
        return Ok(reserved::tutorial_system());
    }

    let seed = coordinate.seed(base_seed);
    let reserved = reserved_system(&coordinate);
    let mut cursor = seed.cursor();

    let star = STAR_TYPES[cursor.take(1, STAR_TYPES.len() as u64) as usize];
    let rolled_planets = cursor.take(1, MAX_PLANETS);
    let hazard_roll = cursor.take(2, 101);
    let prefix = system_prefixes()[cursor.take(1, system_prefixes().len() as u64) as usize];
    let suffix = system_suffixes()[cursor.take(1, system_suffixes().len() as u64) as usize];
    let designation = cursor.take(2, 1_000);
    let name = format!("{prefix} {suffix}-{designation:03}");

    let planet_count = reserved
        .and_then(|entry| entry.planet_count)
        .unwrap_or(rolled_planets);
    let planets: Vec<GeneratedPlanet> = (0..planet_count)
        .map(|index| {
            let overrides = match reserved {
                Some(entry) if index == 0 => entry.first_planet_overrides(),
                _ => PlanetOverrides::default(),
            };
            generate_planet(&seed, index, &name, &overrides)
        })
        .collect();

    let distance_term = (coordinate.reach() / 400).min(25);
    let mut hazard = (hazard_roll * 3 / 5 + star.hazard_bias as u64 + distance_term).min(100) as u8;
    if let Some(entry) = reserved {
        hazard = hazard.min(entry.hazard_ceiling);
    }

    trace!(%coordinate, star = star.name, planet_count, hazard, "generated system");

    Ok(GeneratedSystem {
        coordinate,
        base_prices: base_prices(&seed, &planets),
        resource_distribution: summarize(&planets),
        name,
        star_type: star.name.to_string(),
        planet_count: planet_count as u32,
        planets,
        hazard_level: hazard,
        reserved: reserved.is_some(),
    })
}

pub(crate) fn summarize(planets: &[GeneratedPlanet]) -> ResourceDistribution {
    let mut mineral_totals: BTreeMap<String, u64> = BTreeMap::new();
    let mut total_deposits = 0;
    let mut exotic_deposits = 0;
    for deposit in planets.iter().flat_map(|planet| planet.minerals.iter()) {
        total_deposits += 1;
        if deposit.is_exotic() {
            exotic_deposits += 1;
        }
        *mineral_totals.entry(deposit.mineral_name.clone()).or_default() += deposit.quantity as u64;
    }

    let mut dominant_mineral: Option<(&String, u64)> = None;
    for (name, total) in &mineral_totals {
        if dominant_mineral.map_or(true, |(_, best)| *total > best) {
            dominant_mineral = Some((name, *total));
        }
    }

    ResourceDistribution {
        total_deposits,
        exotic_deposits,
        dominant_mineral: dominant_mineral.map(|(name, _)| name.clone()),
        mineral_totals,
        habitable_planets: planets
            .iter()
            .filter(|planet| planet.planet_type.habitable())
            .count() as u32,
    }
}

/// One price per mineral present: base price scaled by scarcity within the
/// system, with a seeded swing of up to 15% either way.
pub(crate) fn base_prices(seed: &Seed, planets: &[GeneratedPlanet]) -> BTreeMap<String, u32> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for deposit in planets.iter().flat_map(|planet| planet.minerals.iter()) {
        *totals.entry(deposit.mineral_name.as_str()).or_default() += deposit.quantity as u64;
    }

    let mut prices = BTreeMap::new();
    for (name, total) in totals {
        let Some(mineral) = mineral_by_name(name) else {
            continue;
        };
        let scarcity = (1_500.0 / (total as f64 + 500.0)).clamp(0.5, 2.0);
        let swing_seed = Seed::derive(&[seed.into(), "price".into(), name.into()]);
        let swing = 0.85 + 0.30 * swing_seed.cursor().unit();
        let price = (mineral.base_price as f64 * scarcity * swing).round().max(1.0) as u32;
        prices.insert(name.to_string(), price);
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_coordinate_same_system() {
        let a = generate_system("abc", 42, -7, 300).unwrap();
        let b = generate_system("abc", 42, -7, 300).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn base_seed_changes_the_galaxy() {
        let a = generate_system("abc", 42, -7, 300).unwrap();
        let b = generate_system("xyz", 42, -7, 300).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn planet_count_matches_planets() {
        for x in 20..60 {
            let system = generate_system("counts", x, 0, 0).unwrap();
            assert_eq!(system.planet_count as usize, system.planets.len());
            assert!(system.planet_count < MAX_PLANETS as u32);
            assert!(system.hazard_level <= 100);
        }
    }

    #[test]
    fn empty_systems_are_well_formed() {
        let empty = (20..600)
            .map(|x| generate_system("empty", x, 3, -3).unwrap())
            .find(|system| system.planet_count == 0)
            .expect("one system in twelve rolls no planets");
        assert!(empty.planets.is_empty());
        assert!(empty.base_prices.is_empty());
        let distribution = &empty.resource_distribution;
        assert_eq!(distribution.total_deposits, 0);
        assert_eq!(distribution.exotic_deposits, 0);
        assert_eq!(distribution.habitable_planets, 0);
        assert!(distribution.mineral_totals.is_empty());
        assert_eq!(distribution.dominant_mineral, None);
        assert!(!empty.name.is_empty());
        assert!(empty.hazard_level <= 100);
    }

    #[test]
    fn rejects_coordinates_beyond_frontier() {
        let err = generate_system("abc", 0, 100_001, 0).unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidCoordinate { axis: 'y', value: 100_001, .. }
        ));
    }

    #[test]
    fn core_lattice_enforces_spacing() {
        let grid = GridConfig {
            spacing: 2,
            ..GridConfig::default()
        };
        assert!(Coordinate::new(2, 4, -6).validate(&grid).is_ok());
        assert!(Coordinate::new(3, 0, 0).validate(&grid).is_err());
        // Outside the core every integer is a valid position.
        assert!(Coordinate::new(11, 3, 0).validate(&grid).is_ok());
    }

    #[test]
    fn prices_cover_every_present_mineral() {
        let system = generate_system("prices", 500, 12, -40).unwrap();
        let present: Vec<&String> = system.resource_distribution.mineral_totals.keys().collect();
        let priced: Vec<&String> = system.base_prices.keys().collect();
        assert_eq!(present, priced);
        assert!(system.base_prices.values().all(|price| *price >= 1));
    }

    #[test]
    fn dominant_mineral_has_largest_total() {
        let system = generate_system("dominant", -900, 5, 5).unwrap();
        let distribution = &system.resource_distribution;
        if let Some(name) = &distribution.dominant_mineral {
            let best = distribution.mineral_totals[name];
            assert!(distribution.mineral_totals.values().all(|total| *total <= best));
        } else {
            assert!(distribution.mineral_totals.is_empty());
        }
    }
}

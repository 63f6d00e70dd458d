use serde::{Deserialize, Serialize};

use crate::seed::Seed;
use crate::tables::{roman_numeral, PlanetSize, PlanetType, PLANET_SIZES, PLANET_TYPES};

use super::mineral::{generate_deposits, guaranteed_deposit, Deposit};
use super::plant::generate_flora;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlanet {
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    pub size: PlanetSize,
    pub minerals: Vec<Deposit>,
    pub plants: Vec<String>,
}

/// Fixed traits a reserved system imposes on one of its planets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetOverrides {
    pub planet_type: Option<PlanetType>,
    pub guaranteed_minerals: &'static [&'static str],
}

pub fn generate_planet(
    system_seed: &Seed,
    index: u64,
    system_name: &str,
    overrides: &PlanetOverrides,
) -> GeneratedPlanet {
    let seed = system_seed.child("planet", index);
    let mut cursor = seed.cursor();

    let rolled_type = PLANET_TYPES[cursor.take(1, PLANET_TYPES.len() as u64) as usize];
    let size = PLANET_SIZES[cursor.take(1, PLANET_SIZES.len() as u64) as usize];
    let deposit_count = 1 + cursor.take(1, size.max_deposits());
    let planet_type = overrides.planet_type.unwrap_or(rolled_type);

    let mut minerals = generate_deposits(&seed, planet_type, deposit_count);
    for (slot, name) in overrides.guaranteed_minerals.iter().enumerate() {
        if !minerals.iter().any(|deposit| deposit.mineral_name == *name) {
            minerals.push(guaranteed_deposit(&seed, planet_type, name, slot as u64));
        }
    }

    GeneratedPlanet {
        name: format!("{system_name} {}", roman_numeral(index as u32 + 1)),
        planet_type,
        size,
        minerals,
        plants: generate_flora(&seed.child("flora", 0), planet_type),
    }
}

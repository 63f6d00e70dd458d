use serde::{Deserialize, Serialize};

use crate::seed::{pick_weighted, Seed, SeedCursor};
use crate::tables::{
    is_exotic, DepthCategory, Mineral, PlanetType, COMMON_MINERALS, DEPOSIT_QUANTITY_MAX,
    DEPOSIT_QUANTITY_MIN, DEPTH_CATEGORIES, EXOTIC_MINERALS, EXOTIC_ROLL_PERMILLE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub mineral_name: String,
    pub quantity: u32,
    pub purity: f64,
    pub depth_category: DepthCategory,
}

impl Deposit {
    pub fn is_exotic(&self) -> bool {
        is_exotic(&self.mineral_name)
    }
}

/// Rolls `count` deposits. Exotic draws are uniform over the exotic table;
/// common draws are weighted by the biome's affinity for each mineral class.
pub fn generate_deposits(planet_seed: &Seed, planet_type: PlanetType, count: u64) -> Vec<Deposit> {
    let common = common_weights(planet_type);
    let common_total: u64 = common.iter().map(|(_, weight)| *weight as u64).sum();
    (0..count)
        .map(|index| {
            let seed = planet_seed.child("deposit", index);
            let mut cursor = seed.cursor();
            let exotic = cursor.take(2, 1_000) < EXOTIC_ROLL_PERMILLE;
            let mineral = if exotic {
                &EXOTIC_MINERALS[cursor.take(2, EXOTIC_MINERALS.len() as u64) as usize]
            } else {
                let roll = cursor.take(2, common_total.max(1));
                pick_weighted(roll, &common).unwrap_or(&COMMON_MINERALS[0])
            };
            roll_deposit(&mut cursor, mineral.name, planet_type)
        })
        .collect()
}

fn common_weights(planet_type: PlanetType) -> Vec<(&'static Mineral, u32)> {
    COMMON_MINERALS
        .iter()
        .map(|mineral| (mineral, planet_type.mineral_affinity(mineral.class)))
        .collect()
}

/// Deposit of a fixed mineral, used where a reserved planet must carry it.
pub(crate) fn guaranteed_deposit(
    planet_seed: &Seed,
    planet_type: PlanetType,
    name: &str,
    slot: u64,
) -> Deposit {
    let seed = planet_seed.child("guaranteed", slot);
    let mut cursor = seed.cursor();
    roll_deposit(&mut cursor, name, planet_type)
}

fn roll_deposit(
    cursor: &mut SeedCursor<'_>,
    name: &str,
    planet_type: PlanetType,
) -> Deposit {
    let base = cursor.range(2, DEPOSIT_QUANTITY_MIN, DEPOSIT_QUANTITY_MAX);
    let quantity = ((base as f64 * planet_type.deposit_multiplier()) as u32).max(1);
    let purity = (10 + cursor.take(1, 91)) as f64 / 100.0;
    let depth_category = DEPTH_CATEGORIES[cursor.take(1, DEPTH_CATEGORIES.len() as u64) as usize];
    Deposit {
        mineral_name: name.to_string(),
        quantity,
        purity,
        depth_category,
    }
}

use serde::{Deserialize, Serialize};

use crate::building::tier_cost;
use crate::error::{check_tier, GenResult};
use crate::seed::Seed;
use crate::tables::{
    HullClass, Race, FIREPOWER_EXPONENT, INPUT_EXPONENT, OUTPUT_EXPONENT, SHIP_NAME_WORDS,
    STORAGE_EXPONENT,
};

const SPEED_EXPONENT: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedShip {
    pub race: Race,
    pub hull_class: HullClass,
    pub tier: u8,
    pub name: String,
    pub cargo_capacity: u32,
    pub hull_points: u32,
    pub speed: f64,
    pub crew_capacity: u32,
    pub firepower: u32,
    pub efficiency: f64,
    pub cost: u64,
}

pub fn generate_ship(
    race: Race,
    hull_class: HullClass,
    tier: u8,
    location_seed: u64,
) -> GenResult<GeneratedShip> {
    let tier = check_tier("tier", tier)?;
    let seed = Seed::derive(&[
        "ship".into(),
        race.label().into(),
        hull_class.profile().label.into(),
        tier.into(),
        location_seed.into(),
    ]);
    let mut cursor = seed.cursor();
    let efficiency = 0.9 + 0.2 * cursor.unit();
    let word = SHIP_NAME_WORDS[cursor.take(1, SHIP_NAME_WORDS.len() as u64) as usize];
    let serial = cursor.take(2, 10_000);

    let hull = hull_class.profile();
    let modifiers = race.profile().ship;
    let t = tier as f64;

    Ok(GeneratedShip {
        race,
        hull_class,
        tier,
        name: format!("{word} {}-{serial:04}", &race.label()[..1]),
        cargo_capacity: (hull.cargo * t.powf(STORAGE_EXPONENT) * modifiers.cargo * efficiency)
            .round() as u32,
        hull_points: (hull.hull_points * t.powf(OUTPUT_EXPONENT) * modifiers.hull).round() as u32,
        speed: ((hull.speed * t.powf(SPEED_EXPONENT) * modifiers.speed) * 100.0).round() / 100.0,
        crew_capacity: (hull.crew * t.powf(INPUT_EXPONENT)).round() as u32,
        firepower: (hull.firepower * t.powf(FIREPOWER_EXPONENT) * modifiers.firepower * efficiency)
            .round() as u32,
        efficiency,
        cost: tier_cost(hull.base_cost, tier),
    })
}

pub fn generate_ship_named(
    race: &str,
    hull_class: &str,
    tier: u8,
    location_seed: u64,
) -> GenResult<GeneratedShip> {
    generate_ship(race.parse()?, hull_class.parse()?, tier, location_seed)
}

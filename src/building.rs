//! Tier-scaled buildings.
//!
//! Base figures grow along a power-law curve per attribute class: inputs
//! sub-linearly, outputs, storage and firepower super-linearly. Cost grows
//! by a flat 1.8x per tier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{check_tier, GenResult};
use crate::seed::{pick_weighted, Seed};
use crate::tables::{
    roman_numeral, BuildingArchetype, BuildingFunction, Race, BUILDING_ARCHETYPES, COST_GROWTH,
    FIREPOWER_EXPONENT, GENERIC_ARCHETYPE_WEIGHT, INPUT_EXPONENT, OUTPUT_EXPONENT,
    POPULATION_EXPONENT, SPECIAL_ARCHETYPE_WEIGHT, STORAGE_EXPONENT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingAttributes {
    pub inputs: BTreeMap<String, u32>,
    pub outputs: BTreeMap<String, u32>,
    pub storage: u32,
    pub firepower: u32,
    pub population_support: u32,
    pub income: u32,
    pub corruption: u32,
    pub durability: u32,
    pub pollution: u32,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBuilding {
    pub race: Race,
    pub function: BuildingFunction,
    pub building_type: String,
    pub tier: u8,
    pub name: String,
    pub special: bool,
    pub attributes: BuildingAttributes,
    pub cost: u64,
}

/// `Ok(None)` when no archetype serves this race and function.
pub fn generate_building(
    race: Race,
    function: BuildingFunction,
    tier: u8,
    location_seed: u64,
) -> GenResult<Option<GeneratedBuilding>> {
    let tier = check_tier("tier", tier)?;
    let candidates: Vec<(usize, u32)> = BUILDING_ARCHETYPES
        .iter()
        .enumerate()
        .filter(|(_, archetype)| archetype.function == function)
        .filter_map(|(index, archetype)| match archetype.race {
            None => Some((index, GENERIC_ARCHETYPE_WEIGHT)),
            Some(owner) if owner == race => Some((index, SPECIAL_ARCHETYPE_WEIGHT)),
            Some(_) => None,
        })
        .collect();
    let total_weight: u32 = candidates.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0 {
        return Ok(None);
    }

    let seed = Seed::derive(&[
        "building".into(),
        race.label().into(),
        function.name().into(),
        tier.into(),
        location_seed.into(),
    ]);
    let mut cursor = seed.cursor();
    let roll = cursor.take(2, total_weight as u64);
    let Some(index) = pick_weighted(roll, &candidates) else {
        return Ok(None);
    };
    let archetype = &BUILDING_ARCHETYPES[index];
    let efficiency = 0.9 + 0.2 * cursor.unit();
    let prefixes = race.profile().building_prefixes;
    let prefix = prefixes[cursor.take(1, prefixes.len() as u64) as usize];

    Ok(Some(GeneratedBuilding {
        race,
        function,
        building_type: archetype.label.to_string(),
        tier,
        name: format!("{prefix} {} {}", archetype.label, roman_numeral(tier as u32)),
        special: archetype.race.is_some(),
        attributes: scale_attributes(archetype, race, tier, efficiency),
        cost: tier_cost(function.base_cost(), tier),
    }))
}

/// Parses race and function names before generating.
pub fn generate_building_named(
    race: &str,
    function: &str,
    tier: u8,
    location_seed: u64,
) -> GenResult<Option<GeneratedBuilding>> {
    generate_building(race.parse()?, function.parse()?, tier, location_seed)
}

pub(crate) fn tier_cost(base_cost: f64, tier: u8) -> u64 {
    (base_cost * COST_GROWTH.powi(tier as i32 - 1)).round() as u64
}

fn scale(base: f64, tier: u8, exponent: f64) -> f64 {
    base * (tier as f64).powf(exponent)
}

fn scale_attributes(
    archetype: &BuildingArchetype,
    race: Race,
    tier: u8,
    efficiency: f64,
) -> BuildingAttributes {
    let modifiers = race.profile().building;
    let flows = |entries: &[(&str, f64)], exponent: f64, factor: f64| {
        entries
            .iter()
            .map(|(resource, base)| {
                let amount = scale(*base, tier, exponent) * factor;
                (resource.to_string(), amount.round() as u32)
            })
            .collect::<BTreeMap<String, u32>>()
    };

    BuildingAttributes {
        inputs: flows(archetype.inputs, INPUT_EXPONENT, 1.0),
        outputs: flows(
            archetype.outputs,
            OUTPUT_EXPONENT,
            efficiency * modifiers.output,
        ),
        storage: scale(archetype.storage, tier, STORAGE_EXPONENT).round() as u32,
        firepower: (scale(archetype.firepower, tier, FIREPOWER_EXPONENT) * efficiency).round()
            as u32,
        population_support: (scale(archetype.population_support, tier, POPULATION_EXPONENT)
            * modifiers.population)
            .round() as u32,
        income: (scale(archetype.income, tier, OUTPUT_EXPONENT) * modifiers.income).round()
            as u32,
        corruption: (scale(archetype.corruption, tier, 1.0) * modifiers.corruption).round()
            as u32,
        durability: (scale(archetype.durability, tier, 1.0) * modifiers.durability).round()
            as u32,
        pollution: (scale(archetype.pollution, tier, INPUT_EXPONENT) * modifiers.pollution)
            .round() as u32,
        efficiency,
    }
}

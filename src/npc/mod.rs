//! Recruitable NPCs.
//!
//! Every NPC carries a hidden chaos factor. It weights the quirk polarity
//! and employment outcome tables and never leaves the crate in a
//! presentation projection: use [`GeneratedNpc::profile`] for display.

mod employment;
mod quirks;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_tier, GenResult};
use crate::seed::{pick_weighted, Seed, SeedCursor};
use crate::tables::{
    NpcClass, Race, Rarity, MAX_JOBS, MAX_QUIRKS, MIN_JOBS, NPC_CLASSES, RACES, RARITY_WEIGHTS,
    SPECIALTY_MAX, SPECIALTY_MIN, WAGE_BASE, WAGE_GROWTH,
};

pub use employment::{narrate_history, JobRecord};
pub use quirks::roll_quirks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialties {
    pub piloting: u8,
    pub engineering: u8,
    pub combat: u8,
    pub barter: u8,
    pub science: u8,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNpc {
    pub race: Race,
    pub class: NpcClass,
    pub name: String,
    pub level_tier: u8,
    pub skill: u8,
    pub rarity: Rarity,
    pub(crate) chaos_factor: u8,
    pub quirks: Vec<String>,
    pub specialties: Specialties,
    pub employment_history: Vec<JobRecord>,
    pub base_wage: u32,
}

/// What a presentation layer may see of an NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    pub race: Race,
    pub class: NpcClass,
    pub name: String,
    pub level_tier: u8,
    pub skill: u8,
    pub rarity: Rarity,
    pub quirks: Vec<String>,
    pub specialties: Specialties,
    pub employment_history: Vec<JobRecord>,
    pub base_wage: u32,
}

impl GeneratedNpc {
    pub fn profile(&self) -> NpcProfile {
        NpcProfile {
            race: self.race,
            class: self.class,
            name: self.name.clone(),
            level_tier: self.level_tier,
            skill: self.skill,
            rarity: self.rarity,
            quirks: self.quirks.clone(),
            specialties: self.specialties,
            employment_history: self.employment_history.clone(),
            base_wage: self.base_wage,
        }
    }
}

impl fmt::Debug for GeneratedNpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedNpc")
            .field("race", &self.race)
            .field("class", &self.class)
            .field("name", &self.name)
            .field("level_tier", &self.level_tier)
            .field("skill", &self.skill)
            .field("rarity", &self.rarity)
            .field("chaos_factor", &"<hidden>")
            .field("quirks", &self.quirks)
            .field("specialties", &self.specialties)
            .field("employment_history", &self.employment_history)
            .field("base_wage", &self.base_wage)
            .finish()
    }
}

pub fn generate_npc(
    level_tier: u8,
    rotation_timestamp: i64,
    slot_index: u32,
) -> GenResult<GeneratedNpc> {
    build_npc(level_tier, rotation_timestamp, slot_index, None)
}

/// Same key derivation as [`generate_npc`] with the class pinned, as the
/// recruiter pool fills per-class batches.
pub fn generate_npc_of_class(
    level_tier: u8,
    rotation_timestamp: i64,
    slot_index: u32,
    class: NpcClass,
) -> GenResult<GeneratedNpc> {
    build_npc(level_tier, rotation_timestamp, slot_index, Some(class))
}

pub fn npc_seed(level_tier: u8, rotation_timestamp: i64, slot_index: u32) -> Seed {
    Seed::derive(&[
        "npc".into(),
        level_tier.into(),
        rotation_timestamp.into(),
        slot_index.into(),
    ])
}

pub fn base_wage(skill: u8, rarity: Rarity) -> u32 {
    (WAGE_BASE * WAGE_GROWTH.powi(skill as i32) * rarity.wage_multiplier()).round() as u32
}

fn build_npc(
    level_tier: u8,
    rotation_timestamp: i64,
    slot_index: u32,
    class_override: Option<NpcClass>,
) -> GenResult<GeneratedNpc> {
    let level_tier = check_tier("level_tier", level_tier)?;
    let seed = npc_seed(level_tier, rotation_timestamp, slot_index);
    let mut cursor = seed.cursor();

    let race = RACES[cursor.take(1, RACES.len() as u64) as usize];
    let rolled_class = NPC_CLASSES[cursor.take(1, NPC_CLASSES.len() as u64) as usize];
    let class = class_override.unwrap_or(rolled_class);
    let rarity = pick_weighted(cursor.percent(), &RARITY_WEIGHTS).unwrap_or(Rarity::Common);
    let skill_range = rarity.skill_range();
    let skill = cursor.range(2, *skill_range.start(), *skill_range.end()) as u8;
    let chaos_factor = cursor.take(1, 101) as u8;
    let quirk_count = cursor.take(1, MAX_QUIRKS + 1);

    let profile = race.profile();
    let given = profile.given_names[cursor.take(1, profile.given_names.len() as u64) as usize];
    let family = profile.family_names[cursor.take(1, profile.family_names.len() as u64) as usize];
    let specialties = roll_specialties(&mut cursor, race);
    let job_count = cursor.range(1, MIN_JOBS, MAX_JOBS);

    Ok(GeneratedNpc {
        race,
        class,
        name: format!("{given} {family}"),
        level_tier,
        skill,
        rarity,
        chaos_factor,
        quirks: roll_quirks(&seed, quirk_count, chaos_factor, race),
        specialties,
        employment_history: narrate_history(&seed, job_count, chaos_factor),
        base_wage: base_wage(skill, rarity),
    })
}

fn roll_specialties(cursor: &mut SeedCursor<'_>, race: Race) -> Specialties {
    let bonus = race.profile().specialty_bonus;
    let mut roll = || cursor.range(1, SPECIALTY_MIN, SPECIALTY_MAX) as u8;
    Specialties {
        piloting: roll() + bonus.piloting,
        engineering: roll() + bonus.engineering,
        combat: roll() + bonus.combat,
        barter: roll() + bonus.barter,
        science: roll() + bonus.science,
    }
}

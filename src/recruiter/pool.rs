use std::fmt;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PoolSettings;
use crate::error::{check_tier, GenError, GenResult};
use crate::npc::{generate_npc_of_class, GeneratedNpc};
use crate::seed::{extract, Seed};
use crate::tables::NPC_CLASSES;

/// Identity of a pool entry, and of the recruit hired from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolEntryKey {
    pub level_tier: u8,
    pub rotation_timestamp: i64,
    pub slot_index: u32,
}

impl fmt::Display for PoolEntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tier{}/{}/{}",
            self.level_tier, self.rotation_timestamp, self.slot_index
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterPoolEntry {
    pub key: PoolEntryKey,
    pub npc: GeneratedNpc,
    pub available_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl RecruiterPoolEntry {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.available_at <= now && now < self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationWindow {
    pub level_tier: u8,
    pub interval_minutes: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RotationWindow {
    pub fn timestamp(&self) -> i64 {
        self.start.timestamp()
    }
}

/// Per-tier rotation interval in minutes, fixed for the life of the world.
pub fn rotation_interval(settings: &PoolSettings, level_tier: u8) -> GenResult<u32> {
    settings
        .validate()
        .map_err(|err| GenError::InvalidPoolSettings(err.to_string()))?;
    let level_tier = check_tier("level_tier", level_tier)?;
    let seed = Seed::derive(&["rotation".into(), level_tier.into()]);
    let span = settings
        .rotation_max_minutes
        .saturating_sub(settings.rotation_min_minutes) as u64
        + 1;
    Ok(settings.rotation_min_minutes + extract(&seed, 0, 2, span) as u32)
}

/// The epoch-aligned window containing `now`.
pub fn rotation_window(
    settings: &PoolSettings,
    level_tier: u8,
    now: DateTime<Utc>,
) -> GenResult<RotationWindow> {
    let interval_minutes = rotation_interval(settings, level_tier)?;
    let interval = Duration::minutes(interval_minutes as i64);
    let offset = now.timestamp().rem_euclid(interval.num_seconds());
    let start = now.trunc_subsecs(0) - Duration::seconds(offset);
    Ok(RotationWindow {
        level_tier,
        interval_minutes,
        start,
        end: start + interval,
    })
}

/// Generates the shared pool for the window containing `now`. Calling it
/// again anywhere inside the same window yields the same entries.
pub fn rotate_recruiter_pool(
    settings: &PoolSettings,
    level_tier: u8,
    now: DateTime<Utc>,
    active_players: u32,
) -> GenResult<Vec<RecruiterPoolEntry>> {
    let window = rotation_window(settings, level_tier, now)?;
    let batch = settings.batch_size(active_players).max(1);
    let total = batch
        .checked_mul(NPC_CLASSES.len() as u32)
        .ok_or(GenError::PoolTooLarge { per_class: batch })?;
    let timestamp = window.timestamp();

    let entries = (0..total)
        .into_par_iter()
        .map(|slot_index| {
            let class = NPC_CLASSES[(slot_index / batch) as usize];
            let npc = generate_npc_of_class(window.level_tier, timestamp, slot_index, class)?;
            Ok(RecruiterPoolEntry {
                key: PoolEntryKey {
                    level_tier: window.level_tier,
                    rotation_timestamp: timestamp,
                    slot_index,
                },
                npc,
                available_at: window.start,
                expires_at: window.end,
            })
        })
        .collect::<GenResult<Vec<_>>>()?;

    debug!(
        level_tier,
        window_start = %window.start,
        interval_minutes = window.interval_minutes,
        entries = entries.len(),
        "rotated recruiter pool"
    );
    Ok(entries)
}

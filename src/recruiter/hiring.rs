use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::npc::{GeneratedNpc, NpcProfile};

use super::pool::{PoolEntryKey, RecruiterPoolEntry};

/// Frozen copy of a pool entry's NPC, taken at hire time. Nothing can
/// change it afterwards, and the source entry expiring does not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiredRecruit {
    source: PoolEntryKey,
    npc: GeneratedNpc,
    hired_at: DateTime<Utc>,
}

impl HiredRecruit {
    pub fn id(&self) -> PoolEntryKey {
        self.source
    }

    pub fn npc(&self) -> &GeneratedNpc {
        &self.npc
    }

    pub fn profile(&self) -> NpcProfile {
        self.npc.profile()
    }

    pub fn hired_at(&self) -> DateTime<Utc> {
        self.hired_at
    }

    /// True when every generated field still equals the entry's.
    pub fn matches_source(&self, entry: &RecruiterPoolEntry) -> bool {
        self.source == entry.key && self.npc == entry.npc
    }
}

/// Copy-on-hire. `entry` is only read.
pub fn hire(entry: &RecruiterPoolEntry, hired_at: DateTime<Utc>) -> HiredRecruit {
    HiredRecruit {
        source: entry.key,
        npc: entry.npc.clone(),
        hired_at,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BuildingId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Assignable {
    Ship(ShipId),
    Building(BuildingId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringStatus {
    Active,
    Fired,
    Deceased,
    Retired,
    Striking,
}

impl HiringStatus {
    pub fn is_terminal(self) -> bool {
        self != HiringStatus::Active
    }

    pub fn can_become(self, next: HiringStatus) -> bool {
        self == HiringStatus::Active && next.is_terminal()
    }
}

impl fmt::Display for HiringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HiringStatus::Active => "active",
            HiringStatus::Fired => "fired",
            HiringStatus::Deceased => "deceased",
            HiringStatus::Retired => "retired",
            HiringStatus::Striking => "striking",
        };
        f.write_str(label)
    }
}

/// The mutable side of an employment: where the recruit works, under what
/// name, for what wage and whether it is still going.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hiring {
    pub recruit: PoolEntryKey,
    pub assignable: Assignable,
    pub custom_name: Option<String>,
    pub wage: u32,
    pub status: HiringStatus,
    pub hired_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Hiring {
    pub fn new(recruit: &HiredRecruit, assignable: Assignable, at: DateTime<Utc>) -> Self {
        Self {
            recruit: recruit.id(),
            assignable,
            custom_name: None,
            wage: recruit.npc().base_wage,
            status: HiringStatus::Active,
            hired_at: at,
            updated_at: at,
            ended_at: None,
        }
    }

    pub fn display_name<'a>(&'a self, recruit: &'a HiredRecruit) -> &'a str {
        self.custom_name
            .as_deref()
            .unwrap_or(recruit.npc().name.as_str())
    }

    pub fn rename(&mut self, name: impl Into<String>, at: DateTime<Utc>) -> GenResult<()> {
        self.ensure_active()?;
        self.custom_name = Some(name.into());
        self.updated_at = at;
        Ok(())
    }

    pub fn set_wage(&mut self, wage: u32, at: DateTime<Utc>) -> GenResult<()> {
        self.ensure_active()?;
        self.wage = wage;
        self.updated_at = at;
        Ok(())
    }

    pub fn reassign(&mut self, assignable: Assignable, at: DateTime<Utc>) -> GenResult<()> {
        self.ensure_active()?;
        self.assignable = assignable;
        self.updated_at = at;
        Ok(())
    }

    pub fn transition(&mut self, next: HiringStatus, at: DateTime<Utc>) -> GenResult<()> {
        if !self.status.can_become(next) {
            return Err(GenError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.updated_at = at;
        self.ended_at = Some(at);
        Ok(())
    }

    fn ensure_active(&self) -> GenResult<()> {
        if self.status == HiringStatus::Active {
            Ok(())
        } else {
            Err(GenError::HiringClosed {
                status: self.status.to_string(),
            })
        }
    }
}

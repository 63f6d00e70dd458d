//! The shared recruiter pool.
//!
//! Every player at a level tier sees the same entries during a rotation
//! window. Hiring takes an independent copy, so later rotations and
//! expiry never reach an NPC someone already employs.

mod hiring;
mod pool;
mod repository;
mod service;

use thiserror::Error;

use crate::error::GenError;

pub use hiring::{hire, Assignable, BuildingId, HiredRecruit, Hiring, HiringStatus, ShipId};
pub use pool::{
    rotate_recruiter_pool, rotation_interval, rotation_window, PoolEntryKey, RecruiterPoolEntry,
    RotationWindow,
};
pub use repository::{InMemoryPoolRepository, PoolRepository};
pub use service::RecruiterService;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("pool entry {0} not found")]
    EntryNotFound(PoolEntryKey),
    #[error("pool entry {0} has expired")]
    EntryExpired(PoolEntryKey),
    #[error("pool entry {0} is not available yet")]
    NotYetAvailable(PoolEntryKey),
    #[error("pool entry {0} was already hired")]
    AlreadyHired(PoolEntryKey),
    #[error("repository failure: {0}")]
    Repository(String),
    #[error(transparent)]
    Generation(#[from] GenError),
}

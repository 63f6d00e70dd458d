use thiserror::Error;

/// Caller contract violations. None of these are transient: the engine
/// never clamps, defaults or retries around them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("invalid coordinate {axis}={value}: {reason}")]
    InvalidCoordinate {
        axis: char,
        value: i64,
        reason: String,
    },
    #[error("{argument} {value} outside {min}..={max}")]
    TierOutOfRange {
        argument: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },
    #[error("unknown race '{0}'")]
    UnknownRace(String),
    #[error("unknown building function '{0}'")]
    UnknownBuildingFunction(String),
    #[error("unknown hull class '{0}'")]
    UnknownHullClass(String),
    #[error("unknown npc class '{0}'")]
    UnknownNpcClass(String),
    #[error("hiring cannot move from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("hiring is {status}; only active hirings can be changed")]
    HiringClosed { status: String },
    #[error("invalid recruiter pool settings: {0}")]
    InvalidPoolSettings(String),
    #[error("a pool of {per_class} entries per class overflows the slot index")]
    PoolTooLarge { per_class: u32 },
}

pub type GenResult<T> = Result<T, GenError>;

pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 5;

/// Validates a 1..=5 tier argument.
pub fn check_tier(argument: &'static str, value: u8) -> GenResult<u8> {
    if (MIN_TIER..=MAX_TIER).contains(&value) {
        Ok(value)
    } else {
        Err(GenError::TierOutOfRange {
            argument,
            value: value as i64,
            min: MIN_TIER,
            max: MAX_TIER,
        })
    }
}

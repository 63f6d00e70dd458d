pub mod building;
pub mod config;
pub mod error;
pub mod galaxy;
pub mod npc;
pub mod recruiter;
pub mod seed;
pub mod ship;
pub mod tables;

pub use building::{generate_building, GeneratedBuilding};
pub use config::{ConfigLoader, EngineConfig};
pub use error::{GenError, GenResult};
pub use galaxy::{generate_system, Coordinate, GeneratedSystem};
pub use npc::{generate_npc, GeneratedNpc, NpcProfile};
pub use recruiter::{hire, rotate_recruiter_pool, HiredRecruit, RecruiterPoolEntry};
pub use seed::{extract, Seed};
pub use ship::{generate_ship, GeneratedShip};

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use starseed::{
    building::generate_building_named,
    config::{ConfigLoader, EngineConfig, GridConfig},
    galaxy::{generate_system_on, Coordinate, GeneratedSystem},
    npc::{generate_npc, NpcProfile},
    recruiter::{InMemoryPoolRepository, PoolEntryKey, RecruiterService},
    ship::generate_ship_named,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Inspect deterministic starseed content")]
struct Cli {
    /// Path to the engine YAML file (built-in defaults when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the star system at a coordinate
    System {
        #[arg(allow_hyphen_values = true)]
        x: i64,
        #[arg(allow_hyphen_values = true)]
        y: i64,
        #[arg(allow_hyphen_values = true)]
        z: i64,
    },
    /// Generate a building
    Building {
        race: String,
        function: String,
        tier: u8,
        location: u64,
    },
    /// Generate a ship
    Ship {
        race: String,
        hull: String,
        tier: u8,
        location: u64,
    },
    /// Generate one NPC and print its public profile
    Npc {
        tier: u8,
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,
        slot: u32,
    },
    /// Show the recruiter pool for a level tier
    Pool {
        tier: u8,
        /// Active players at the tier
        #[arg(long, default_value_t = 0)]
        players: u32,
        /// Point in time to inspect (defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Sample random coordinates and summarize what they hold
    Survey {
        #[arg(long, default_value_t = 1_000)]
        count: usize,
        #[arg(long, default_value_t = 7)]
        rng_seed: u64,
        /// Half-width of the sampled cube
        #[arg(long, default_value_t = 1_000)]
        radius: i64,
    },
}

#[derive(Debug, Serialize)]
struct PoolListing {
    key: PoolEntryKey,
    available_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    npc: NpcProfile,
}

#[derive(Debug, Default, Serialize)]
struct SurveyReport {
    systems: usize,
    mean_hazard: f64,
    mean_planets: f64,
    total_deposits: u64,
    exotic_deposits: u64,
    habitable_planets: u64,
    star_types: BTreeMap<String, usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => EngineConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::System { x, y, z } => {
            let system =
                generate_system_on(&config.grid, &config.base_seed, Coordinate::new(x, y, z))?;
            print_json(&system)
        }
        Command::Building {
            race,
            function,
            tier,
            location,
        } => {
            let building = generate_building_named(&race, &function, tier, location)?
                .ok_or_else(|| anyhow!("no {function} archetype is available to {race}"))?;
            print_json(&building)
        }
        Command::Ship {
            race,
            hull,
            tier,
            location,
        } => print_json(&generate_ship_named(&race, &hull, tier, location)?),
        Command::Npc {
            tier,
            timestamp,
            slot,
        } => print_json(&generate_npc(tier, timestamp, slot)?.profile()),
        Command::Pool { tier, players, at } => {
            let now = at.unwrap_or_else(Utc::now);
            let service = RecruiterService::new(InMemoryPoolRepository::new(), config.recruiter);
            let listing: Vec<PoolListing> = service
                .current_pool(tier, now, players)?
                .into_iter()
                .map(|entry| PoolListing {
                    key: entry.key,
                    available_at: entry.available_at,
                    expires_at: entry.expires_at,
                    npc: entry.npc.profile(),
                })
                .collect();
            print_json(&listing)
        }
        Command::Survey {
            count,
            rng_seed,
            radius,
        } => {
            let report = survey(&config, count, rng_seed, radius)?;
            print_json(&report)
        }
    }
}

fn survey(config: &EngineConfig, count: usize, rng_seed: u64, radius: i64) -> Result<SurveyReport> {
    let radius = radius.clamp(0, config.grid.frontier_limit);
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let coordinates: Vec<Coordinate> = (0..count)
        .map(|_| {
            let mut axis = || snap(&config.grid, rng.gen_range(-radius..=radius));
            Coordinate::new(axis(), axis(), axis())
        })
        .collect();

    let systems = coordinates
        .par_iter()
        .map(|coordinate| generate_system_on(&config.grid, &config.base_seed, *coordinate))
        .collect::<Result<Vec<GeneratedSystem>, _>>()
        .context("survey hit an invalid coordinate")?;

    let mut report = SurveyReport {
        systems: systems.len(),
        ..SurveyReport::default()
    };
    for system in &systems {
        *report.star_types.entry(system.star_type.clone()).or_default() += 1;
        report.mean_hazard += system.hazard_level as f64;
        report.mean_planets += system.planet_count as f64;
        report.total_deposits += system.resource_distribution.total_deposits as u64;
        report.exotic_deposits += system.resource_distribution.exotic_deposits as u64;
        report.habitable_planets += system.resource_distribution.habitable_planets as u64;
    }
    if !systems.is_empty() {
        report.mean_hazard /= systems.len() as f64;
        report.mean_planets /= systems.len() as f64;
    }
    info!(
        systems = report.systems,
        exotic = report.exotic_deposits,
        "survey complete"
    );
    Ok(report)
}

/// Pulls a sampled axis onto the core lattice when it falls inside the core.
fn snap(grid: &GridConfig, value: i64) -> i64 {
    if value.abs() <= grid.core_radius {
        value - value % grid.spacing
    } else {
        value
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

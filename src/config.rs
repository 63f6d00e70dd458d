use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_base_seed() -> String {
    "starseed".to_string()
}

fn default_spacing() -> i64 {
    1
}

fn default_core_radius() -> i64 {
    10
}

fn default_frontier_limit() -> i64 {
    100_000
}

fn default_batch_ratio() -> f64 {
    0.3
}

fn default_min_batch() -> u32 {
    10
}

fn default_rotation_min_minutes() -> u32 {
    30
}

fn default_rotation_max_minutes() -> u32 {
    90
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_base_seed")]
    pub base_seed: String,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub recruiter: PoolSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_spacing")]
    pub spacing: i64,
    #[serde(default = "default_core_radius")]
    pub core_radius: i64,
    #[serde(default = "default_frontier_limit")]
    pub frontier_limit: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolSettings {
    #[serde(default = "default_batch_ratio")]
    pub batch_ratio: f64,
    #[serde(default = "default_min_batch")]
    pub min_batch: u32,
    #[serde(default = "default_rotation_min_minutes")]
    pub rotation_min_minutes: u32,
    #[serde(default = "default_rotation_max_minutes")]
    pub rotation_max_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_seed: default_base_seed(),
            grid: GridConfig::default(),
            recruiter: PoolSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            core_radius: default_core_radius(),
            frontier_limit: default_frontier_limit(),
        }
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            batch_ratio: default_batch_ratio(),
            min_batch: default_min_batch(),
            rotation_min_minutes: default_rotation_min_minutes(),
            rotation_max_minutes: default_rotation_max_minutes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid spacing must be positive, got {0}")]
    Spacing(i64),
    #[error("core radius {core_radius} must lie within 0..=frontier limit {frontier_limit}")]
    CoreRadius {
        core_radius: i64,
        frontier_limit: i64,
    },
    #[error("recruiter batch ratio must be a non-negative number, got {0}")]
    BatchRatio(f64),
    #[error("rotation window {min}..={max} minutes is empty or zero-length")]
    RotationWindow { min: u32, max: u32 },
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.recruiter.validate()
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spacing <= 0 {
            return Err(ConfigError::Spacing(self.spacing));
        }
        if self.core_radius < 0 || self.core_radius > self.frontier_limit {
            return Err(ConfigError::CoreRadius {
                core_radius: self.core_radius,
                frontier_limit: self.frontier_limit,
            });
        }
        Ok(())
    }
}

impl PoolSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.batch_ratio.is_finite() || self.batch_ratio < 0.0 {
            return Err(ConfigError::BatchRatio(self.batch_ratio));
        }
        if self.rotation_min_minutes == 0 || self.rotation_min_minutes > self.rotation_max_minutes {
            return Err(ConfigError::RotationWindow {
                min: self.rotation_min_minutes,
                max: self.rotation_max_minutes,
            });
        }
        Ok(())
    }

    /// Entries generated per class for one rotation.
    pub fn batch_size(&self, active_players: u32) -> u32 {
        let scaled = (active_players as f64 * self.batch_ratio).round() as u32;
        scaled.max(self.min_batch)
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<EngineConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: EngineConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.recruiter.batch_ratio, 0.3);
        assert_eq!(config.recruiter.min_batch, 10);
    }

    #[test]
    fn batch_size_has_a_floor() {
        let settings = PoolSettings::default();
        assert_eq!(settings.batch_size(0), 10);
        assert_eq!(settings.batch_size(33), 10);
        assert_eq!(settings.batch_size(40), 12);
        assert_eq!(settings.batch_size(100), 30);
    }

    #[test]
    fn rejects_inverted_rotation_window() {
        let settings = PoolSettings {
            rotation_min_minutes: 90,
            rotation_max_minutes: 30,
            ..PoolSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(ConfigError::RotationWindow { min: 90, max: 30 })
        );
    }

    #[test]
    fn rejects_core_beyond_frontier() {
        let grid = GridConfig {
            core_radius: 50,
            frontier_limit: 10,
            ..GridConfig::default()
        };
        assert!(grid.validate().is_err());
        let grid = GridConfig {
            spacing: 0,
            ..GridConfig::default()
        };
        assert_eq!(grid.validate(), Err(ConfigError::Spacing(0)));
    }
}

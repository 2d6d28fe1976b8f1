use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_SOLUTION_MOVES: usize = 40;
pub const MAX_SOLUTION_MOVES: usize = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub min_moves: usize,
    pub max_moves: usize,
    /// Whole-pipeline attempts before giving up.
    pub max_attempts: usize,
    pub builder: BuilderConfig,
    pub filler: FillerConfig,
    pub solver: SolverConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Inclusive lower bound of the maze size in templates.
    pub min_tiles: usize,
    /// Exclusive upper bound of the maze size in templates.
    pub max_tiles: usize,
    pub max_template_draws: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerConfig {
    /// One extra box per this many walkable cells.
    pub walkable_per_box: usize,
    pub batch_min: usize,
    pub batch_max: usize,
    pub max_batches: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub max_iterations: usize,
    pub open_set_cap: usize,
    pub open_set_trim_to: usize,
    pub push_weight: f64,
    pub wall_penalty: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            min_moves: MIN_SOLUTION_MOVES,
            max_moves: MAX_SOLUTION_MOVES,
            max_attempts: 10_000,
            builder: BuilderConfig::default(),
            filler: FillerConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            min_tiles: 2,
            max_tiles: 5,
            max_template_draws: 10_000,
        }
    }
}

impl Default for FillerConfig {
    fn default() -> Self {
        FillerConfig {
            walkable_per_box: 20,
            batch_min: 200,
            batch_max: 500,
            max_batches: 500,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_iterations: 100_000,
            open_set_cap: 10_000,
            open_set_trim_to: 5_000,
            push_weight: 2.0,
            wall_penalty: 0.5,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<GeneratorConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        GeneratorConfig::from_json_str(&json)
    }
}

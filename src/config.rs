//! Configuration loading for Marga

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Heading;
use crate::error::Result;

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MargaConfig {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl MargaConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Navigation controller settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Seed for junction exit selection. Unset = seeded from the OS.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Treat run-counter anomalies (start cell moved, counter went
    /// backwards, no remembered start) as a new maze (default: true)
    #[serde(default = "default_validate_route_memory")]
    pub validate_route_memory: bool,
}

fn default_validate_route_memory() -> bool {
    true
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            validate_route_memory: default_validate_route_memory(),
        }
    }
}

impl NavigatorConfig {
    /// Deterministic configuration for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Default::default()
        }
    }
}

/// Reference host settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of runs on the same maze (default: 2)
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Steps before a run is abandoned (default: 100000)
    #[serde(default = "default_max_steps_per_run")]
    pub max_steps_per_run: usize,

    /// Heading the agent faces at the start of every run (default: EAST)
    #[serde(default = "default_start_heading")]
    pub start_heading: Heading,
}

fn default_runs() -> u32 {
    2
}

fn default_max_steps_per_run() -> usize {
    100_000
}

fn default_start_heading() -> Heading {
    Heading::East
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            max_steps_per_run: default_max_steps_per_run(),
            start_heading: default_start_heading(),
        }
    }
}

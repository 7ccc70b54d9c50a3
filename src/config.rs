// In: src/config.rs

//! The single source of truth for arrayprep runtime configuration.
//!
//! This module defines the unified `PrepConfig` struct, which is created once at
//! the application boundary (from defaults, an optional JSON file and then
//! command-line overrides) and read by the driver. The algorithm engine itself
//! takes no configuration: everything it needs arrives as arguments.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PrepError;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// How the driver renders an algorithm's result.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// **Default:** the human-readable rendering of the original tool.
    #[default]
    Plain,

    /// One JSON document per result, for scripting.
    Json,
}

/// Settings for the pseudo-random value generator used by `--autogenerate`
/// and by commands that are given no values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Number of values generated when the command line does not say.
    pub size: usize,

    /// Inclusive upper bound of generated values.
    pub max_value: u32,

    /// Fixed seed for reproducible runs. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: default_generator_size(),
            max_value: default_generator_max(),
            seed: None,
        }
    }
}

fn default_generator_size() -> usize {
    100
}

fn default_generator_max() -> u32 {
    100
}

//==================================================================================
// II. The Unified PrepConfig
//==================================================================================

/// The single, unified configuration for one driver run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PrepConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputFormat,

    /// If true, the driver prints the elapsed wall time after each command.
    #[serde(default = "default_true")]
    pub report_timing: bool,

    /// If true, info-level logs (per-algorithm timings) are emitted.
    #[serde(default)]
    pub verbose: bool,
}

// Default implementation to make constructing the config easier.
impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            output: OutputFormat::default(),
            report_timing: true,
            verbose: false,
        }
    }
}

impl PrepConfig {
    /// Parses a config from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PrepError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

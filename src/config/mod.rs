//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display settings
    pub display: DisplayConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum alerts shown by the triage report
    pub limit: usize,
    /// Whether the triage report appends summary statistics
    pub show_stats: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            show_stats: true,
        }
    }
}

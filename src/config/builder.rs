//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            ConfigFile::load(path).ok()
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI display limit
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(l) = limit {
            self.config.display.limit = l;
        }
        self
    }

    /// Override the summary statistics toggle
    pub fn with_show_stats(mut self, show_stats: Option<bool>) -> Self {
        if let Some(s) = show_stats {
            self.config.display.show_stats = s;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.display.limit, 10);
        assert!(config.display.show_stats);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_limit(Some(3))
            .with_show_stats(Some(false))
            .build();

        assert_eq!(config.display.limit, 3);
        assert!(!config.display.show_stats);
    }

    #[test]
    fn test_builder_cli_wins_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[display]\nlimit = 20\n").unwrap();
        file.flush().unwrap();

        let config = ConfigBuilder::new()
            .with_file(file.path().to_str())
            .with_limit(Some(2))
            .build();

        assert_eq!(config.display.limit, 2);
    }

    #[test]
    fn test_builder_missing_file_keeps_defaults() {
        let config = ConfigBuilder::new()
            .with_file(Some("/nonexistent/alertctl.toml"))
            .build();
        assert_eq!(config.display.limit, 10);
    }
}

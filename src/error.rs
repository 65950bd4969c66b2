//! Unified error types for alertctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from alert batch ingestion
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading alert batches
#[derive(Error, Debug)]
pub enum IngestError {
    /// Alert file not found or unreadable
    #[error("Alert file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse the alert file as JSON
    #[error("Failed to parse alerts from '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// File parsed correctly but contained zero alerts
    #[error("No alerts found in file '{0}'")]
    EmptyBatch(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

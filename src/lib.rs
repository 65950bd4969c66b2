//! alertctl - alert triage library
//!
//! This library provides the core functionality for triaging batches of
//! monitoring alerts: priority scoring, time-window and field filtering,
//! grouping, and deterministic ordering.
//!
//! # Modules
//!
//! - [`alerts`]: Alert data model and JSON ingestion
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`triage`]: The triage engine (filter, score, sort, group)

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod triage;

#[cfg(test)]
pub mod fixtures;

pub use error::{AppError, Result};

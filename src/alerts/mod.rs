//! Alert data model and ingestion
//!
//! Defines the alert batch format produced by monitoring systems and the
//! JSON loading boundary that brings batches into the triage pipeline.

mod ingest;
mod types;

pub use ingest::load_alerts;
pub use types::{Alert, AlertBatch, Severity};

//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command:
//! ingest, filter, score, sort (or group), then print.

pub mod group;
pub mod show;
pub mod triage;

pub use group::run_group;
pub use show::run_show;
pub use triage::run_triage;

use crate::alerts::AlertBatch;
use crate::cli::args::FilterArgs;
use crate::triage::{filter, score, sort};

/// Apply the shared CLI filters to a batch, in flag order.
fn apply_filters(batch: &AlertBatch, filters: &FilterArgs) -> AlertBatch {
    let mut filtered = batch.clone();

    if let Some(minutes) = filters.last_minutes {
        log::debug!("Filtering alerts from the last {} minutes", minutes);
        filtered = filter::within_last_minutes(&filtered, minutes);
    }
    if let Some(severity) = &filters.severity {
        filtered = filter::by_severity(&filtered, severity);
    }
    if let Some(service) = &filters.service {
        filtered = filter::by_service(&filtered, service);
    }

    filtered
}

/// Filter, score, and sort a freshly ingested batch.
fn triage_pipeline(batch: &AlertBatch, filters: &FilterArgs) -> AlertBatch {
    let mut prepared = apply_filters(batch, filters);
    score::score_all(&mut prepared);
    sort::by_priority_descending(&mut prepared);
    prepared
}

//! Alert batch ingestion
//!
//! Loads alert batches from JSON files. This is the boundary between the
//! outside world and the triage engine; file and format problems surface
//! here so the engine itself stays total over in-memory data.

use crate::alerts::AlertBatch;
use crate::error::IngestError;

use std::fs;
use std::path::Path;

/// Load an alert batch from a JSON file.
///
/// The file must contain `{"alerts": [...]}` with at least one alert; a
/// batch with zero alerts is reported as an error at this boundary, matching
/// how missing and malformed files are handled.
pub fn load_alerts<P: AsRef<Path>>(path: P) -> Result<AlertBatch, IngestError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let contents =
        fs::read_to_string(path).map_err(|_| IngestError::FileNotFound(path_str.clone()))?;

    let batch: AlertBatch =
        serde_json::from_str(&contents).map_err(|source| IngestError::Parse {
            path: path_str.clone(),
            source,
        })?;

    if batch.is_empty() {
        return Err(IngestError::EmptyBatch(path_str));
    }

    log::debug!("Loaded {} alerts from {}", batch.len(), path.display());

    Ok(batch)
}

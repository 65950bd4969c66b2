//! Alert domain types
//!
//! Defines the alert record, the batch collection, and the severity
//! classification used by scoring and presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single monitoring alert.
///
/// Alerts are constructed once at ingestion and stay immutable except for
/// `priority`, which the scorer fills in once per scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert identifier (unique within a batch by convention, not enforced)
    pub id: String,
    /// When the alert fired (ISO-8601 instant in the source data)
    pub timestamp: DateTime<Utc>,
    /// Service that raised the alert
    pub service: String,
    /// Component within the service
    pub component: String,
    /// Severity label; `critical`, `warning`, and `info` are recognized,
    /// any other string is accepted and kept as-is
    pub severity: String,
    /// Metric that crossed its threshold
    pub metric: String,
    /// Observed metric value
    pub value: f64,
    /// Configured threshold for the metric
    pub threshold: f64,
    /// Free-text description
    pub description: String,
    /// Computed priority score; 0.0 until a scoring pass runs
    #[serde(default)]
    pub priority: f64,
}

/// An ordered batch of alerts.
///
/// Matches the ingestion shape `{"alerts": [...]}`. Order is insertion
/// order until a sorting or grouping pass rearranges it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertBatch {
    /// The alerts in this batch
    pub alerts: Vec<Alert>,
}

impl AlertBatch {
    /// Create a batch from a vector of alerts
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Number of alerts in the batch
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the batch contains no alerts
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Iterate over the alerts in order
    pub fn iter(&self) -> std::slice::Iter<'_, Alert> {
        self.alerts.iter()
    }
}

/// Recognized severity classes.
///
/// Derived from an alert's severity string on demand; the raw string stays
/// on the alert so unrecognized labels round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Action required now
    Critical,
    /// Attention recommended
    Warning,
    /// Informational
    Info,
}

impl Severity {
    /// All recognized classes, most urgent first
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    /// Classify a severity label, case-insensitively.
    ///
    /// Returns `None` for labels outside the recognized set; the scorer
    /// maps those to the `Info` weight.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Scoring weight for this class
    pub fn weight(&self) -> f64 {
        match self {
            Self::Critical => 10.0,
            Self::Warning => 5.0,
            Self::Info => 1.0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::Warning => write!(f, "Warning"),
            Self::Info => write!(f, "Info"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALERT_JSON: &str = r#"{
        "id": "ALT-001",
        "timestamp": "2024-04-28T10:26:19.250Z",
        "service": "payment-processor",
        "component": "api-gateway",
        "severity": "critical",
        "metric": "latency",
        "value": 2300,
        "threshold": -1000.5,
        "description": "API response time exceeded threshold"
    }"#;

    #[test]
    fn test_alert_deserialize_defaults_priority() {
        let alert: Alert = serde_json::from_str(ALERT_JSON).unwrap();
        assert_eq!(alert.id, "ALT-001");
        assert_eq!(alert.priority, 0.0);
        assert_eq!(alert.value, 2300.0);
        assert_eq!(alert.threshold, -1000.5);
    }

    #[test]
    fn test_alert_round_trip_preserves_fields() {
        let alert: Alert = serde_json::from_str(ALERT_JSON).unwrap();
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alert);
        // Fractional timestamps survive the trip
        assert_eq!(back.timestamp.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_batch_deserialize() {
        let json = format!(r#"{{"alerts": [{}]}}"#, ALERT_JSON);
        let batch: AlertBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(batch.len(), 1);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let batch: AlertBatch = serde_json::from_str(r#"{"alerts": []}"#).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_severity_from_label() {
        assert_eq!(Severity::from_label("critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_label("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_label("Warning"), Some(Severity::Warning));
        assert_eq!(Severity::from_label("info"), Some(Severity::Info));
        assert_eq!(Severity::from_label("fatal"), None);
        assert_eq!(Severity::from_label(""), None);
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::Critical.weight(), 10.0);
        assert_eq!(Severity::Warning.weight(), 5.0);
        assert_eq!(Severity::Info.weight(), 1.0);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::Info.to_string(), "Info");
    }
}

//! Alert grouping
//!
//! Partitions a batch into a string-keyed mapping over a closed set of
//! alert fields. String fields key by their literal value; numeric fields
//! key by their two-decimal rendering.

use crate::alerts::{Alert, AlertBatch};

use std::collections::BTreeMap;

/// The fields a batch can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Severity,
    Service,
    Component,
    Metric,
    Threshold,
    Value,
    Priority,
}

impl GroupField {
    /// All supported fields, in presentation order
    pub const ALL: [GroupField; 7] = [
        GroupField::Severity,
        GroupField::Service,
        GroupField::Component,
        GroupField::Metric,
        GroupField::Threshold,
        GroupField::Value,
        GroupField::Priority,
    ];

    /// Resolve a field name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "severity" => Some(Self::Severity),
            "service" => Some(Self::Service),
            "component" => Some(Self::Component),
            "metric" => Some(Self::Metric),
            "threshold" => Some(Self::Threshold),
            "value" => Some(Self::Value),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }

    /// Canonical lowercase name of this field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Service => "service",
            Self::Component => "component",
            Self::Metric => "metric",
            Self::Threshold => "threshold",
            Self::Value => "value",
            Self::Priority => "priority",
        }
    }

    /// Group key for an alert under this field
    pub fn key_for(&self, alert: &Alert) -> String {
        match self {
            Self::Severity => alert.severity.clone(),
            Self::Service => alert.service.clone(),
            Self::Component => alert.component.clone(),
            Self::Metric => alert.metric.clone(),
            Self::Threshold => format!("{:.2}", alert.threshold),
            Self::Value => format!("{:.2}", alert.value),
            Self::Priority => format!("{:.2}", alert.priority),
        }
    }
}

/// Partition a batch by the named field.
///
/// Every alert lands in exactly one group and groups preserve the input's
/// relative order. An unrecognized field name yields an empty mapping
/// rather than an error, so a typo silently produces zero groups; the CLI
/// validates field names before calling in.
pub fn by_field(batch: &AlertBatch, field_name: &str) -> BTreeMap<String, AlertBatch> {
    let Some(field) = GroupField::from_name(field_name) else {
        log::warn!("Unknown group field '{}', producing no groups", field_name);
        return BTreeMap::new();
    };

    let mut groups: BTreeMap<String, AlertBatch> = BTreeMap::new();

    for alert in batch.iter() {
        groups
            .entry(field.key_for(alert))
            .or_default()
            .alerts
            .push(alert.clone());
    }

    groups
}

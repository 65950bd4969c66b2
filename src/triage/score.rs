//! Priority scoring
//!
//! Combines severity weight, threshold deviation, and blast radius (distinct
//! components alerting on the same service and metric) into a single score
//! per alert. Weights are fixed constants in this version.

use crate::alerts::{Alert, AlertBatch, Severity};

use std::collections::HashSet;

/// Multiplier applied to the severity weight
pub const SEVERITY_WEIGHT: f64 = 1.0;
/// Multiplier applied to the deviation percentage
pub const DEVIATION_WEIGHT: f64 = 0.1;
/// Multiplier applied to the affected-component count
pub const COMPONENT_WEIGHT: f64 = 2.0;
/// Upper bound on the deviation percentage term
pub const DEVIATION_CAP: f64 = 1000.0;

/// Percentage deviation of an observed value from its threshold.
///
/// A zero threshold yields 0.0 rather than dividing by zero; anything past
/// 1000% is clamped so a runaway metric cannot dominate the score.
pub fn deviation_percent(value: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        return 0.0;
    }
    let percentage = (value - threshold).abs() / threshold.abs() * 100.0;
    percentage.min(DEVIATION_CAP)
}

/// Number of distinct components alerting on the target's (service, metric)
/// pair, the target's own component included.
///
/// Other alerts are matched by identifier, not component name, so two alerts
/// from the same component count that component once. The floor is 1: an
/// alert with no peers still counts itself.
pub fn affected_components(target: &Alert, batch: &AlertBatch) -> usize {
    let mut components: HashSet<&str> = HashSet::new();

    for alert in batch.iter() {
        if alert.service == target.service
            && alert.metric == target.metric
            && alert.id != target.id
        {
            components.insert(alert.component.as_str());
        }
    }

    components.len() + 1
}

/// Compute the priority score for one alert against a batch.
///
/// `severity × 1.0 + deviation% × 0.1 + components × 2.0`, rounded
/// half-away-from-zero to two decimal places. Unrecognized severity labels
/// score at the Info weight.
pub fn priority_for(alert: &Alert, batch: &AlertBatch) -> f64 {
    let severity = Severity::from_label(&alert.severity)
        .map(|s| s.weight())
        .unwrap_or(Severity::Info.weight());
    let deviation = deviation_percent(alert.value, alert.threshold);
    let components = affected_components(alert, batch) as f64;

    let priority =
        severity * SEVERITY_WEIGHT + deviation * DEVIATION_WEIGHT + components * COMPONENT_WEIGHT;

    (priority * 100.0).round() / 100.0
}

/// Score every alert in the batch in one pass.
///
/// Component counts are gathered against the batch as passed in, before any
/// priority is written, so the counting never observes partially-scored
/// state. Idempotent: scoring a scored batch reproduces the same values.
pub fn score_all(batch: &mut AlertBatch) {
    let scores: Vec<f64> = batch
        .iter()
        .map(|alert| priority_for(alert, batch))
        .collect();

    for (alert, score) in batch.alerts.iter_mut().zip(scores) {
        alert.priority = score;
    }

    log::debug!("Scored {} alerts", batch.len());
}

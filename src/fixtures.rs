//! Shared test fixtures
//!
//! Provides the canonical sample batch used across triage and command tests.

use crate::alerts::{Alert, AlertBatch};

use chrono::{DateTime, TimeZone, Utc};

/// Build an alert with the given fields and a fixed timestamp.
pub fn alert(
    id: &str,
    service: &str,
    component: &str,
    severity: &str,
    metric: &str,
    value: f64,
    threshold: f64,
) -> Alert {
    Alert {
        id: id.to_string(),
        timestamp: fixed_time(0),
        service: service.to_string(),
        component: component.to_string(),
        severity: severity.to_string(),
        metric: metric.to_string(),
        value,
        threshold,
        description: format!("{} on {}", metric, component),
        priority: 0.0,
    }
}

/// Fixed instant plus an offset in minutes, for deterministic window tests.
pub fn fixed_time(offset_minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 28, 10, 26, 19).unwrap()
        + chrono::Duration::minutes(offset_minutes)
}

/// The canonical four-alert batch.
///
/// Two alerts share (payment-processor, latency) across distinct components,
/// one carries a zero threshold, and one is informational with no peers.
pub fn sample_batch() -> AlertBatch {
    let mut gateway = alert(
        "ALT-001",
        "payment-processor",
        "api-gateway",
        "critical",
        "latency",
        2300.0,
        1000.0,
    );
    gateway.timestamp = fixed_time(0);

    let mut checkout = alert(
        "ALT-002",
        "payment-processor",
        "checkout",
        "warning",
        "latency",
        1500.0,
        1000.0,
    );
    checkout.timestamp = fixed_time(5);

    let mut ingest = alert(
        "ALT-003",
        "metrics-pipeline",
        "ingest-worker",
        "warning",
        "queue_depth",
        420.0,
        0.0,
    );
    ingest.timestamp = fixed_time(10);

    let mut reporter = alert(
        "ALT-004",
        "metrics-pipeline",
        "reporter",
        "info",
        "cpu_usage",
        55.0,
        55.0,
    );
    reporter.timestamp = fixed_time(15);

    AlertBatch::new(vec![gateway, checkout, ingest, reporter])
}

//! Alert filtering predicates
//!
//! Pure filters over an alert batch. Each returns a new batch of cloned
//! alerts in their original relative order; the input is never mutated.

use crate::alerts::{Alert, AlertBatch};

use chrono::{DateTime, Duration, Utc};

/// Keep alerts whose severity string exactly matches `severity`.
///
/// The match is case-sensitive against the stored label.
pub fn by_severity(batch: &AlertBatch, severity: &str) -> AlertBatch {
    retain(batch, |alert| alert.severity == severity)
}

/// Keep alerts raised by the named service (exact match).
pub fn by_service(batch: &AlertBatch, service: &str) -> AlertBatch {
    retain(batch, |alert| alert.service == service)
}

/// Keep alerts with a timestamp strictly after `cutoff`.
pub fn since(batch: &AlertBatch, cutoff: DateTime<Utc>) -> AlertBatch {
    retain(batch, |alert| alert.timestamp > cutoff)
}

/// Keep alerts from the last `minutes` minutes.
///
/// Callers treat 0 as "no filter" and skip the call entirely; passing 0
/// here keeps only alerts newer than the current instant.
pub fn within_last_minutes(batch: &AlertBatch, minutes: u64) -> AlertBatch {
    let cutoff = Utc::now() - Duration::minutes(minutes as i64);
    since(batch, cutoff)
}

fn retain<F>(batch: &AlertBatch, predicate: F) -> AlertBatch
where
    F: Fn(&Alert) -> bool,
{
    AlertBatch::new(batch.iter().filter(|a| predicate(a)).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_batch;

    #[test]
    fn test_by_severity_keeps_only_matches() {
        let batch = sample_batch();
        let critical = by_severity(&batch, "critical");
        assert!(!critical.is_empty());
        assert!(critical.iter().all(|a| a.severity == "critical"));
    }

    #[test]
    fn test_by_severity_partitions_batch() {
        let batch = sample_batch();
        let mut severities: Vec<&str> = batch.iter().map(|a| a.severity.as_str()).collect();
        severities.sort_unstable();
        severities.dedup();

        let total: usize = severities
            .iter()
            .map(|s| by_severity(&batch, s).len())
            .sum();
        assert_eq!(total, batch.len());
    }

    #[test]
    fn test_by_severity_is_case_sensitive() {
        let batch = sample_batch();
        assert!(by_severity(&batch, "CRITICAL").is_empty());
    }

    #[test]
    fn test_by_severity_empty_result_is_valid() {
        let batch = sample_batch();
        let none = by_severity(&batch, "no-such-severity");
        assert!(none.is_empty());
        assert_eq!(none.len(), 0);
    }

    #[test]
    fn test_by_service_exact_match() {
        let batch = sample_batch();
        let filtered = by_service(&batch, "payment-processor");
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|a| a.service == "payment-processor"));
    }

    #[test]
    fn test_since_is_strictly_after() {
        let batch = sample_batch();
        let first = batch.alerts[0].timestamp;
        // A cutoff equal to an alert's timestamp excludes that alert.
        let filtered = since(&batch, first);
        assert!(filtered.iter().all(|a| a.timestamp > first));
        assert!(!filtered.iter().any(|a| a.timestamp == first));
    }

    #[test]
    fn test_since_preserves_relative_order() {
        let batch = sample_batch();
        let cutoff = batch.alerts[0].timestamp;
        let filtered = since(&batch, cutoff);

        let expected: Vec<&str> = batch
            .iter()
            .filter(|a| a.timestamp > cutoff)
            .map(|a| a.id.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let batch = sample_batch();
        let before = batch.clone();
        let _ = by_severity(&batch, "critical");
        let _ = by_service(&batch, "payment-processor");
        let _ = since(&batch, Utc::now());
        assert_eq!(batch, before);
    }

    #[test]
    fn test_within_last_minutes_drops_old_alerts() {
        let batch = sample_batch();
        // All fixture timestamps are fixed in 2024, far outside any window.
        let filtered = within_last_minutes(&batch, 60);
        assert!(filtered.is_empty());
    }
}

//! Priority ordering

use crate::alerts::AlertBatch;

/// Sort the batch by priority, highest first.
///
/// The sort is stable: equal-priority alerts keep their relative input
/// order.
pub fn by_priority_descending(batch: &mut AlertBatch) {
    batch
        .alerts
        .sort_by(|a, b| b.priority.total_cmp(&a.priority));
}

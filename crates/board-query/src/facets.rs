use std::collections::HashSet;

use board_model::Record;

/// Distinct values of one dimension, in first-seen order.
///
/// Feeds the option lists of a filter group (practice areas, positions,
/// locations). Blank values are skipped.
pub fn facet_values<R: Record>(records: &[R], dimension: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        for value in record.field(dimension).filter_values() {
            if value.trim().is_empty() {
                continue;
            }
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
    }
    values
}

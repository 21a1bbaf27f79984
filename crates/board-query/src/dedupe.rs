use std::collections::HashMap;
use std::collections::hash_map::Entry;

use board_model::{Record, RecordId};

/// Collapses records sharing an identity key.
///
/// The later record's values win, but it keeps the position where the id was
/// first seen, matching insert-into-a-map semantics.
pub fn dedupe_by_id<R: Record>(records: Vec<R>) -> Vec<R> {
    let mut positions: HashMap<RecordId, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<R> = Vec::with_capacity(records.len());
    for record in records {
        match positions.entry(record.id()) {
            Entry::Occupied(slot) => unique[*slot.get()] = record,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(record);
            }
        }
    }
    unique
}

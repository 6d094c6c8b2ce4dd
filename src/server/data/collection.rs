//! Generic upsert and removal by id over record collections.

use chrono::Utc;
use entity::Identified;

/// Outcome of [`upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// No record had the id; the record was appended with a generated id
    Inserted,
    /// A record with the same id was replaced in place
    Replaced,
}

/// Inserts or replaces `record` by id.
///
/// A record whose id matches an existing entry replaces it in place, keeping its position.
/// Otherwise, including when the id is empty, the record is appended under a freshly
/// generated id.
///
/// # Returns
/// - The record as stored (carrying its final id) and whether it was inserted or replaced
pub fn upsert<T: Identified + Clone>(records: &mut Vec<T>, mut record: T) -> (T, Upsert) {
    if !record.id().is_empty() {
        if let Some(existing) = records.iter_mut().find(|r| r.id() == record.id()) {
            *existing = record.clone();
            return (record, Upsert::Replaced);
        }
    }

    record.set_id(generate_id(records));
    records.push(record.clone());

    (record, Upsert::Inserted)
}

/// Removes the record with `id`.
///
/// # Returns
/// - `true` - A record was removed
/// - `false` - No record had the id; the collection is unchanged
pub fn remove<T: Identified>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);

    records.len() != before
}

/// Generates an id unused within `records`.
///
/// Ids are the record type's prefix, the current Unix time in milliseconds and four random
/// hex digits, re-rolled on the improbable collision.
pub fn generate_id<T: Identified>(records: &[T]) -> String {
    loop {
        let id = format!(
            "{}{}{:04x}",
            T::ID_PREFIX,
            Utc::now().timestamp_millis(),
            rand::random::<u16>()
        );

        if !records.iter().any(|r| r.id() == id) {
            return id;
        }
    }
}

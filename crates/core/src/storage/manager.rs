use crate::errors::CoreError;
use crate::models::journal::Journal;

use super::record::StoredRecord;
use super::store::{KeyValueStore, STORAGE_KEY};

/// High-level persistence: load/normalize the journal from a key-value
/// store and write it back wholesale.
pub struct StorageManager;

impl StorageManager {
    /// Load the journal from the store slot, normalizing both persisted
    /// schema shapes. Never errors and never writes: an empty slot or a
    /// malformed payload yields an empty journal.
    pub fn load(store: &impl KeyValueStore) -> Journal {
        match store.get(STORAGE_KEY) {
            Some(raw) => Self::parse(&raw),
            None => Journal::default(),
        }
    }

    /// Normalize a raw persisted payload into a journal.
    ///
    /// Fails soft at every level: an unparseable payload or a non-array
    /// payload yields an empty journal, and array elements that do not
    /// resolve to an id and a timestamp are dropped silently. No partial
    /// record is ever retained.
    pub fn parse(raw: &str) -> Journal {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
            return Journal::default();
        };
        let Some(elements) = value.as_array() else {
            return Journal::default();
        };
        let trades = elements
            .iter()
            .filter_map(StoredRecord::from_value)
            .filter_map(StoredRecord::into_trade)
            .collect();
        Journal { trades }
    }

    /// Serialize the full journal as a JSON array of canonical records
    /// and overwrite the store slot.
    pub fn save(store: &mut impl KeyValueStore, journal: &Journal) -> Result<(), CoreError> {
        let payload = serde_json::to_string(&journal.trades)?;
        store.set(STORAGE_KEY, &payload)
    }
}

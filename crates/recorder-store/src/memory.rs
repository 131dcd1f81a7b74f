//! In-memory event store backend.
//!
//! Backs tests and local runs where no `Dragonfly` instance is available.
//! The map is keyed by event id and guarded by an async mutex, which gives
//! the same check-and-insert atomicity the real backend gets from
//! `SET ... NX`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use recorder_core::StoredRecord;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::InsertOutcome;

/// In-memory conditional-insert store.
///
/// Cloning shares the underlying map, mirroring how the `Dragonfly` handle
/// shares one connection across invocations.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, String>>>,
    fail_puts: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose writes always fail.
    ///
    /// Exercises the store-failure propagation path in tests without a
    /// live backend to break.
    pub fn failing() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            fail_puts: true,
        }
    }

    /// Insert `record` keyed by its event id, only if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the record cannot be
    /// serialized. Returns [`StoreError::Backend`] when failure injection
    /// is enabled.
    pub async fn put_if_absent(
        &self,
        record: &StoredRecord,
    ) -> Result<InsertOutcome, StoreError> {
        if self.fail_puts {
            return Err(StoreError::Backend("injected put failure".to_owned()));
        }

        let json = serde_json::to_string(record)?;
        let mut records = self.records.lock().await;
        match records.entry(record.event_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(json);
                Ok(InsertOutcome::Inserted)
            }
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
        }
    }

    /// The stored JSON for an event id, if any.
    ///
    /// The recorder never reads; this accessor exists so tests can verify
    /// what was (or was not) written.
    pub async fn get(&self, event_id: &str) -> Option<String> {
        self.records.lock().await.get(event_id).cloned()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

//! Backend enum dispatch and the conditional-insert outcome type.
//!
//! Uses enum dispatch instead of trait objects because async methods are
//! not dyn-compatible in Rust. The recorder holds an [`EventStore`] and does
//! not care which backend is behind it.

use recorder_core::StoredRecord;

use crate::dragonfly::DragonflyStore;
use crate::error::StoreError;
use crate::memory::MemoryStore;

/// Outcome of a conditional insert.
///
/// `AlreadyExists` is explicitly not an error: it is the expected result of
/// a duplicate delivery and must never surface as a failure to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// No record with this event id existed; the record was written.
    Inserted,
    /// A record with this event id already exists; nothing was written.
    AlreadyExists,
}

/// A durable key-value store that supports conditional inserts.
#[derive(Clone)]
pub enum EventStore {
    /// `Dragonfly` (Redis-compatible) backend.
    Dragonfly(DragonflyStore),
    /// In-memory backend for tests and local runs.
    Memory(MemoryStore),
}

impl EventStore {
    /// Insert `record` keyed by its event id, only if no record with that
    /// id currently exists.
    ///
    /// Exactly one write attempt is made; no reads. The store's atomic
    /// conditional write is the sole concurrency-correctness mechanism.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails for any reason other than
    /// the key already existing.
    pub async fn put_if_absent(
        &self,
        record: &StoredRecord,
    ) -> Result<InsertOutcome, StoreError> {
        match self {
            Self::Dragonfly(store) => store.put_if_absent(record).await,
            Self::Memory(store) => store.put_if_absent(record).await,
        }
    }

    /// Human-readable backend name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Dragonfly(_) => "dragonfly",
            Self::Memory(_) => "memory",
        }
    }
}

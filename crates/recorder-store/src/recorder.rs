//! The idempotent event recorder.
//!
//! One linear operation per invocation: extract, build the record, attempt
//! one conditional insert, report. Duplicate deliveries are normalized to
//! the same success receipt as fresh inserts; every other store failure
//! propagates unmodified so the invoking infrastructure can apply its own
//! retry policy. The recorder itself never retries.

use recorder_core::{Envelope, RecordError, RecordReceipt, StoredRecord};

use crate::error::StoreError;
use crate::store::{EventStore, InsertOutcome};

/// Errors that can surface from [`Recorder::record`].
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// The envelope is malformed (missing event id). Fatal for this
    /// delivery; not retried by the recorder.
    #[error("malformed event: {0}")]
    Malformed(#[from] RecordError),

    /// The store failed for a reason other than the duplicate-key
    /// condition. Propagated so the caller's retry mechanism can re-invoke.
    #[error("event store error: {0}")]
    Store(#[from] StoreError),
}

/// Records webhook events exactly once per event id.
///
/// Constructed once at startup with its store and reused across
/// invocations; holds no per-invocation state.
#[derive(Clone)]
pub struct Recorder {
    store: EventStore,
}

impl Recorder {
    /// Create a recorder backed by `store`.
    pub const fn new(store: EventStore) -> Self {
        Self { store }
    }

    /// Record one event envelope idempotently.
    ///
    /// Makes exactly one conditional write attempt. Returns the same
    /// `{status: ok, event_id}` receipt whether the record was freshly
    /// inserted or already present from an earlier delivery.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::Malformed`] when `detail.id` is missing or
    /// empty (no write is attempted). Returns [`RecorderError::Store`] when
    /// the conditional write fails for any reason other than the key
    /// already existing.
    pub async fn record(&self, envelope: &Envelope) -> Result<RecordReceipt, RecorderError> {
        let record = StoredRecord::from_envelope(envelope)?;

        match self.store.put_if_absent(&record).await? {
            InsertOutcome::Inserted => {
                tracing::debug!(
                    event_id = %record.event_id,
                    event_type = %record.event_type,
                    "event recorded"
                );
            }
            InsertOutcome::AlreadyExists => {
                // Expected under at-least-once delivery; not a failure.
                tracing::debug!(
                    event_id = %record.event_id,
                    "duplicate delivery, record already present"
                );
            }
        }

        Ok(RecordReceipt::ok(record.event_id))
    }

    /// The backing store, for startup logging.
    pub const fn store(&self) -> &EventStore {
        &self.store
    }
}

//! `Dragonfly` (Redis-compatible) event store backend.
//!
//! Records live under `{namespace}:{event_id}` as JSON strings. The
//! namespace plays the role of a table name and comes from configuration.
//! The conditional insert maps directly onto `SET ... NX`, which atomically
//! refuses the write when the key already exists.
//!
//! # Key Pattern
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `{namespace}:{event_id}` | JSON | Stored record for one event |

use fred::prelude::*;
use fred::types::SetOptions;
use recorder_core::StoredRecord;

use crate::error::StoreError;
use crate::store::InsertOutcome;

/// Connection handle to a `Dragonfly` (Redis-compatible) instance.
///
/// Wraps a [`fred::prelude::Client`] plus the key namespace. Constructed
/// once at startup and reused across invocations; the handle holds no
/// business state.
#[derive(Clone)]
pub struct DragonflyStore {
    client: Client,
    namespace: String,
}

impl DragonflyStore {
    /// Connect to `Dragonfly` at the given URL, keying records under
    /// `namespace`.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Dragonfly`] if the connection fails.
    pub async fn connect(url: &str, namespace: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("invalid Dragonfly URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!(namespace, "connected to Dragonfly");
        Ok(Self {
            client,
            namespace: namespace.to_owned(),
        })
    }

    /// Insert `record` at `{namespace}:{event_id}` only if the key does not
    /// already exist (`SET ... NX`).
    ///
    /// `SET NX` replies `OK` when the value was written and nil when the
    /// key was already present, so a single round trip yields the outcome
    /// with no separate read.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the record cannot be
    /// serialized. Returns [`StoreError::Dragonfly`] if the write fails.
    pub async fn put_if_absent(
        &self,
        record: &StoredRecord,
    ) -> Result<InsertOutcome, StoreError> {
        let key = self.record_key(&record.event_id);
        let json = serde_json::to_string(record)?;

        let reply: Option<String> = self
            .client
            .set(key.as_str(), json.as_str(), None, Some(SetOptions::NX), false)
            .await?;

        Ok(match reply {
            Some(_) => InsertOutcome::Inserted,
            None => InsertOutcome::AlreadyExists,
        })
    }

    /// The full key for a given event id.
    fn record_key(&self, event_id: &str) -> String {
        format!("{}:{event_id}", self.namespace)
    }

    /// Return a reference to the underlying [`Client`].
    ///
    /// The recorder itself never reads; this accessor exists for
    /// integration tests and operational tooling.
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

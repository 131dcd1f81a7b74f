//! The persisted record shape and the caller-visible receipt.
//!
//! A [`StoredRecord`] is built once per delivery and never updated or
//! deleted by this system; the unique key is the provider's event id.
//! Optional descriptive fields fall back to fixed sentinels so the stored
//! shape is uniform regardless of how sparse the inbound payload was.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::RecordError;

/// Sentinel stored when the envelope carries no event type.
pub const UNKNOWN_EVENT_TYPE: &str = "unknown";

/// Sentinel stored when the envelope carries no object id.
pub const UNKNOWN_OBJECT_ID: &str = "n/a";

/// The record persisted for each distinct event id.
///
/// `raw_payload` keeps the full JSON serialization of the envelope's
/// `detail` for diagnostics and replay; the other fields are the extracted
/// projection used for human inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// The provider's event id. Unique key, external idempotency key.
    pub event_id: String,
    /// The provider's event type, or [`UNKNOWN_EVENT_TYPE`].
    pub event_type: String,
    /// The id of the object the event refers to, or [`UNKNOWN_OBJECT_ID`].
    pub object_id: String,
    /// Full JSON serialization of the envelope's `detail` field.
    pub raw_payload: String,
    /// Delivery timestamp as provided by the caller, verbatim.
    pub received_at: Option<String>,
}

impl StoredRecord {
    /// Build a record from an inbound envelope.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingEventId`] when `detail.id` is absent,
    /// empty, or not a string. The error carries the serialized detail so
    /// the malformed payload is visible in logs without replaying it.
    pub fn from_envelope(envelope: &Envelope) -> Result<Self, RecordError> {
        let raw_payload = serde_json::to_string(&envelope.detail)?;

        let Some(event_id) = envelope.event_id() else {
            return Err(RecordError::MissingEventId {
                detail: raw_payload,
            });
        };

        Ok(Self {
            event_id: event_id.to_owned(),
            event_type: envelope
                .event_type()
                .unwrap_or(UNKNOWN_EVENT_TYPE)
                .to_owned(),
            object_id: envelope
                .object_id()
                .unwrap_or(UNKNOWN_OBJECT_ID)
                .to_owned(),
            raw_payload,
            received_at: envelope.time.clone(),
        })
    }
}

/// Status reported back to the caller.
///
/// Duplicate deliveries report the same `Ok` as fresh inserts; that is the
/// idempotency contract. There is no duplicate-specific status at the
/// caller-visible boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    /// The event is durably recorded (freshly inserted or already present).
    Ok,
}

/// The caller-visible outcome of a successful recording.
///
/// Serializes as `{"status": "ok", "event_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReceipt {
    /// Always [`ReceiptStatus::Ok`] on the success path.
    pub status: ReceiptStatus,
    /// The event id the record is keyed on.
    pub event_id: String,
}

impl RecordReceipt {
    /// Build an `Ok` receipt for the given event id.
    pub const fn ok(event_id: String) -> Self {
        Self {
            status: ReceiptStatus::Ok,
            event_id,
        }
    }
}

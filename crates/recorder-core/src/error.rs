//! Malformed-input errors for the recorder domain.
//!
//! A missing event id is fatal for the delivery: there is nothing to key
//! the record on, so the error carries the serialized detail payload for
//! quick diagnosis upstream. The recorder never retries this condition.

/// Errors raised while building a stored record from an envelope.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The envelope carried no usable event id (`detail.id` absent, empty,
    /// or not a string). The serialized detail is included so the malformed
    /// payload can be diagnosed from the error alone.
    #[error("missing event id in payload: {detail}")]
    MissingEventId {
        /// JSON serialization of the envelope's `detail` field.
        detail: String,
    },

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! The inbound event envelope and safe field extraction.
//!
//! The delivery infrastructure wraps the provider's webhook event in the
//! `detail` field of the envelope. The inner payload is schemaless from our
//! perspective, so `detail` is kept as raw JSON and the identifying fields
//! are pulled out with safe nested lookups: a missing intermediate level
//! resolves to "absent", never to a failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The outer event wrapper delivered to the recorder.
///
/// Both fields default when absent so a bare `{}` body still deserializes;
/// validation happens at extraction time, not at parse time. The only hard
/// requirement on the payload is a non-empty `detail.id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// The provider's event payload, as wrapped by the delivery bus.
    #[serde(default)]
    pub detail: Value,
    /// Delivery timestamp as provided by the caller. Stored verbatim,
    /// never validated or reformatted.
    #[serde(default)]
    pub time: Option<String>,
}

impl Envelope {
    /// The provider's event id (`detail.id`), the idempotency key.
    ///
    /// Returns `None` when the field is absent, not a string, or empty.
    /// An empty id is treated the same as a missing one.
    pub fn event_id(&self) -> Option<&str> {
        non_empty_str(self.detail.get("id"))
    }

    /// The provider's event type (`detail.type`), if present and non-empty.
    pub fn event_type(&self) -> Option<&str> {
        non_empty_str(self.detail.get("type"))
    }

    /// The id of the object the event refers to (`detail.data.object.id`),
    /// if present and non-empty.
    ///
    /// Any missing intermediate level (`data`, `object`) yields `None`
    /// rather than an error.
    pub fn object_id(&self) -> Option<&str> {
        non_empty_str(self.detail.pointer("/data/object/id"))
    }
}

/// Extract a non-empty string from an optional JSON value.
///
/// Present-but-empty strings are conflated with absent ones, matching the
/// sentinel substitution rules for the stored record.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

//! Domain types for the idempotent webhook event recorder.
//!
//! Webhook events arrive wrapped by the delivery infrastructure: the outer
//! [`Envelope`] carries the provider's event in its `detail` field plus a
//! delivery timestamp. This crate extracts the identifying fields from that
//! wrapper and builds the [`StoredRecord`] that the store layer persists.
//!
//! Everything here is pure: no I/O, no async, no store access. The
//! `recorder-store` crate owns the conditional-write side.
//!
//! # Modules
//!
//! - [`envelope`] -- the inbound event wrapper and safe field extraction
//! - [`record`] -- the persisted record shape and the caller-visible receipt
//! - [`error`] -- malformed-input errors

pub mod envelope;
pub mod error;
pub mod record;

// Re-export primary types for convenience.
pub use envelope::Envelope;
pub use error::RecordError;
pub use record::{ReceiptStatus, RecordReceipt, StoredRecord, UNKNOWN_EVENT_TYPE, UNKNOWN_OBJECT_ID};

//! Store layer and recorder for the webhook event recorder.
//!
//! `Dragonfly` (Redis-compatible) is the durable key-value store. The only
//! primitive this crate needs from it is an atomic conditional insert
//! (`SET ... NX`): the write succeeds only when no record with the same
//! event id exists. That single primitive is the whole idempotency and
//! concurrency story -- concurrent deliveries racing on one event id
//! produce exactly one winning insert and the rest observe the duplicate
//! condition, with no read-then-write window.
//!
//! # Modules
//!
//! - [`store`] -- backend enum dispatch and the insert outcome type
//! - [`dragonfly`] -- `Dragonfly` (Redis-compatible) backend
//! - [`memory`] -- in-memory backend for tests and local runs
//! - [`recorder`] -- the idempotent event recorder component
//! - [`error`] -- store error types

pub mod dragonfly;
pub mod error;
pub mod memory;
pub mod recorder;
pub mod store;

// Re-export primary types for convenience.
pub use dragonfly::DragonflyStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use recorder::{Recorder, RecorderError};
pub use store::{EventStore, InsertOutcome};

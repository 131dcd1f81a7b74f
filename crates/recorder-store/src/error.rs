//! Error types for the store layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`fred`] errors with context about which operation failed. The
//! duplicate-key condition is deliberately absent here: it is an expected
//! outcome, surfaced as [`crate::store::InsertOutcome::AlreadyExists`]
//! rather than as an error.

/// Errors that can occur in the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A `Dragonfly`/Redis operation failed.
    #[error("Dragonfly error: {0}")]
    Dragonfly(#[from] fred::error::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A write failed for a backend-specific reason (used by the in-memory
    /// backend's failure injection).
    #[error("store backend error: {0}")]
    Backend(String),
}

//! Shared application state for the ingress server.
//!
//! [`AppState`] holds the recorder, which in turn holds the store handle.
//! Built once at startup, wrapped in [`Arc`](std::sync::Arc), and injected
//! into handlers via Axum's `State` extractor. No per-request mutable
//! state lives here.

use recorder_store::Recorder;

/// Shared state for the Axum application.
pub struct AppState {
    /// The idempotent event recorder.
    pub recorder: Recorder,
}

impl AppState {
    /// Create application state around a recorder.
    pub const fn new(recorder: Recorder) -> Self {
        Self { recorder }
    }
}

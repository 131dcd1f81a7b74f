//! HTTP ingress for the idempotent webhook event recorder.
//!
//! Accepts event envelopes from the delivery infrastructure over HTTP,
//! hands each one to the recorder, and maps the outcome to a response the
//! delivery system understands: 200 for recorded (fresh or duplicate),
//! 400 for malformed payloads, 500 for store failures so the upstream
//! retry mechanism re-delivers.
//!
//! # Architecture
//!
//! ```text
//! POST /events --> Envelope --> Recorder --> Dragonfly (SET NX)
//! ```
//!
//! # Modules
//!
//! - [`config`] -- environment-variable configuration
//! - [`router`] -- Axum route assembly
//! - [`handlers`] -- endpoint handlers
//! - [`state`] -- shared application state
//! - [`server`] -- TCP bind and serve lifecycle
//! - [`error`] -- ingress error types and HTTP mapping

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::IngestConfig;
pub use error::IngestError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;

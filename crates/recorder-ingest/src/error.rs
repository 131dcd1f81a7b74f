//! Error types for the ingress server.
//!
//! [`IngestError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! status codes are the retry contract with the delivery infrastructure:
//! 400 means "do not redeliver this payload", 500 means "redeliver later".

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recorder_store::RecorderError;

/// Errors that can occur in the ingress layer.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The envelope is malformed (missing event id). Not retryable.
    #[error("malformed event: {0}")]
    Malformed(String),

    /// The event store failed. The delivery system should retry.
    #[error("store error: {0}")]
    Store(String),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}

impl From<RecorderError> for IngestError {
    fn from(err: RecorderError) -> Self {
        match err {
            RecorderError::Malformed(e) => Self::Malformed(e.to_string()),
            RecorderError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Malformed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Store(msg) | Self::Config(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

//! Endpoint handlers for the ingress server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/events` | Record one event envelope idempotently |
//! | `GET` | `/healthz` | Liveness probe |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use recorder_core::{Envelope, RecordReceipt};

use crate::error::IngestError;
use crate::state::AppState;

/// Record one event envelope.
///
/// Returns the `{status: ok, event_id}` receipt for both fresh inserts and
/// duplicate deliveries. Malformed payloads get a 400; store failures get a
/// 500 so the delivery system retries.
pub async fn record_event(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<Envelope>,
) -> Result<Json<RecordReceipt>, IngestError> {
    let receipt = state.recorder.record(&envelope).await?;
    Ok(Json(receipt))
}

/// Liveness probe.
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "up" }))
}

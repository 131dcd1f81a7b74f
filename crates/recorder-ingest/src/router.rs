//! Axum router construction for the ingress server.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the ingress server.
///
/// - `POST /events` -- record one event envelope
/// - `GET /healthz` -- liveness probe
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/events", post(handlers::record_event))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

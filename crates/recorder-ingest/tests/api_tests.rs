//! Integration tests for the ingress API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, with the in-memory store behind the recorder so
//! no live services are needed.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use recorder_ingest::router::build_router;
use recorder_ingest::state::AppState;
use recorder_store::{EventStore, MemoryStore, Recorder};
use serde_json::Value;
use tower::ServiceExt;

fn make_router(store: MemoryStore) -> axum::Router {
    let recorder = Recorder::new(EventStore::Memory(store));
    build_router(Arc::new(AppState::new(recorder)))
}

fn post_event(body: &Value) -> Request<Body> {
    Request::post("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn full_envelope() -> Value {
    serde_json::json!({
        "detail": {
            "id": "evt_1",
            "type": "charge.succeeded",
            "data": { "object": { "id": "ch_1" } }
        },
        "time": "2024-01-01T00:00:00Z"
    })
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn post_event_returns_ok_receipt() {
    let store = MemoryStore::new();
    let router = make_router(store.clone());

    let response = router.oneshot(post_event(&full_envelope())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({ "status": "ok", "event_id": "evt_1" }));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn duplicate_post_returns_same_receipt() {
    let store = MemoryStore::new();
    let router = make_router(store.clone());

    let first = router
        .clone()
        .oneshot(post_event(&full_envelope()))
        .await
        .unwrap();
    let second = router.oneshot(post_event(&full_envelope())).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        body_to_json(second.into_body()).await,
        serde_json::json!({ "status": "ok", "event_id": "evt_1" })
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn malformed_envelope_returns_400_and_writes_nothing() {
    let store = MemoryStore::new();
    let router = make_router(store.clone());

    let response = router
        .oneshot(post_event(&serde_json::json!({ "detail": {} })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("missing event id"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn store_failure_returns_500() {
    let router = make_router(MemoryStore::failing());

    let response = router.oneshot(post_event(&full_envelope())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 500);
}

#[tokio::test]
async fn healthz_is_up() {
    let router = make_router(MemoryStore::new());

    let response = router
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({ "status": "up" }));
}

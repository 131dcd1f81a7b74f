//! Entry point for the ingress server binary.
//!
//! Wires logging, configuration, the store connection, and the HTTP
//! server together; all behavior lives in the `recorder_ingest` library.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use recorder_ingest::config::IngestConfig;
use recorder_ingest::server::{ServerConfig, start_server};
use recorder_ingest::state::AppState;
use recorder_store::{DragonflyStore, EventStore, Recorder};

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// connects the store, then serves the ingress API until terminated.
///
/// # Errors
///
/// Returns an error if initialization or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("recorder-ingest starting");

    // Load configuration from environment
    let config = IngestConfig::from_env()?;
    info!(
        namespace = config.event_namespace,
        host = config.host,
        port = config.port,
        "configuration loaded"
    );

    // Connect the event store; the handle is created once and reused
    // across invocations.
    let store = DragonflyStore::connect(&config.store_url, &config.event_namespace).await?;
    let recorder = Recorder::new(EventStore::Dragonfly(store));
    info!(store = recorder.store().name(), "event store ready");

    let state = Arc::new(AppState::new(recorder));

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

//! Configuration types for the ingress server.
//!
//! All configuration is loaded from environment variables. The ingress
//! needs to know how to reach the event store, which namespace to key
//! records under, and where to listen.

use crate::error::IngestError;

/// Complete ingress configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Event store URL (e.g. `redis://localhost:6379`).
    pub store_url: String,
    /// Key namespace for stored records (the "table name").
    pub event_namespace: String,
    /// The host address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

/// Default key namespace when `EVENT_NAMESPACE` is unset.
const DEFAULT_NAMESPACE: &str = "events";

impl IngestConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `STORE_URL` -- event store connection string
    ///
    /// Optional variables:
    /// - `EVENT_NAMESPACE` -- key namespace for records (default `events`)
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default 8080)
    pub fn from_env() -> Result<Self, IngestError> {
        let store_url = env_var("STORE_URL")?;

        let event_namespace =
            std::env::var("EVENT_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_owned());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_owned())
            .parse()
            .map_err(|e| IngestError::Config(format!("invalid PORT: {e}")))?;

        Ok(Self {
            store_url,
            event_namespace,
            host,
            port,
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &str) -> Result<String, IngestError> {
    std::env::var(name)
        .map_err(|e| IngestError::Config(format!("missing required env var {name}: {e}")))
}

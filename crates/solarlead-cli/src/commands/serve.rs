//! `solarlead serve`: run the HTTP server until shutdown.

use std::sync::Arc;

use anyhow::Result;
use solarlead_api::{AppState, Server};
use solarlead_core::SolarleadConfig;

use super::open_store;

/// Starts the server with `host`/`port` overriding the configuration.
pub async fn run(mut config: SolarleadConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if !config.csrf.enabled {
        tracing::warn!("CSRF protection is disabled");
    }

    let store = Arc::new(open_store(&config.database).await?);
    let state = AppState::new(store.clone(), &config)?;
    let result = Server::new(config.server.clone(), state).run().await;

    store.close().await;
    tracing::info!("database closed");
    result.map_err(Into::into)
}

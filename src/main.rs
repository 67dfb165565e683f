// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::refresh_service::RefreshService;
use crate::application::snapshot_store::SnapshotStore;
use crate::infrastructure::config::load_relay_config;
use crate::infrastructure::ttss_client::TtssClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let relay_config = load_relay_config()?;

    // Upstream source (infrastructure layer)
    let source = Arc::new(
        TtssClient::new(relay_config.upstream.url.clone(), relay_config.upstream.timeout())
            .context("failed to build upstream client")?,
    );

    // Store and refresh loop (application layer)
    let store = SnapshotStore::default();
    let refresh = Arc::new(RefreshService::new(
        source,
        store.clone(),
        relay_config.refresh.interval(),
    ));

    // Never listen without a real first snapshot
    refresh
        .prime()
        .await
        .with_context(|| format!("initial fetch from {} failed", relay_config.upstream.url))?;
    refresh.spawn();

    // Build router (presentation layer)
    let state = Arc::new(AppState { store });
    let router = router(state);

    // Start server
    let addr = relay_config.server.address;
    tracing::info!("Starting tram-relay service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

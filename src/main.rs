// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::shell_service::ShellService;
use crate::infrastructure::config::{config_path, load_config};
use crate::infrastructure::embed::IframeEmbed;
use crate::infrastructure::memory_store::InMemorySessionStore;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let path = config_path();
    let config = load_config(&path)?;
    let addr: SocketAddr = config.server.bind.parse()?;
    let session_ttl = config.server.session_ttl()?;
    let profile = Arc::new(config.into_profile()?);
    tracing::info!(
        config = %path,
        entries = profile.entries.len(),
        theme_toggle = profile.features.theme_toggle,
        "shell profile loaded"
    );

    // Session storage and services
    let store = Arc::new(InMemorySessionStore::new());
    let shell_service = ShellService::new(profile, store);

    let pruner = shell_service.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            match pruner.prune_idle(session_ttl).await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "pruned idle sessions"),
                Err(e) => tracing::warn!("session pruning failed: {}", e),
            }
        }
    });

    let state = Arc::new(AppState {
        shell_service,
        embed: Arc::new(IframeEmbed),
    });

    let router = build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting report shell on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

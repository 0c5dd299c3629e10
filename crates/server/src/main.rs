//! aggra server entry point.
//!
//! Boots the HTTP façade: loads layered configuration, builds the upstream
//! client and the shared TTL cache, then serves the router.

use std::sync::Arc;

use aggra_client::{PlaceholderClient, PlaceholderConfig};
use aggra_core::AppConfig;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod error;
mod ops;
mod router;
mod state;
mod validation;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::load()?;

    let upstream = PlaceholderClient::new(PlaceholderConfig {
        base_url: config.upstream_base_url.clone(),
        timeout: config.timeout(),
        user_agent: config.user_agent.clone(),
    })?;

    let bind_addr = config.bind_addr.clone();
    let app = router::build_router(state::AppState::new(config, Arc::new(upstream)));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "aggra listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

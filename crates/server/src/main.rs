//! newsdesk server entry point.
//!
//! Loads configuration, builds the content API client and serves the site
//! over HTTP. Logging goes to stderr as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use newsdesk_client::ContentClient;
use newsdesk_core::AppConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod pages;
mod render;
mod state;

use render::Renderer;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.require_api_key().context("refusing to start without an API key")?;

    let client = ContentClient::from_app_config(&config).context("failed to build content API client")?;
    let addr = config.bind_addr()?;

    let state = AppState::new(Arc::new(config), Arc::new(client), Arc::new(Renderer::default()));
    let app = handler::create_router(state);

    let listener = TcpListener::bind(addr).await.with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(address = %addr, "newsdesk listening on http://{}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("newsdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

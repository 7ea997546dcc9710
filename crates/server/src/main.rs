use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sitelift_core::Scraper;
use sitelift_server::{AppState, DEFAULT_LOG_FILTER, MemoryStore, PgStore, Settings, Telemetry, build_router};
use tracing_subscriber::EnvFilter;

async fn telemetry(settings: &Settings) -> Telemetry {
    match &settings.database_url {
        Some(url) => match PgStore::connect(url).await {
            Ok(store) => Telemetry::new(Arc::new(store)),
            Err(err) => {
                tracing::warn!(error = %err, "database unavailable, visits will not be recorded");
                Telemetry::disabled()
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, keeping visits in memory");
            Telemetry::new(Arc::new(MemoryStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::parse();
    let state = AppState::new(Scraper::with_config(settings.scraper_config()), telemetry(&settings).await);
    let app = build_router(state, settings.request_timeout());

    let addr = settings.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

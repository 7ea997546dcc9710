//! HTTP service exposing contact and outline extraction.
//!
//! Routes:
//! - `GET /` - greeting
//! - `GET /test` - liveness plus store reachability
//! - `POST /api/visit`, `GET /api/stats`, `GET /api/visits` - best-effort visit tracking
//! - `POST /api/import-contacts`, `POST /api/import-content` - extraction from a remote page

pub mod config;
pub mod error;
mod handlers;
pub mod store;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use sitelift_core::Scraper;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::{DEFAULT_LOG_FILTER, Settings};
pub use error::ApiError;
pub use store::{DocumentStore, MemoryStore, PgStore, Record, StoreError, Telemetry};

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
    pub telemetry: Telemetry,
}

impl AppState {
    pub fn new(scraper: Scraper, telemetry: Telemetry) -> Self {
        Self { scraper: Arc::new(scraper), telemetry }
    }
}

/// Builds the router with CORS, compression, a request timeout and tracing.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/test", get(handlers::health_handler))
        .route("/api/visit", post(handlers::track_visit))
        .route("/api/visits", get(handlers::visits_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .route("/api/import-contacts", post(handlers::import_contacts))
        .route("/api/import-content", post(handlers::import_content))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

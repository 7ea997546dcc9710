use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::types::{HealthResponse, MessageResponse};

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse { message: "Hello from the sitelift backend!" })
}

/// Liveness plus whether the store is reachable
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { ok: true, db: state.telemetry.is_connected().await })
}

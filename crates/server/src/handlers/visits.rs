use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;

use crate::AppState;
use crate::types::{OkResponse, StatsResponse, VisitRequest, VisitsQuery, VisitsResponse};

/// Records a page visit.
///
/// The body is optional and a malformed one is treated as absent; the
/// endpoint answers `{"ok": true}` no matter what happens to the write.
pub async fn track_visit(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Json<OkResponse> {
    let request: VisitRequest = if body.is_empty() {
        VisitRequest::default()
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "ignoring malformed visit body");
            VisitRequest::default()
        })
    };
    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());

    state.telemetry.record_visit(request.path(), user_agent).await;
    Json(OkResponse { ok: true })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { total_visits: state.telemetry.total_visits().await })
}

/// Recent visit records, newest first
pub async fn visits_handler(State(state): State<AppState>, Query(query): Query<VisitsQuery>) -> Json<VisitsResponse> {
    let visits = state.telemetry.visits(query.path.as_deref(), query.limit()).await;
    Json(VisitsResponse { visits })
}

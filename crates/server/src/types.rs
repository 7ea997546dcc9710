//! Request and response payloads.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Default number of visit records returned by `/api/visits`.
pub const DEFAULT_VISIT_LIMIT: usize = 50;
/// Upper bound on `limit` for `/api/visits`.
pub const MAX_VISIT_LIMIT: usize = 200;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub db: bool,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Body of `POST /api/visit`; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct VisitRequest {
    pub path: Option<String>,
}

impl VisitRequest {
    /// The visited path, `/` when absent or blank.
    pub fn path(&self) -> &str {
        self.path.as_deref().filter(|p| !p.trim().is_empty()).unwrap_or("/")
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_visits: i64,
}

#[derive(Debug, Deserialize)]
pub struct VisitsQuery {
    pub path: Option<String>,
    pub limit: Option<usize>,
}

impl VisitsQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_VISIT_LIMIT).min(MAX_VISIT_LIMIT)
    }
}

#[derive(Debug, Serialize)]
pub struct VisitsResponse {
    pub visits: Vec<Record>,
}

/// Body of both import endpoints.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub url: String,
}

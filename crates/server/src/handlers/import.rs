use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use sitelift_core::{ContactSet, ContentOutline};

use crate::AppState;
use crate::error::ApiError;
use crate::types::ImportRequest;

fn import_url(body: Result<Json<ImportRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    Ok(request.url)
}

pub async fn import_contacts(
    State(state): State<AppState>, body: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ContactSet>, ApiError> {
    let url = import_url(body)?;
    let contacts = state.scraper.extract_contacts(&url).await?;
    tracing::info!(url = %url, found = !contacts.is_empty(), "imported contacts");
    Ok(Json(contacts))
}

pub async fn import_content(
    State(state): State<AppState>, body: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ContentOutline>, ApiError> {
    let url = import_url(body)?;
    let outline = state.scraper.extract_outline(&url).await?;
    tracing::info!(url = %url, sections = outline.sections.len(), "imported content");
    Ok(Json(outline))
}

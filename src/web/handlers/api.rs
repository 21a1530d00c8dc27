//! Read-only JSON views over the media records, for editorial tooling.

use crate::services::{media, urls};
use crate::web::error::AppResult;
use crate::web::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 200;

#[derive(Deserialize)]
pub struct PaginationParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn paginate(page: Option<usize>, per_page: Option<usize>) -> (usize, usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1) * per_page;
    (page, per_page, offset)
}

fn json_envelope(
    data: serde_json::Value,
    total: i64,
    page: usize,
    per_page: usize,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
        "meta": {
            "total": total,
            "page": page,
            "per_page": per_page,
        }
    }))
}

fn not_found(msg: &str) -> Response {
    let body = serde_json::json!({
        "error": "Not Found",
        "message": msg,
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Record serialized with its canonical URL attached, so callers never
/// build asset URLs themselves.
fn media_json(state: &AppState, m: &crate::models::Media) -> serde_json::Value {
    let site = &state.config.site;
    let url = urls::normalize(&m.filename, &site.origin, &site.media_path);
    let mut value = serde_json::to_value(m).unwrap_or_default();
    if let Some(obj) = value.as_object_mut() {
        obj.insert("url".to_string(), serde_json::Value::String(url));
    }
    value
}

/// GET /api/media
pub async fn list_media(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Response> {
    let (page, per_page, offset) = paginate(params.page, params.per_page);

    let total = media::count_media(&state.db)?;
    let records = media::list_media(&state.db, per_page, offset)?;
    let data: Vec<_> = records.iter().map(|m| media_json(&state, m)).collect();

    Ok(json_envelope(serde_json::Value::Array(data), total, page, per_page).into_response())
}

/// GET /api/media/:id
pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    match media::get_media_by_id(&state.db, id)? {
        Some(m) => Ok(Json(serde_json::json!({ "data": media_json(&state, &m) })).into_response()),
        None => Ok(not_found("Media not found")),
    }
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

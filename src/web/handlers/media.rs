//! The media serving endpoint: validate the requested filename, find the
//! record (exact match first, suffix-aware fallback second), resolve the
//! physical path, and hand the bytes back with immutable cache headers.

use crate::models::Media;
use crate::services::storage::StorageResolver;
use crate::services::{matcher, media};
use crate::web::error::MediaError;
use crate::web::state::AppState;
use crate::Database;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use std::sync::Arc;

/// Stored filenames are content-addressed by convention: once written under
/// a name, a file is never overwritten. Clients may cache accordingly.
const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

#[derive(Debug)]
pub struct ResolvedMedia {
    pub record: Media,
    pub path: PathBuf,
}

/// Reject anything that is not a plain filename before touching the
/// repository. A requested name whose basename differs from the raw input,
/// or that carries a parent-directory segment, is a traversal attempt.
/// Separators are rejected outright, so the only parent segment a remaining
/// name can be is `..` itself; a stored name like `hero..jpg` stays valid.
fn sanitize_filename(raw: &str) -> Result<&str, MediaError> {
    if raw.is_empty() || raw == ".." || raw.contains('/') || raw.contains('\\') {
        return Err(MediaError::InvalidReference(raw.to_string()));
    }
    match std::path::Path::new(raw).file_name().and_then(|n| n.to_str()) {
        Some(basename) if basename == raw => Ok(raw),
        _ => Err(MediaError::InvalidReference(raw.to_string())),
    }
}

/// The lookup state machine, separated from the HTTP layer so it can be
/// exercised directly: validate, exact lookup, fuzzy fallback, physical
/// path resolution, existence check.
pub fn resolve_request(
    db: &Database,
    storage: &StorageResolver,
    requested: &str,
    search_page_size: usize,
) -> Result<ResolvedMedia, MediaError> {
    let filename = sanitize_filename(requested)?;

    let record = media::get_media_by_filename(db, filename)
        .map_err(into_io)?
        .map(Ok)
        .unwrap_or_else(|| {
            // Stale or suffix-less reference: retry on the logical name.
            matcher::resolve(db, filename, search_page_size)
                .map_err(into_io)?
                .ok_or_else(|| MediaError::RecordNotFound(filename.to_string()))
        })?;

    // The record's stored filename, not the requested one; they differ after
    // a fuzzy fallback.
    let path = storage.path_for(&record.filename);
    if !path.is_file() {
        return Err(MediaError::FileMissingOnDisk(record.filename.clone()));
    }

    Ok(ResolvedMedia { record, path })
}

fn into_io(err: anyhow::Error) -> MediaError {
    MediaError::Io(std::io::Error::other(err))
}

/// Extension lookup first, stored mime type second, generic binary last.
pub fn content_type_for(record: &Media) -> String {
    if let Some(mime) = mime_guess::from_path(&record.filename).first() {
        return mime.to_string();
    }
    if !record.mime_type.is_empty() && record.mime_type.parse::<axum::http::HeaderValue>().is_ok() {
        return record.mime_type.clone();
    }
    "application/octet-stream".to_string()
}

/// GET /media/file/:filename
pub async fn serve_media(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    let resolved = match resolve_request(
        &state.db,
        &state.storage,
        &filename,
        state.config.repository.search_page_size,
    ) {
        Ok(r) => r,
        Err(e) => return e.into_response_with(state.production_mode),
    };

    let bytes = match tokio::fs::read(&resolved.path).await {
        Ok(b) => b,
        Err(e) => return MediaError::Io(e).into_response_with(state.production_mode),
    };

    (
        [
            (header::CONTENT_TYPE, content_type_for(&resolved.record)),
            (header::CACHE_CONTROL, CACHE_FOREVER.to_string()),
            (header::ACCEPT_RANGES, "bytes".to_string()),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
        ],
        bytes,
    )
        .into_response()
}

use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/media/file/:filename", get(handlers::media::serve_media))
        .route("/api/media", get(handlers::api::list_media))
        .route("/api/media/:id", get(handlers::api::get_media))
        .route("/health", get(handlers::api::health))
}

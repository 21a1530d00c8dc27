use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Failure taxonomy for the media serving path. All variants are terminal
/// for the request; a deterministic lookup against unchanged state is never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Malformed or traversal-shaped filename. Client fault, rejected before
    /// any lookup.
    #[error("invalid asset reference: {0}")]
    InvalidReference(String),

    /// No record matches the requested filename or its fuzzy fallback.
    #[error("no media record for '{0}'")]
    RecordNotFound(String),

    /// A record matched but its file is absent from the storage root. Same
    /// status as `RecordNotFound`, but logged distinctly: it signals a
    /// repository/storage integrity gap, not a bad request.
    #[error("media file missing on disk: {0}")]
    FileMissingOnDisk(String),

    #[error("media read failed")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    pub fn status(&self) -> StatusCode {
        match self {
            MediaError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            MediaError::RecordNotFound(_) | MediaError::FileMissingOnDisk(_) => {
                StatusCode::NOT_FOUND
            }
            MediaError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MediaError::InvalidReference(_) => "invalid_reference",
            MediaError::RecordNotFound(_) => "record_not_found",
            MediaError::FileMissingOnDisk(_) => "file_missing_on_disk",
            MediaError::Io(_) => "io_error",
        }
    }

    /// Diagnostic JSON response. Detail is suppressed outside development so
    /// internal filenames and paths do not leak.
    pub fn into_response_with(self, production_mode: bool) -> Response {
        match &self {
            MediaError::FileMissingOnDisk(name) => {
                tracing::warn!(filename = %name, "record exists but file is missing on disk");
            }
            MediaError::Io(e) => {
                tracing::error!("media read failed: {}", e);
            }
            _ => {}
        }

        let body = if production_mode {
            serde_json::json!({ "error": self.kind() })
        } else {
            serde_json::json!({ "error": self.kind(), "message": self.to_string() })
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Catch-all for infrastructure failures in non-media handlers.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Application error: {:?}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

use serde::Serialize;

/// A media record as stored by the upload pipeline. `filename` is unique on
/// the physical filesystem and matches `<base>(-<N>)?.<ext>` where `-<N>` is
/// the collision suffix appended on re-upload.
#[derive(Debug, Clone, Serialize)]
pub struct Media {
    pub id: i64,
    pub filename: String,
    pub mime_type: String,
    pub alt_text: String,
    /// Per-variant sizes (e.g. thumbnail, full) as recorded by the pipeline.
    pub size_variants: serde_json::Value,
    pub created_at: String,
}

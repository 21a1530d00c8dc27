//! Read-only queries against the media record repository. Record lifecycle
//! (creation, collision renaming, deletion) belongs to the upload pipeline;
//! nothing here writes.

use crate::models::Media;
use crate::Database;
use anyhow::Result;
use rusqlite::{OptionalExtension, Row};

fn media_from_row(row: &Row) -> rusqlite::Result<Media> {
    Ok(Media {
        id: row.get(0)?,
        filename: row.get(1)?,
        mime_type: row.get(2)?,
        alt_text: row.get(3)?,
        size_variants: serde_json::from_str(&row.get::<_, String>(4)?).unwrap_or_default(),
        created_at: row.get(5)?,
    })
}

const MEDIA_COLUMNS: &str = "id, filename, mime_type, alt_text, size_variants, created_at";

pub fn get_media_by_filename(db: &Database, filename: &str) -> Result<Option<Media>> {
    let conn = db.get()?;
    // .optional() keeps "no row" as a miss while a real query failure
    // still propagates; a miss and an infrastructure fault map to
    // different statuses at the serving layer.
    let media = conn
        .query_row(
            &format!("SELECT {} FROM media WHERE filename = ?", MEDIA_COLUMNS),
            [filename],
            media_from_row,
        )
        .optional()?;
    Ok(media)
}

pub fn get_media_by_id(db: &Database, id: i64) -> Result<Option<Media>> {
    let conn = db.get()?;
    let media = conn
        .query_row(
            &format!("SELECT {} FROM media WHERE id = ?", MEDIA_COLUMNS),
            [id],
            media_from_row,
        )
        .optional()?;
    Ok(media)
}

/// Substring search over stored filenames, bounded by `limit`. Used to fetch
/// candidates for suffix-aware matching; callers filter further.
pub fn search_media_filenames(db: &Database, fragment: &str, limit: usize) -> Result<Vec<Media>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM media WHERE filename LIKE '%' || ? || '%' LIMIT ?",
        MEDIA_COLUMNS
    ))?;
    let media = stmt
        .query_map((fragment, limit), media_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(media)
}

pub fn list_media(db: &Database, limit: usize, offset: usize) -> Result<Vec<Media>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM media ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
        MEDIA_COLUMNS
    ))?;
    let media = stmt
        .query_map((limit, offset), media_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(media)
}

pub fn count_media(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM media", [], |row| row.get(0))?;
    Ok(count)
}

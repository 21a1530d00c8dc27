//! Suffix-aware resolution of logical asset names to stored filenames.
//!
//! The upload pipeline avoids filename collisions by appending a numeric
//! suffix on re-upload: `hero.jpg`, `hero-1.jpg`, `hero-2.jpg`. A caller
//! holding the logical name `hero` wants whichever of those is newest.
//! Suffixes are assigned monotonically by the pipeline, so the highest
//! suffix (absent counting as 0) is the most recent upload.

use crate::models::Media;
use crate::services::media;
use crate::Database;
use anyhow::Result;
use regex::Regex;

/// A logical asset name reduced to its `(base, extension)` pair, with any
/// directory component and collision suffix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalName {
    pub base: String,
    pub extension: String,
}

impl LogicalName {
    /// Reduce an asset reference to its logical identity.
    ///
    /// `"uploads/hero-3.jpg"` parses to base `hero`, extension `jpg`.
    /// Returns `None` when there is no stem or no extension to match on.
    pub fn parse(input: &str) -> Option<Self> {
        let filename = input
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(input);

        let (stem, extension) = filename.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() {
            return None;
        }

        Some(Self {
            base: strip_collision_suffix(stem).to_string(),
            extension: extension.to_string(),
        })
    }

    /// Pattern matching any stored filename for this logical name: the base
    /// (case-insensitive), an optional collision suffix, and the exact
    /// extension. Base and extension are escaped so logical names containing
    /// regex metacharacters cannot break or widen the pattern.
    fn stored_name_pattern(&self) -> Result<Regex> {
        let pattern = format!(
            r"^(?i:{})(-(\d+))?\.{}$",
            regex::escape(&self.base),
            regex::escape(&self.extension)
        );
        Ok(Regex::new(&pattern)?)
    }
}

/// Strip a trailing `-<digits>` collision suffix from a filename stem.
pub fn strip_collision_suffix(stem: &str) -> &str {
    match stem.rsplit_once('-') {
        Some((base, digits))
            if !base.is_empty() && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => stem,
    }
}

fn collision_suffix_value(stored: &str, pattern: &Regex) -> Option<u64> {
    let caps = pattern.captures(stored)?;
    match caps.get(2) {
        Some(digits) => digits.as_str().parse().ok(),
        None => Some(0),
    }
}

/// Find the stored record best matching a logical asset name.
///
/// Candidates come from a bounded substring search against the repository;
/// among those matching the stored-name pattern, the highest collision
/// suffix wins. `Ok(None)` is a routine outcome (render without the asset),
/// not an error.
pub fn resolve(db: &Database, input: &str, page_size: usize) -> Result<Option<Media>> {
    let logical = match LogicalName::parse(input) {
        Some(l) => l,
        None => return Ok(None),
    };
    resolve_logical(db, &logical, page_size)
}

pub fn resolve_logical(
    db: &Database,
    logical: &LogicalName,
    page_size: usize,
) -> Result<Option<Media>> {
    let pattern = logical.stored_name_pattern()?;
    let candidates = media::search_media_filenames(db, &logical.base, page_size)?;

    let best = candidates
        .into_iter()
        .filter_map(|m| collision_suffix_value(&m.filename, &pattern).map(|suffix| (suffix, m)))
        .max_by_key(|(suffix, _)| *suffix)
        .map(|(_, m)| m);

    if let Some(ref m) = best {
        tracing::debug!(base = %logical.base, stored = %m.filename, "logical name resolved");
    }

    Ok(best)
}

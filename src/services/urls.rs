//! Canonical URL normalization for asset references.
//!
//! Content authored over the years refers to assets in every shape that ever
//! worked: absolute CDN URLs from a previous host, root-relative canonical
//! paths, bare filenames, structured objects, or nothing at all. Rendering
//! code should see exactly one shape. `normalize` classifies a reference
//! once at the boundary and rewrites it into a URL fetchable on the current
//! deployment. Pure, no I/O, and idempotent: normalizing an already
//! normalized value is a no-op.

use serde::Deserialize;
use url::Url;

/// The loosely-typed reference shapes that appear in stored content:
/// a plain string, an object carrying `url` and/or `filename`, or null.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAssetRef {
    Text(String),
    Object {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        filename: Option<String>,
    },
}

impl RawAssetRef {
    /// The reference string to normalize: an object's `url` wins over its
    /// `filename`; a missing reference reduces to the empty string.
    pub fn as_reference(&self) -> &str {
        match self {
            RawAssetRef::Text(s) => s,
            RawAssetRef::Object { url: Some(u), .. } => u,
            RawAssetRef::Object {
                url: None,
                filename: Some(f),
            } => f,
            RawAssetRef::Object {
                url: None,
                filename: None,
            } => "",
        }
    }
}

/// Classified asset reference. Downstream code never re-inspects the raw
/// string shape; classification happens once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// Absolute URL with an http(s) origin.
    Absolute(Url),
    /// Root-relative path already under the canonical media path.
    CanonicalRelative(String),
    /// Bare filename, or a relative path whose last segment is the filename.
    BareFilename(String),
    /// No asset. Routine in content, not an error.
    Empty,
}

pub fn classify(reference: &str, media_path: &str) -> AssetRef {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return AssetRef::Empty;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if url.scheme() == "http" || url.scheme() == "https" {
            return AssetRef::Absolute(url);
        }
    }

    if is_canonical_path(trimmed, media_path) {
        return AssetRef::CanonicalRelative(trimmed.to_string());
    }

    match trailing_filename(trimmed) {
        Some(name) => AssetRef::BareFilename(name.to_string()),
        None => AssetRef::Empty,
    }
}

/// Rewrite any asset reference into a URL fetchable on the current
/// deployment. `origin` is the canonical server origin without a trailing
/// slash; `media_path` the canonical media path prefix (e.g. `/media/file`).
pub fn normalize(reference: &str, origin: &str, media_path: &str) -> String {
    match classify(reference, media_path) {
        AssetRef::Empty => String::new(),
        AssetRef::CanonicalRelative(path) => path,
        AssetRef::BareFilename(name) => format!("{}/{}", media_path, name),
        AssetRef::Absolute(url) => {
            if is_same_origin(&url, origin) {
                // Already hosted here; keep it byte-for-byte.
                reference.trim().to_string()
            } else {
                rehost_foreign(&url, origin, media_path)
            }
        }
    }
}

/// Convenience over the loose content-side shapes.
pub fn normalize_ref(reference: Option<&RawAssetRef>, origin: &str, media_path: &str) -> String {
    match reference {
        Some(r) => normalize(r.as_reference(), origin, media_path),
        None => String::new(),
    }
}

/// Foreign host: keep the path when it is already canonical, otherwise
/// rebuild a canonical path from the trailing filename.
fn rehost_foreign(url: &Url, origin: &str, media_path: &str) -> String {
    if is_canonical_path(url.path(), media_path) {
        return format!("{}{}", origin, url.path());
    }

    match trailing_filename(url.path()) {
        Some(name) => format!("{}{}/{}", origin, media_path, name),
        None => String::new(),
    }
}

fn is_same_origin(url: &Url, origin: &str) -> bool {
    match Url::parse(origin) {
        Ok(canonical) => url.origin() == canonical.origin(),
        Err(_) => false,
    }
}

fn is_canonical_path(path: &str, media_path: &str) -> bool {
    path.strip_prefix(media_path)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn trailing_filename(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path).trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

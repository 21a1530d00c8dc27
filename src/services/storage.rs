//! Storage root resolution. Deployments put the media directory in different
//! places (explicit config, container volume, checkout-relative); the
//! resolver probes an ordered candidate list once at startup and the result
//! is carried by value from there on.

use crate::config::StorageConfig;
use std::path::{Path, PathBuf};

/// Fixed media volume path in container deployments.
pub const CONTAINER_MEDIA_DIR: &str = "/var/lib/waypost/media";

#[derive(Debug, Clone)]
pub struct StorageResolver {
    candidates: Vec<PathBuf>,
    root: PathBuf,
}

impl StorageResolver {
    /// Probe the candidate list and settle on a root. The first candidate
    /// that exists wins; if none exist, the working-directory `media`
    /// default is returned and a later per-file existence check reports the
    /// missing file, not this resolver.
    pub fn locate(config: &StorageConfig) -> Self {
        let candidates = Self::candidates(config);
        let root = candidates
            .iter()
            .find(|p| p.is_dir())
            .cloned()
            .unwrap_or_else(|| Self::default_candidate());

        tracing::info!(root = %root.display(), "storage root resolved");
        Self { candidates, root }
    }

    fn candidates(config: &StorageConfig) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(ref root) = config.root {
            candidates.push(PathBuf::from(root));
        }
        candidates.push(PathBuf::from(CONTAINER_MEDIA_DIR));
        candidates.push(Self::default_candidate());
        candidates.push(Self::cwd_join("data/media"));
        candidates
    }

    fn default_candidate() -> PathBuf {
        Self::cwd_join("media")
    }

    fn cwd_join(rel: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(rel)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a stored filename would occupy under the resolved root.
    pub fn path_for(&self, stored_filename: &str) -> PathBuf {
        self.root.join(stored_filename)
    }

    pub fn candidate_list(&self) -> &[PathBuf] {
        &self.candidates
    }
}

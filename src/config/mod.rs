use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment override for the canonical server origin.
pub const ENV_SITE_ORIGIN: &str = "WAYPOST_SITE_ORIGIN";
/// Environment override for the storage root.
pub const ENV_STORAGE_ROOT: &str = "WAYPOST_STORAGE_ROOT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Canonical server origin, e.g. `https://example.com`. References already
    /// hosted under this origin pass through normalization unchanged.
    pub origin: String,
    /// URL path prefix under which asset references are considered canonical.
    #[serde(default = "default_media_path")]
    pub media_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Explicit storage root. When unset, deployment-specific candidates are
    /// probed instead (see `services::storage`).
    #[serde(default)]
    pub root: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepositoryConfig {
    /// Upper bound on candidate rows fetched per fuzzy filename search.
    #[serde(default = "default_search_page_size")]
    pub search_page_size: usize,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            search_page_size: default_search_page_size(),
        }
    }
}

fn default_media_path() -> String {
    "/media/file".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pool_size() -> u32 {
    10
}

fn default_search_page_size() -> usize {
    200
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Are you in a waypost site directory?",
                path.display(),
                e
            )
        })?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// The two values deployments most often vary per environment.
    fn apply_env_overrides(&mut self) {
        if let Ok(origin) = std::env::var(ENV_SITE_ORIGIN) {
            if !origin.is_empty() {
                self.site.origin = origin;
            }
        }
        if let Ok(root) = std::env::var(ENV_STORAGE_ROOT) {
            if !root.is_empty() {
                self.storage.root = Some(root);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.site.origin.is_empty() {
            anyhow::bail!("site.origin must not be empty");
        }
        if url::Url::parse(&self.site.origin).is_err() {
            anyhow::bail!(
                "site.origin must be an absolute URL, got '{}'",
                self.site.origin
            );
        }
        if self.site.origin.ends_with('/') {
            anyhow::bail!("site.origin must not end with '/'");
        }
        if !self.site.media_path.starts_with('/') {
            anyhow::bail!("site.media_path must start with '/'");
        }
        if self.site.media_path.ends_with('/') {
            anyhow::bail!("site.media_path must not end with '/'");
        }
        if self.repository.search_page_size == 0 {
            anyhow::bail!("repository.search_page_size must be greater than 0");
        }
        if self.repository.search_page_size > 10_000 {
            anyhow::bail!("repository.search_page_size must be 10000 or less");
        }
        Ok(())
    }
}

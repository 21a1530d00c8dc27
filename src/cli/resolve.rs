use crate::services::matcher;
use crate::services::storage::StorageResolver;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

/// One-shot logical-name resolution from the command line. Replaces the
/// per-script lookup code content tooling used to carry.
pub async fn run(config_path: &Path, name: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;
    let storage = StorageResolver::locate(&config.storage);

    match matcher::resolve(&db, name, config.repository.search_page_size)? {
        Some(record) => {
            let path = storage.path_for(&record.filename);
            println!("{}", record.filename);
            println!("  id:   {}", record.id);
            println!("  mime: {}", record.mime_type);
            println!("  path: {}", path.display());
            if !path.is_file() {
                println!("  warning: file missing on disk");
            }
        }
        None => {
            println!("No record matches '{}'", name);
        }
    }

    Ok(())
}

use crate::services::media;
use crate::services::storage::StorageResolver;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

const SCAN_PAGE: usize = 500;

/// Environment checks plus a record/file integrity scan. A record whose
/// file is absent from the storage root will 404 at serve time; surfacing
/// those here lets operators repair the gap before readers hit it.
pub async fn run(config_path: &Path) -> Result<()> {
    println!("waypost doctor");

    let config = match Config::load(config_path) {
        Ok(c) => {
            println!("  [ok] config '{}'", config_path.display());
            c
        }
        Err(e) => {
            println!("  [fail] config: {}", e);
            return Ok(());
        }
    };

    let db = match Database::open(&config.database.path, config.database.pool_size) {
        Ok(db) => {
            println!("  [ok] database '{}'", config.database.path);
            db
        }
        Err(e) => {
            println!("  [fail] database: {}", e);
            return Ok(());
        }
    };
    db.migrate()?;

    let storage = StorageResolver::locate(&config.storage);
    if storage.root().is_dir() {
        println!("  [ok] storage root '{}'", storage.root().display());
    } else {
        println!(
            "  [warn] storage root '{}' does not exist; candidates probed:",
            storage.root().display()
        );
        for candidate in storage.candidate_list() {
            println!("         - {}", candidate.display());
        }
    }

    let total = media::count_media(&db)?;
    let mut missing = 0usize;
    let mut offset = 0usize;
    loop {
        let page = media::list_media(&db, SCAN_PAGE, offset)?;
        if page.is_empty() {
            break;
        }
        for record in &page {
            if !storage.path_for(&record.filename).is_file() {
                println!(
                    "  [warn] record {} ('{}') has no file on disk",
                    record.id, record.filename
                );
                missing += 1;
            }
        }
        offset += SCAN_PAGE;
    }

    if missing == 0 {
        println!("  [ok] {} record(s), all files present", total);
    } else {
        println!("  {} of {} record(s) missing files", missing, total);
    }

    Ok(())
}

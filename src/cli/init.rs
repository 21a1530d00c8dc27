use crate::Database;
use anyhow::Result;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"[site]
origin = "{origin}"
# media_path = "/media/file"

[server]
host = "127.0.0.1"
port = 3000

[database]
path = "data/waypost.db"

[storage]
# Explicit storage root. When commented out, deployment candidates are
# probed: /var/lib/waypost/media, ./media, ./data/media.
# root = "/var/lib/waypost/media"

[repository]
search_page_size = 200
"#;

pub async fn run(path: &Path, origin: Option<String>) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let config_path = path.join("waypost.toml");
    if config_path.exists() {
        anyhow::bail!("'{}' already exists, refusing to overwrite", config_path.display());
    }

    let origin = origin.unwrap_or_else(|| "http://localhost:3000".to_string());
    std::fs::write(&config_path, CONFIG_TEMPLATE.replace("{origin}", &origin))?;

    std::fs::create_dir_all(path.join("media"))?;

    let db = Database::open(path.join("data/waypost.db").to_string_lossy().as_ref(), 1)?;
    db.migrate()?;

    println!("Initialized waypost site at '{}'", path.display());
    println!("  config:  {}", config_path.display());
    println!("  storage: {}", path.join("media").display());
    println!("Run 'waypost serve' to start.");
    Ok(())
}

use crate::services::urls;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, reference: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    let site = &config.site;
    println!("{}", urls::normalize(reference, &site.origin, &site.media_path));
    Ok(())
}

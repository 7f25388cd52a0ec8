use std::path::PathBuf;

use anyhow::{Context, Result};

use nextstep::config::{default_config_path, write_default_config};

pub fn execute(path: Option<PathBuf>, json: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => default_config_path().context("Could not determine the platform config directory")?,
    };

    let config = write_default_config(&path)?;

    if json {
        println!("{}", serde_json::to_string(&config)?);
    } else {
        println!("Wrote {}", path.display());
        println!("  records:  {}", config.records_file);
        println!("  folders:  {}", config.jobs_folder);
    }
    Ok(())
}

//! Implementation of the `postcache init` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio::fs;

use crate::domain::models::Config;

/// Arguments for `postcache init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Write a default config file under `<path>/.postcache/config.yaml`.
pub async fn execute(args: InitArgs) -> Result<()> {
    let dir = args.path.join(".postcache");
    let file = dir.join("config.yaml");

    if file.exists() && !args.force {
        println!(
            "Config already exists at {}. Use --force to overwrite.",
            file.display()
        );
        return Ok(());
    }

    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let yaml =
        serde_yaml::to_string(&Config::default()).context("failed to serialize default config")?;
    fs::write(&file, yaml)
        .await
        .with_context(|| format!("failed to write {}", file.display()))?;

    println!("Wrote default config to {}", file.display());
    Ok(())
}

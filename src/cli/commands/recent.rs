//! Implementation of the `postcache recent` command.

use anyhow::Result;
use clap::Args;

use super::build_service;
use crate::cli::output;
use crate::domain::models::Config;

/// Arguments for `postcache recent`.
#[derive(Args, Debug)]
pub struct RecentArgs {
    /// Maximum number of posts to list
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

/// List the most recent posts, uncached.
pub async fn execute(args: RecentArgs, config: Config) -> Result<()> {
    let service = build_service(&config, true).await?;

    let posts = service.recent_posts(args.limit).await?;
    println!("{}", output::format_posts(&posts));
    Ok(())
}

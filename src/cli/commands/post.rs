//! Implementation of the `postcache post` command.

use anyhow::{bail, Result};
use clap::Args;

use super::build_service;
use crate::cli::output;
use crate::domain::models::Config;

/// Arguments for `postcache post`.
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Post id to fetch
    #[arg(long)]
    pub id: u64,
}

/// Fetch and print one post; exits non-zero if it does not exist.
pub async fn execute(args: PostArgs, config: Config) -> Result<()> {
    // Single-post lookups bypass the cache store entirely.
    let service = build_service(&config, true).await?;

    match service.post_by_id(args.id).await? {
        Some(post) => {
            println!("{}", output::format_post(&post));
            Ok(())
        }
        None => bail!("post {} not found", args.id),
    }
}

//! Implementation of the `postcache posts` command.

use anyhow::Result;
use clap::Args;

use super::build_service;
use crate::cli::output;
use crate::domain::models::Config;

/// Arguments for `postcache posts`.
#[derive(Args, Debug)]
pub struct PostsArgs {
    /// User ids to aggregate posts for
    #[arg(long = "users", num_args = 1.., required = true, value_name = "ID")]
    pub users: Vec<u64>,

    /// Skip the cache store and use a process-local in-memory cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Fan out one cache-aside fetch per user and print the aggregate.
///
/// Partial failure is not an error at the process level: failed
/// partitions are logged and the table shows whatever succeeded.
pub async fn execute(args: PostsArgs, config: Config) -> Result<()> {
    let service = build_service(&config, args.no_cache).await?;

    let posts = service.posts_for_users(&args.users).await;
    println!("{}", output::format_posts(&posts));
    println!(
        "{} post(s) across {} requested user(s)",
        posts.len(),
        args.users.len()
    );
    Ok(())
}

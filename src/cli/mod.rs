//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cache-aside blog post fetcher.
#[derive(Parser, Debug)]
#[command(name = "postcache", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to .postcache/config.yaml plus
    /// POSTCACHE_* environment overrides)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .postcache/config.yaml
    Init(commands::init::InitArgs),
    /// Fetch and aggregate posts for one or more users
    Posts(commands::posts::PostsArgs),
    /// Show a single post by id
    Post(commands::post::PostArgs),
    /// List the most recent posts
    Recent(commands::recent::RecentArgs),
}

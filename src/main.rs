//! Postcache CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postcache::cli::{commands, Cli, Commands};
use postcache::domain::models::LoggingConfig;
use postcache::infrastructure::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err:#}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args).await,
        Commands::Posts(args) => commands::posts::execute(args, config).await,
        Commands::Post(args) => commands::post::execute(args, config).await,
        Commands::Recent(args) => commands::recent::execute(args, config).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber: RUST_LOG overrides the configured
/// level; output goes to stderr so tables on stdout stay clean.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).init();
    }
}

//! grace-crawler entry point
//!
//! Serves the crawl API by default, or runs a single crawl from the command
//! line with `--once` and prints the JSON result.

use anyhow::Context;
use clap::Parser;
use grace_crawler::config::{load_config_with_hash, Config};
use grace_crawler::crawler::{
    build_http_client, CrawlLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES, REQUEST_TIMEOUT,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Grace crawl service: a bounded, polite site crawler behind a small HTTP API
#[derive(Parser, Debug)]
#[command(name = "grace-crawler")]
#[command(version = "1.0.0")]
#[command(about = "Bounded site crawler and crawl API", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Crawl a single URL, print the JSON result, and exit
    #[arg(long, value_name = "URL")]
    once: Option<String>,

    /// Page-count limit for --once
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Link-following depth limit for --once
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    match cli.once {
        Some(url) => {
            let limits = CrawlLimits {
                max_pages: cli.max_pages,
                max_depth: cli.max_depth,
            };
            handle_once(&config, &url, limits).await
        }
        None => grace_crawler::api::serve(config)
            .await
            .context("API server failed"),
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("grace_crawler=info,warn"),
            1 => EnvFilter::new("grace_crawler=debug,info"),
            2 => EnvFilter::new("grace_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Handles `--once`: one crawl, JSON to stdout
async fn handle_once(config: &Config, url: &str, limits: CrawlLimits) -> anyhow::Result<()> {
    let user_agent = config.user_agent.header_value();
    let client = build_http_client(&user_agent, REQUEST_TIMEOUT)?;

    let result = grace_crawler::crawl(&client, url, limits)
        .await
        .with_context(|| format!("crawl of {} failed", url))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

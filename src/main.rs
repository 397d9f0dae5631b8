//! shopscrape - Small, polite product scraper for the webscraper.io test site.

use anyhow::Result;
use clap::Parser;
use shopscrape::commands::ScrapeCommand;
use shopscrape::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shopscrape",
    version,
    about = "Small, polite product scraper for the webscraper.io test site",
    long_about = "Fetches one catalog page, extracts product records with CSS selector \
                  fallback chains, and writes them to a CSV file."
)]
struct Cli {
    /// URL to scrape
    #[arg(long, env = "SHOPSCRAPE_URL")]
    url: Option<String>,

    /// CSV output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of items to retrieve (0 = no limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Delay between requests in seconds
    #[arg(long, env = "SHOPSCRAPE_DELAY")]
    delay: Option<f64>,

    /// Custom User-Agent header
    #[arg(long, env = "SHOPSCRAPE_USER_AGENT")]
    user_agent: Option<String>,

    /// Retry attempts for transient HTTP failures
    #[arg(long)]
    retries: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(delay) = cli.delay {
        config.delay_secs = delay;
    }
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = Some(user_agent);
    }
    if let Some(retries) = cli.retries {
        config.retries = retries;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let delay_secs = config.delay_secs;
    let cmd = ScrapeCommand::new(config);
    cmd.execute().await?;

    // Polite pause before exiting
    if delay_secs > 0.0 {
        tokio::time::sleep(Duration::from_secs_f64(delay_secs)).await;
    }

    Ok(())
}

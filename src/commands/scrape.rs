//! Scrape command implementation.

use crate::catalog::{parse_products, CatalogClient, PageFetcher};
use crate::config::Config;
use crate::export;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes the fetch → parse → export pipeline.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pipeline and returns the number of records written.
    pub async fn execute(&self) -> Result<usize> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_fetcher(&client).await
    }

    /// Runs the pipeline with a provided fetcher (for testing).
    pub async fn execute_with_fetcher(&self, fetcher: &impl PageFetcher) -> Result<usize> {
        let html = fetcher
            .fetch(&self.config.url)
            .await
            .with_context(|| format!("Failed to fetch {}", self.config.url))?;

        debug!("Fetched {} bytes", html.len());

        let records = parse_products(&html, self.config.limit);
        info!("Parsed {} products", records.len());

        export::save_csv(&records, &self.config.output)
            .with_context(|| format!("Failed to write {}", self.config.output.display()))?;

        Ok(records.len())
    }
}

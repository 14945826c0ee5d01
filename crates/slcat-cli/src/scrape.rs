//! The scrape command: resolve, walk, export, confirm.

use slcat_core::{normalize_listing_url, AppConfig};
use slcat_scraper::{CatalogScraper, ReqwestTransport};

use crate::Cli;

/// Folds command-line overrides into the env-derived configuration.
pub(crate) fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(per_page) = cli.results_per_page {
        config.results_per_page = per_page;
    }
    if let Some(base_url) = &cli.base_url {
        config.listing_url = normalize_listing_url(base_url);
    }
    if let Some(endpoint) = &cli.search_endpoint {
        config.search_endpoint = endpoint.clone();
    }
    config
}

/// Scrapes the catalog and writes it to `cli.output` in `cli.format`.
///
/// # Errors
///
/// Returns an error if the transport cannot be built, the scrape fails
/// (configuration, HTTP status, transport or JSON errors), or the output
/// file cannot be written. Nothing is written when the scrape fails.
pub(crate) async fn run_scrape(config: AppConfig, cli: &Cli) -> anyhow::Result<()> {
    let config = apply_overrides(config, cli);
    tracing::debug!(?config, "effective configuration");

    let transport = ReqwestTransport::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let scraper = CatalogScraper::from_app_config(
        transport,
        &config,
        cli.site_id.clone(),
        cli.collection.clone(),
    );
    let records = scraper.scrape().await?;

    let discounted = records.iter().filter(|r| r.is_discounted()).count();
    tracing::info!(records = records.len(), discounted, "scrape finished");

    crate::export::write_records(&records, &cli.output, cli.format)?;

    println!(
        "{} products saved to {}",
        records.len(),
        cli.output.display()
    );
    Ok(())
}

mod export;
mod scrape;

use std::path::PathBuf;

use clap::Parser;
use slcat_core::SearchEndpoint;
use tracing_subscriber::EnvFilter;

use crate::export::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "slcat")]
#[command(about = "Scrape the Sporting Life liquidation catalog through the Searchspring API")]
struct Cli {
    /// Output file path (parent directories are created)
    #[arg(long, default_value = "data/liquidation.json")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Items requested per API page [default: SLCAT_RESULTS_PER_PAGE or 48]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    results_per_page: Option<u32>,

    /// Searchspring site identifier (auto-detected by default)
    #[arg(long)]
    site_id: Option<String>,

    /// Searchspring collection filter [default: discovered or "liquidation"]
    #[arg(long)]
    collection: Option<String>,

    /// Liquidation listing page scanned for the site identifier
    #[arg(long)]
    base_url: Option<String>,

    /// Search API endpoint: "per-site", "global", or an absolute URL
    #[arg(long)]
    search_endpoint: Option<SearchEndpoint>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = slcat_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    scrape::run_scrape(config, &cli).await
}

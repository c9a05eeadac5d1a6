use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trade_lens::data::loader;
use trade_lens::http::{DashboardServer, HttpServerConfig};

/// Trade indicator dashboard: pick dimensions from a trade dataset and view
/// generated charts.
#[derive(Parser, Debug)]
#[command(name = "trade-lens")]
#[command(version, about, long_about = None)]
struct Options {
    /// Path to the trade dataset (.csv, .json or .parquet)
    #[arg(long, default_value = "trade_year_country.csv")]
    data: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let options = Options::parse();

    let dataset = loader::load_file(&options.data)
        .with_context(|| format!("loading trade dataset from {}", options.data.display()))?;
    log::info!(
        "loaded {} trade records ({} countries, {} indicators, {} regions, {} income groups)",
        dataset.len(),
        dataset.countries.len(),
        dataset.indicators.len(),
        dataset.regions.len(),
        dataset.income_groups.len(),
    );

    let config = HttpServerConfig {
        host: options.host,
        port: options.port,
    };
    DashboardServer::with_config(dataset, config).start().await
}

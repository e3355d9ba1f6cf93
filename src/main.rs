//! # Startup Funding News
//!
//! Scrapes a paginated news listing for startup-funding announcements, visits
//! each article, and extracts funding amounts, executive names, publication
//! dates and organization names into JSON and CSV files.
//!
//! ## Usage
//!
//! ```sh
//! # Pages 1-5 of the default listing, written to ./extracted_data.{json,csv}
//! startup_funding_news
//! ```
//!
//! ## Architecture
//!
//! The application is a single sequential pipeline:
//! 1. **Listing**: Fetch each listing page and parse its article entries
//! 2. **Location**: Split each entry's excerpt into city and country
//! 3. **Enrichment**: Re-fetch the article for amounts, executives and date
//! 4. **Entities**: Tag organizations named in the title
//! 5. **Output**: Write the JSON and CSV files

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod enrich;
mod entities;
mod executives;
mod fetch;
mod location;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use entities::{PatternRecognizer, SharedRecognizer};
use fetch::HttpFetcher;
use pipeline::Pipeline;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("startup_funding_news starting up");

    // Parse CLI and resolve configuration
    let config = Cli::parse().into_config().await?;
    debug!(?config, "Resolved configuration");

    // ---- Shared resources, built once ----
    let recognizer: SharedRecognizer = Arc::new(PatternRecognizer::new()?);
    let fetcher = HttpFetcher::new(&config)?;

    // ---- Scrape ----
    let (records, summary) = Pipeline::new(&config, &fetcher, recognizer).run().await;
    info!(
        pages_fetched = summary.pages_fetched,
        pages_failed = summary.pages_failed,
        articles = summary.articles,
        "Scraping complete"
    );
    if summary.pages_fetched == 0 {
        warn!("Every listing page failed to load");
    }

    // ---- Output ----
    outputs::json::write_records(&records, &config.json_output).await?;
    outputs::csv::write_records(&records, &config.csv_output).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    println!(
        "Data has been extracted and saved to '{}' and '{}'.",
        config.json_output, config.csv_output
    );
    Ok(())
}

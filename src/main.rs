//! # Sitemap Verify
//!
//! Reads a news sitemap, extracts its articles and checks that every article
//! URL answers, fetching in paced concurrent batches.
//!
//! ## Usage
//!
//! ```sh
//! sitemap_verify --filename sitemap-news.xml
//! ```
//!
//! ## Architecture
//!
//! The application follows a short pipeline:
//! 1. **Configuration**: defaults, optional YAML file, CLI flags
//! 2. **Extraction**: parse the sitemap into item records
//! 3. **Verification**: fetch item URLs in batches of 10 (default), 500ms apart
//! 4. **Output**: print `total data <N>, success <M>` and the elapsed time, or the JSON report
//!
//! Individual URL failures never stop the run or change the exit status. A
//! missing sitemap, a malformed document or an invalid configuration stop it
//! before any request is sent.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod sources;
mod utils;
mod verify;

use cli::Cli;
use config::VerifierConfig;
use outputs::{json, summary};
use verify::HttpFetcher;

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
        .with_writer(std::io::stderr)
        .init();

    info!("sitemap_verify starting up");

    let args = Cli::parse();
    debug!(filename = %args.filename, config = ?args.config, "Parsed CLI arguments");

    let config = match VerifierConfig::resolve(&args).await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    info!(
        batch_size = config.batch_size,
        delay_ms = config.inter_batch_delay_ms,
        timeout_secs = config.timeout_secs,
        method = ?config.method,
        "Configuration resolved"
    );

    // ---- Extract items ----
    let items = match sources::sitemap::load_items(&args.filename).await {
        Ok(items) => items,
        Err(e) => {
            error!(path = %args.filename, error = %e, "Cannot load sitemap");
            return Err(e.into());
        }
    };
    for item in &items {
        debug!(
            url = %item.url,
            title = %item.title,
            publication_date = %item.publication_date,
            keywords = %item.keywords,
            "Sitemap item"
        );
    }
    let urls: Vec<String> = items.into_iter().map(|item| item.url).collect();

    // ---- Verify ----
    // One connection pool for the whole run, shared by every fetch.
    let client = config.build_client()?;
    let fetcher = HttpFetcher::new(client, config.timeout());
    let report = verify::run(&fetcher, &urls, &config).await?;

    // ---- Output ----
    if args.json {
        println!("{}", json::report_to_json(&report)?);
    } else {
        println!("{}", summary::render(&report));
    }

    info!(
        total = report.total_attempted,
        succeeded = report.total_succeeded,
        failed = report.total_failed(),
        secs = report.elapsed_seconds,
        "Execution complete"
    );

    Ok(())
}

//! Command-line interface definitions for the sitemap verifier.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Only `--filename` is required; every tuning flag is optional and, when
//! absent, falls back to the YAML config file or the built-in defaults.

use clap::Parser;

use crate::config::DispatchMethod;

/// Command-line arguments for the sitemap verifier.
///
/// # Examples
///
/// ```sh
/// # Verify every article in a news sitemap with the defaults (batches of 10, 500ms apart)
/// sitemap_verify --filename sitemap-news.xml
///
/// # Bigger batches, no pacing, JSON report on stdout
/// sitemap_verify --filename sitemap-news.xml --batch-size 25 --delay-ms 0 --json
///
/// # Worker pool instead of batches
/// sitemap_verify --filename sitemap-news.xml --method worker-pool
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the sitemap XML file
    #[arg(short, long)]
    pub filename: String,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of URLs fetched concurrently (batch size or worker count)
    #[arg(short, long, env = "VERIFY_BATCH_SIZE")]
    pub batch_size: Option<usize>,

    /// Pause between batches, in milliseconds
    #[arg(short, long, env = "VERIFY_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(short, long, env = "VERIFY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Dispatch strategy
    #[arg(short, long, value_enum)]
    pub method: Option<DispatchMethod>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Print the full report as JSON instead of the summary lines
    #[arg(long)]
    pub json: bool,
}

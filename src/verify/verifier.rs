//! Batch orchestration and aggregation.
//!
//! Only the orchestrating task touches `outcomes` and the success counter;
//! concurrent fetches hand their results back through the join, so nothing
//! here needs a lock.

use chrono::Utc;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

use super::batch::partition;
use super::fetch::Fetch;
use crate::config::{DispatchMethod, VerifierConfig};
use crate::error::ConfigError;
use crate::models::{BatchReport, FetchOutcome};

/// Verify `urls` with the strategy selected in `config`.
pub async fn run<F: Fetch>(
    fetcher: &F,
    urls: &[String],
    config: &VerifierConfig,
) -> Result<BatchReport, ConfigError> {
    match config.method {
        DispatchMethod::Batch => {
            verify(fetcher, urls, config.batch_size, config.inter_batch_delay()).await
        }
        DispatchMethod::WorkerPool => {
            verify_pooled(fetcher, urls, config.batch_size, config.inter_batch_delay()).await
        }
    }
}

/// Verify `urls` in sequential batches of at most `batch_size` concurrent fetches.
///
/// Every URL yields exactly one outcome, in input order. A failing or slow
/// URL only affects its own outcome. Batch `k + 1` starts after every fetch of
/// batch `k` has finished and `inter_batch_delay` has elapsed; no delay
/// follows the last batch.
///
/// # Errors
///
/// [`ConfigError::InvalidArgument`] if `batch_size` is zero. Nothing is fetched in that case.
#[instrument(level = "info", skip_all, fields(urls = urls.len(), batch_size = batch_size))]
pub async fn verify<F: Fetch>(
    fetcher: &F,
    urls: &[String],
    batch_size: usize,
    inter_batch_delay: Duration,
) -> Result<BatchReport, ConfigError> {
    let started_at = Utc::now();
    let t0 = Instant::now();

    let batches = partition(urls, batch_size)?;
    let batch_count = batches.len();
    info!(batches = batch_count, ?inter_batch_delay, "Starting batched verification");

    let mut outcomes: Vec<FetchOutcome> = Vec::with_capacity(urls.len());
    let mut total_succeeded = 0usize;

    for (index, batch) in batches.into_iter().enumerate() {
        let batch_t0 = Instant::now();

        // join_all resolves to results in input order, whatever the completion order.
        let results = join_all(batch.iter().map(|url| fetcher.fetch(url))).await;

        let succeeded = results.iter().filter(|o| o.is_success()).count();
        total_succeeded += succeeded;
        info!(
            batch = index + 1,
            of = batch_count,
            size = results.len(),
            succeeded,
            elapsed_ms = batch_t0.elapsed().as_millis() as u64,
            "Batch complete"
        );
        outcomes.extend(results);

        if index + 1 < batch_count && !inter_batch_delay.is_zero() {
            debug!(?inter_batch_delay, "Pausing before next batch");
            sleep(inter_batch_delay).await;
        }
    }

    Ok(finish(
        outcomes,
        total_succeeded,
        batch_count,
        DispatchMethod::Batch,
        started_at,
        t0,
    ))
}

/// Verify `urls` with a pool of `workers` concurrent slots.
///
/// A new fetch starts as soon as a slot frees up, and each fetch is preceded
/// by `per_request_delay`. Outcomes are placed back at their input index, so
/// the report order matches [`verify`].
///
/// # Errors
///
/// [`ConfigError::InvalidArgument`] if `workers` is zero.
#[instrument(level = "info", skip_all, fields(urls = urls.len(), workers = workers))]
pub async fn verify_pooled<F: Fetch>(
    fetcher: &F,
    urls: &[String],
    workers: usize,
    per_request_delay: Duration,
) -> Result<BatchReport, ConfigError> {
    if workers == 0 {
        return Err(ConfigError::InvalidArgument(
            "worker count must be greater than zero".to_string(),
        ));
    }

    let started_at = Utc::now();
    let t0 = Instant::now();
    info!(?per_request_delay, "Starting worker-pool verification");

    let mut slots: Vec<Option<FetchOutcome>> = vec![None; urls.len()];
    let mut completed = stream::iter(urls.iter().enumerate())
        .map(|(index, url)| async move {
            if !per_request_delay.is_zero() {
                sleep(per_request_delay).await;
            }
            (index, fetcher.fetch(url).await)
        })
        .buffer_unordered(workers);

    while let Some((index, outcome)) = completed.next().await {
        slots[index] = Some(outcome);
    }

    let outcomes: Vec<FetchOutcome> = slots.into_iter().flatten().collect();
    let total_succeeded = outcomes.iter().filter(|o| o.is_success()).count();

    Ok(finish(
        outcomes,
        total_succeeded,
        workers.min(urls.len()),
        DispatchMethod::WorkerPool,
        started_at,
        t0,
    ))
}

fn finish(
    outcomes: Vec<FetchOutcome>,
    total_succeeded: usize,
    batches: usize,
    method: DispatchMethod,
    started_at: chrono::DateTime<Utc>,
    t0: Instant,
) -> BatchReport {
    let elapsed = t0.elapsed();
    let report = BatchReport {
        total_attempted: outcomes.len(),
        total_succeeded,
        batches,
        method,
        started_at,
        elapsed_seconds: elapsed.as_secs_f64(),
        outcomes,
    };
    info!(
        total = report.total_attempted,
        succeeded = report.total_succeeded,
        failed = report.total_failed(),
        ?elapsed,
        "Verification complete"
    );
    report
}

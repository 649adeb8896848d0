//! Single-URL verification.
//!
//! The verifier talks to the network only through the [`Fetch`] trait so
//! dispatch logic can be exercised with scripted fetchers. [`HttpFetcher`] is
//! the production implementation on top of a shared `reqwest::Client`.

use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::models::{FailureKind, FetchOutcome, Outcome};
use crate::utils::{error_chain, truncate_for_log};

/// Anything that can turn a URL into a [`FetchOutcome`].
///
/// Implementations must not fail: every problem is reported inside the
/// returned outcome.
pub trait Fetch {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Fetches URLs through a connection pool owned by the caller.
///
/// The client is only read, so one instance can serve every concurrent fetch
/// of a run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        fetch_one(&self.client, url, self.timeout).await
    }
}

/// Issue one GET and classify the result.
///
/// Only the status line is awaited; the body is dropped unread. Emits one
/// `"<url> : <status-or-error>"` log line.
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_one(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    let outcome = match client.get(url).timeout(timeout).send().await {
        Ok(response) => FetchOutcome::status(url, response.status().as_u16()),
        Err(e) => FetchOutcome::failed(url, classify(&e), truncate_for_log(&error_chain(&e), 300)),
    };

    match &outcome.outcome {
        Outcome::Status(_) => info!("{outcome}"),
        Outcome::Failed(_) => warn!("{outcome}"),
    }
    outcome
}

fn classify(e: &reqwest::Error) -> FailureKind {
    if e.is_timeout() {
        FailureKind::Timeout
    } else if e.is_connect() {
        FailureKind::Connect
    } else if e.is_builder() {
        FailureKind::InvalidUrl
    } else if e.is_request() || e.is_redirect() || e.is_body() || e.is_decode() {
        FailureKind::Request
    } else {
        FailureKind::Other
    }
}

//! Data models for sitemap items, fetch outcomes and the run report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ItemRecord`]: One `<url>` entry extracted from a news sitemap
//! - [`FetchOutcome`]: The terminal result of verifying a single URL
//! - [`BatchReport`]: The aggregate result of a full verification run
//!
//! Outcomes and reports derive `Serialize` so the report can be printed as
//! JSON with `--json`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::config::DispatchMethod;

/// One article entry from a news sitemap.
///
/// Created once by the sitemap source and never modified afterwards. The
/// verifier only reads `url`; the remaining fields are carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    /// The article location (`<loc>`). Never empty.
    pub url: String,
    /// The article headline (`<news:title>`), possibly empty.
    pub title: String,
    /// Publication timestamp as written in the feed. Not parsed.
    pub publication_date: String,
    /// Comma separated keywords, possibly empty.
    pub keywords: String,
}

/// Why a fetch could not produce an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The per-request timeout elapsed.
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// The URL could not be turned into a request.
    InvalidUrl,
    /// The request was sent but the exchange broke down (redirect loop, protocol error...).
    Request,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connect",
            FailureKind::InvalidUrl => "invalid url",
            FailureKind::Request => "request",
            FailureKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// A captured network failure. This is data, never an `Err` crossing into the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Either the status code of a completed exchange or the failure that prevented it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "status_code")]
    Status(u16),
    #[serde(rename = "failure")]
    Failed(FetchFailure),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Status(code) => write!(f, "{code}"),
            Outcome::Failed(failure) => write!(f, "{} error: {}", failure.kind, failure.message),
        }
    }
}

/// The result of one URL verification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    /// Echoes the requested URL.
    pub url: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// The per-fetch log line: `<url> : <status-or-error>`.
impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.url, self.outcome)
    }
}

impl FetchOutcome {
    pub fn status(url: impl Into<String>, code: u16) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::Status(code),
        }
    }

    pub fn failed(url: impl Into<String>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::Failed(FetchFailure {
                kind,
                message: message.into(),
            }),
        }
    }

    /// The status code, if the exchange completed.
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            Outcome::Status(code) => Some(code),
            Outcome::Failed(_) => None,
        }
    }

    /// Only an exact `200` counts as success; redirects and other 2xx do not.
    pub fn is_success(&self) -> bool {
        self.status_code() == Some(200)
    }
}

/// Aggregate result of a verification run.
///
/// Built once by the verifier at the end of the run. `outcomes` is in input
/// order, so `outcomes[i]` always belongs to the i-th URL handed to the verifier.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Number of URLs dispatched.
    pub total_attempted: usize,
    /// Number of outcomes with status `200`.
    pub total_succeeded: usize,
    /// Number of batches executed (or workers used, for the worker pool).
    pub batches: usize,
    /// Dispatch strategy used for the run.
    pub method: DispatchMethod,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the run in seconds.
    pub elapsed_seconds: f64,
    /// One outcome per input URL, in input order.
    pub outcomes: Vec<FetchOutcome>,
}

impl BatchReport {
    /// Outcomes that are not an exact `200`, failures included.
    pub fn total_failed(&self) -> usize {
        self.total_attempted - self.total_succeeded
    }
}

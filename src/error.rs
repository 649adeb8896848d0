//! Error types for the parts of a run that can fail before verification starts.
//!
//! Per-URL network failures are not errors: they are captured as
//! [`crate::models::FetchFailure`] data by the fetcher.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a sitemap file into item records.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("cannot read sitemap {}: {source}", path.display())]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sitemap is not a valid urlset document: {0}")]
    MalformedDocument(#[from] quick_xml::DeError),
}

/// Invalid verifier configuration. Raised before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot read config file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

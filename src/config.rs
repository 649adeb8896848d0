//! Verifier configuration: defaults, optional YAML file, CLI overrides.
//!
//! Resolution order is `Default` < YAML file (`--config`) < CLI flags and
//! their environment variables. The resolved config is validated before any
//! request is sent.
//!
//! ```yaml
//! batch_size: 10
//! inter_batch_delay_ms: 500
//! timeout_secs: 10
//! method: batch
//! user_agent: sitemap_verify/0.1.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::error::ConfigError;

pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_INTER_BATCH_DELAY_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How fetches are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMethod {
    /// Fixed-size batches, all fetches of a batch in flight together, paced between batches.
    #[default]
    Batch,
    /// A fixed number of workers pulling from a queue, each pausing before every request.
    WorkerPool,
}

/// Settings for one verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifierConfig {
    /// Maximum fetches in flight at once (batch size, or worker count).
    pub batch_size: usize,
    /// Pause between batches (or before each request in the worker pool).
    pub inter_batch_delay_ms: u64,
    /// Independent timeout for every fetch.
    pub timeout_secs: u64,
    pub method: DispatchMethod,
    pub user_agent: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            inter_batch_delay_ms: DEFAULT_INTER_BATCH_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            method: DispatchMethod::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl VerifierConfig {
    /// Load a config from a YAML file. Missing keys fall back to defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load_yaml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_yaml_str(&raw)?;
        info!("Loaded configuration file");
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Build the effective config for a CLI invocation and validate it.
    pub async fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::load_yaml(path).await?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli);
        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Apply the flags that were given on the command line (or via env).
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(batch_size) = cli.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.inter_batch_delay_ms = delay_ms;
        }
        if let Some(timeout_secs) = cli.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(method) = cli.method {
            self.method = method;
        }
        if let Some(user_agent) = &cli.user_agent {
            self.user_agent = user_agent.clone();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidArgument(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidArgument(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the connection pool shared by every fetch of one run.
    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        Ok(reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout())
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = VerifierConfig::default();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.inter_batch_delay(), Duration::from_millis(500));
        assert_eq!(config.method, DispatchMethod::Batch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_keys_keep_defaults() {
        let config = VerifierConfig::from_yaml_str("batch_size: 4\nmethod: worker-pool\n").unwrap();
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.method, DispatchMethod::WorkerPool);
        assert_eq!(config.inter_batch_delay_ms, DEFAULT_INTER_BATCH_DELAY_MS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_yaml_empty_is_default() {
        assert_eq!(VerifierConfig::from_yaml_str("  \n").unwrap(), VerifierConfig::default());
    }

    #[test]
    fn test_yaml_rejects_negative_delay_and_unknown_keys() {
        assert!(matches!(
            VerifierConfig::from_yaml_str("inter_batch_delay_ms: -5"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            VerifierConfig::from_yaml_str("workers: 3"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_zero_batch_size_is_invalid() {
        let config = VerifierConfig {
            batch_size: 0,
            ..VerifierConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = VerifierConfig {
            timeout_secs: 0,
            ..VerifierConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArgument(_))));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let file = VerifierConfig::from_yaml_str("batch_size: 4\ninter_batch_delay_ms: 100\n").unwrap();
        let cli = Cli::parse_from([
            "sitemap_verify",
            "--filename",
            "sitemap.xml",
            "--batch-size",
            "25",
            "--method",
            "worker-pool",
        ]);
        let config = file.with_overrides(&cli);
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.inter_batch_delay_ms, 100);
        assert_eq!(config.method, DispatchMethod::WorkerPool);
    }

    #[tokio::test]
    async fn test_resolve_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verify.yaml");
        std::fs::write(&path, "timeout_secs: 3\n").unwrap();

        let cli = Cli::parse_from([
            "sitemap_verify",
            "--filename",
            "sitemap.xml",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = VerifierConfig::resolve(&cli).await.unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[tokio::test]
    async fn test_resolve_rejects_zero_batch_size() {
        let cli = Cli::parse_from(["sitemap_verify", "--filename", "sitemap.xml", "--batch-size", "0"]);
        assert!(matches!(
            VerifierConfig::resolve(&cli).await,
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_missing_config_file() {
        let cli = Cli::parse_from([
            "sitemap_verify",
            "--filename",
            "sitemap.xml",
            "--config",
            "/definitely/not/here.yaml",
        ]);
        assert!(matches!(
            VerifierConfig::resolve(&cli).await,
            Err(ConfigError::Unreadable { .. })
        ));
    }
}

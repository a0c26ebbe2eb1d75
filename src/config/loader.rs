//! Configuration loading utilities
//!
//! Configuration can come from a YAML file or from environment variables.

use super::models::ClientConfig;
use crate::core::errors::{FeatureServiceError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Service URL
pub const ENV_URL: &str = "FEATURE_SERVICE_URL";
/// Default geodatabase version
pub const ENV_GDB_VERSION: &str = "FEATURE_SERVICE_GDB_VERSION";
/// Timeout in seconds
pub const ENV_TIMEOUT: &str = "FEATURE_SERVICE_TIMEOUT";

impl ClientConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FeatureServiceError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: ClientConfig = serde_yaml::from_str(&content).map_err(|e| {
            FeatureServiceError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let url = lookup(ENV_URL).ok_or_else(|| {
            FeatureServiceError::Config(format!("{} is not set", ENV_URL))
        })?;

        let mut config = ClientConfig::new(url);

        if let Some(version) = lookup(ENV_GDB_VERSION) {
            config.options.gdb_version = Some(version);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            config.options.timeout = Some(timeout.parse().map_err(|e| {
                FeatureServiceError::Config(format!("Invalid timeout: {}", e))
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.url)
            .map_err(|e| FeatureServiceError::Config(format!("Invalid URL {}: {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeatureServiceError::Config(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        if self.options.timeout == Some(0) {
            return Err(FeatureServiceError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.options.event_capacity == 0 {
            return Err(FeatureServiceError::Config(
                "Event capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

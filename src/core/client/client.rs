//! Core client implementation

use super::events::EditEvent;
use crate::config::{ClientConfig, ClientOptions};
use crate::core::errors::{FeatureServiceError, Result};
use crate::core::transport::{ReqwestTransport, Transport};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;
use url::Url;

/// Client for a feature service's `applyEdits` operation.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct FeatureServiceClient {
    pub(crate) url: String,
    pub(crate) apply_edits_url: Url,
    pub(crate) options: ClientOptions,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) event_sender: broadcast::Sender<EditEvent>,
}

impl FeatureServiceClient {
    /// Create a client using the default HTTP transport
    pub fn new(url: impl Into<String>, options: ClientOptions) -> Result<Self> {
        Self::from_config(ClientConfig {
            url: url.into(),
            options,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.options)?;
        Self::build(config, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(
        url: impl Into<String>,
        options: ClientOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Self::build(
            ClientConfig {
                url: url.into(),
                options,
            },
            transport,
        )
    }

    fn build(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;

        let url = config.url.trim_end_matches('/').to_string();
        let apply_edits_url = apply_edits_url(&url)?;
        let (event_sender, _) = broadcast::channel(config.options.event_capacity);

        info!("FeatureServiceClient created for {}", url);

        Ok(Self {
            url,
            apply_edits_url,
            options: config.options,
            transport,
            event_sender,
        })
    }

    /// Service URL, without a trailing slash
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Full `applyEdits` endpoint, including `f=json`
    pub fn apply_edits_url(&self) -> &Url {
        &self.apply_edits_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

fn apply_edits_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| FeatureServiceError::Config(format!("Invalid URL {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| FeatureServiceError::Config(format!("URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .push("applyEdits");
    url.query_pairs_mut().append_pair("f", "json");

    Ok(url)
}

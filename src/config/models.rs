//! Configuration models

use serde::{Deserialize, Serialize};

/// Options applied to a client at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Geodatabase version edits are applied to, unless a call overrides it
    #[serde(default)]
    pub gdb_version: Option<String>,
    /// Request timeout in seconds; none by default
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Buffered events per subscriber before old ones are dropped
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            gdb_version: None,
            timeout: None,
            user_agent: default_user_agent(),
            event_capacity: default_event_capacity(),
        }
    }
}

/// Endpoint plus options, as loaded from a file or the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Feature service (or layer collection) URL, e.g.
    /// `https://host/arcgis/rest/services/Parcels/FeatureServer`
    pub url: String,
    #[serde(flatten)]
    pub options: ClientOptions,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: ClientOptions::default(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("feature-service-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_event_capacity() -> usize {
    64
}

//! Configuration builder

use super::models::{ClientConfig, ClientOptions};

/// Fluent builder for [`ClientConfig`]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(url),
        }
    }

    /// Default geodatabase version
    pub fn gdb_version(mut self, version: impl Into<String>) -> Self {
        self.config.options.gdb_version = Some(version.into());
        self
    }

    /// Request timeout in seconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.options.timeout = Some(timeout);
        self
    }

    /// User agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.options.user_agent = user_agent.into();
        self
    }

    /// Buffer size of the edit event channel
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.options.event_capacity = capacity;
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.config.options = options;
        self
    }

    /// Finish building; validation happens when the client is created
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

//! # feature-service-rs
//!
//! Async client for the `applyEdits` operation of a geographic feature
//! service. A batch of per-layer adds, updates and deletes is sent in one
//! request; the per-row response is reduced to a single outcome that either
//! lists the object ids assigned in every layer or reports every failed row.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feature_service::{ClientOptions, EditSet, FeatureServiceClient, Graphic};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeatureServiceClient::new(
//!         "https://example.com/arcgis/rest/services/Parcels/FeatureServer",
//!         ClientOptions::default(),
//!     )?;
//!
//!     let edits = vec![
//!         EditSet::new(0).with_adds(vec![
//!             Graphic::new()
//!                 .with_geometry(json!({"x": -122.41, "y": 37.77}))
//!                 .with_attribute("NAME", "Hydrant 12"),
//!         ]),
//!         EditSet::new(1).with_deletes(vec![42]),
//!     ];
//!
//!     match client.apply_edits(&edits).await {
//!         Ok(layers) => println!("Applied: {:?}", layers),
//!         Err(e) if e.is_batch_failure() => println!("Rolled back: {}", e),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::{ClientConfig, ClientOptions, ConfigBuilder};
pub use crate::core::{
    ApplyOptions, BatchError, BatchResult, EditEvent, EditSet, FeatureServiceClient,
    FeatureServiceError, FormRequest, Graphic, LayerEditResult, LayerOutcome, ReqwestTransport,
    Result, RowError, RowResult, SerializedEdit, Transport, TransportError,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp in seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Metadata recorded by the build script for this crate
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

//! Client configuration
//!
//! Explicit, named options for a [`FeatureServiceClient`](crate::FeatureServiceClient),
//! loadable from YAML or environment variables.

pub mod builder;
pub mod loader;
pub mod models;


pub use builder::ConfigBuilder;
pub use loader::{ENV_GDB_VERSION, ENV_TIMEOUT, ENV_URL};
pub use models::{ClientConfig, ClientOptions};

//! Common test utilities for feature-service-rs
//!
//! - Edit and response fixtures
//! - Mock feature service
//! - Custom assertions

pub mod assertions;
pub mod server;

// Re-export commonly used items
pub use fixtures::{EditFactory, ResponseFactory};
pub use server::MockFeatureService;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

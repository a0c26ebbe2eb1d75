//! Integration tests for feature-service-rs
//!
//! These tests run the client against a mock HTTP feature service.

pub mod transport_tests;

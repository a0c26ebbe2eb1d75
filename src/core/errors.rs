//! Error types for the feature service client

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Message carried by every [`BatchError`]
pub const BATCH_FAILURE_MESSAGE: &str = "At least one layer's edits failed.";

/// Status reported by every [`BatchError`]: the request itself succeeded,
/// the edits were rolled back.
pub const BATCH_FAILURE_STATUS: u16 = 200;

/// Client error
#[derive(Error, Debug)]
pub enum FeatureServiceError {
    /// The request never produced a usable response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered, but at least one row failed
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A feature could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client result type
pub type Result<T> = std::result::Result<T, FeatureServiceError>;

impl FeatureServiceError {
    /// Logical rollback: the transport succeeded, the edits did not
    pub fn is_batch_failure(&self) -> bool {
        matches!(self, FeatureServiceError::Batch(_))
    }

    /// Connectivity or response-level failure
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, FeatureServiceError::Transport(_))
    }

    /// Borrow the aggregated row failures, if any
    pub fn as_batch(&self) -> Option<&BatchError> {
        match self {
            FeatureServiceError::Batch(batch) => Some(batch),
            _ => None,
        }
    }
}

/// Failure reported by the transport layer.
///
/// These are passed to the caller untouched; nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 200 response carrying the service's `{"error": {...}}` envelope
    #[error("Service error {code}: {message}")]
    Service {
        code: i64,
        message: String,
        details: Vec<String>,
    },

    /// Body is not JSON or not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// HTTP status, when one is known
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One failed add, update or delete, tagged with its layer.
///
/// Serializes as `{"id": <layer>, ...fields of the remote error}`. An `id`
/// carried by the remote error is dropped so the layer id stays the only one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    #[serde(rename = "id")]
    pub layer_id: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl RowError {
    /// Build from the raw `error` payload of a row result
    pub fn new(layer_id: i64, error: Option<Value>) -> Self {
        let details = match error {
            Some(Value::Object(mut map)) => {
                map.remove("id");
                map
            }
            Some(Value::Null) | None => Map::new(),
            Some(other) => {
                let mut map = Map::new();
                map.insert("description".to_string(), other);
                map
            }
        };

        Self { layer_id, details }
    }

    /// Remote error code
    pub fn code(&self) -> Option<i64> {
        self.details.get("code").and_then(Value::as_i64)
    }

    /// Remote error description
    pub fn description(&self) -> Option<&str> {
        self.details
            .get("description")
            .or_else(|| self.details.get("message"))
            .and_then(Value::as_str)
    }
}

/// Aggregate of every row failure in one `applyEdits` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchError {
    pub message: String,
    pub status: u16,
    pub errors: Vec<RowError>,
}

impl BatchError {
    pub fn new(errors: Vec<RowError>) -> Self {
        Self {
            message: BATCH_FAILURE_MESSAGE.to_string(),
            status: BATCH_FAILURE_STATUS,
            errors,
        }
    }

    /// Number of failed rows across all layers
    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }

    /// Failures grouped by layer id, discovery order kept within each layer
    pub fn errors_by_layer(&self) -> BTreeMap<i64, Vec<&RowError>> {
        let mut grouped: BTreeMap<i64, Vec<&RowError>> = BTreeMap::new();
        for error in &self.errors {
            grouped.entry(error.layer_id).or_default().push(error);
        }
        grouped
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} failed rows)", self.message, self.errors.len())
    }
}

impl std::error::Error for BatchError {}

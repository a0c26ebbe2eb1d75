//! Core functionality of the feature service client
//!
//! Edit serialization, response aggregation, errors, transport and the
//! client itself.

pub mod client;
pub mod edits;
pub mod errors;
pub mod results;
pub mod transport;

pub use client::{ApplyOptions, EditEvent, FeatureServiceClient};
pub use edits::{EditSet, Graphic, SerializedEdit, encode_edits, serialize_edits};
pub use errors::{BatchError, FeatureServiceError, Result, RowError, TransportError};
pub use results::{BatchResult, LayerEditResult, LayerOutcome, RowResult};
pub use transport::{FormRequest, ReqwestTransport, Transport};

//! Feature service client
//!
//! Applies batches of per-layer edits with a single `applyEdits` request and
//! reduces the per-row response to one all-or-nothing outcome.

mod apply_edits;
mod client;
mod events;
mod types;


// Re-export public types and the main client
pub use client::FeatureServiceClient;
pub use events::EditEvent;
pub use types::ApplyOptions;

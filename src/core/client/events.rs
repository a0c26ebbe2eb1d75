//! Edit notifications

use super::client::FeatureServiceClient;
use tokio::sync::broadcast;
use tracing::trace;

/// Lifecycle of an `applyEdits` call.
///
/// `Submitted` is followed by exactly one of the other variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Request is about to be sent
    Submitted { layers: usize, rows: usize },
    /// Every row succeeded
    Applied { layers: usize },
    /// At least one row failed
    Rejected { failures: usize },
    /// No usable response was received
    TransportFailed { message: String },
}

impl FeatureServiceClient {
    /// Subscribe to edit events
    pub fn subscribe(&self) -> broadcast::Receiver<EditEvent> {
        self.event_sender.subscribe()
    }

    pub(crate) fn emit(&self, event: EditEvent) {
        // No subscribers is not an error
        if self.event_sender.send(event).is_err() {
            trace!("No edit event subscribers");
        }
    }
}

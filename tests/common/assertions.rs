//! Custom test assertions

use feature_service::{BatchError, LayerOutcome};

/// Assertions for batch failures
pub trait BatchErrorAssertions {
    /// Assert the status and message every batch failure carries
    fn assert_rolled_back(&self);

    /// Assert the failing layers, in discovery order
    fn assert_failed_layers(&self, expected: &[i64]);
}

impl BatchErrorAssertions for BatchError {
    fn assert_rolled_back(&self) {
        assert_eq!(self.status, 200, "Batch failures report status 200");
        assert_eq!(self.message, "At least one layer's edits failed.");
        assert!(
            !self.errors.is_empty(),
            "Expected at least one row error in a batch failure"
        );
    }

    fn assert_failed_layers(&self, expected: &[i64]) {
        let layers: Vec<i64> = self.errors.iter().map(|e| e.layer_id).collect();
        assert_eq!(layers, expected);
    }
}

/// Assert the ids reported for a layer's adds
pub fn assert_added(outcome: &LayerOutcome, layer_id: i64, ids: &[i64]) {
    assert_eq!(outcome.layer_id, layer_id);
    assert_eq!(outcome.adds, ids, "unexpected added ids for layer {}", layer_id);
}

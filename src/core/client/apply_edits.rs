//! `applyEdits` request building and response handling

use super::client::FeatureServiceClient;
use super::events::EditEvent;
use super::types::ApplyOptions;
use crate::core::edits::{EditSet, encode_edits};
use crate::core::errors::{FeatureServiceError, Result};
use crate::core::results::{BatchResult, aggregate, parse_response};
use crate::core::transport::FormRequest;
use serde::Serialize;
use tracing::{debug, error, warn};

impl FeatureServiceClient {
    /// Apply edits with rollback requested, using the client's default
    /// geodatabase version
    pub async fn apply_edits<F: Serialize>(&self, edits: &[EditSet<F>]) -> Result<BatchResult> {
        self.apply_edits_with(edits, ApplyOptions::default()).await
    }

    /// Apply edits in a single request.
    ///
    /// Resolves only when every add, update and delete in every layer
    /// succeeded. Row failures are all collected into one
    /// [`BatchError`](crate::BatchError); transport failures are returned as
    /// they were reported.
    pub async fn apply_edits_with<F: Serialize>(
        &self,
        edits: &[EditSet<F>],
        options: ApplyOptions,
    ) -> Result<BatchResult> {
        let request = self.build_request(edits, &options)?;
        let rows: usize = edits.iter().map(EditSet::len).sum();

        debug!(
            "Applying edits to {} layers ({} rows) at {}",
            edits.len(),
            rows,
            request.url
        );
        self.emit(EditEvent::Submitted {
            layers: edits.len(),
            rows,
        });

        let body = match self.transport.post_form(request).await {
            Ok(body) => body,
            Err(e) => {
                error!("applyEdits request failed: {}", e);
                self.emit(EditEvent::TransportFailed {
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let outcome = parse_response(body)
            .map_err(FeatureServiceError::from)
            .and_then(aggregate);

        match &outcome {
            Ok(layers) => {
                debug!("applyEdits succeeded for {} layers", layers.len());
                self.emit(EditEvent::Applied {
                    layers: layers.len(),
                });
            }
            Err(FeatureServiceError::Batch(batch)) => {
                warn!(
                    "applyEdits rejected: {} failed rows across {} layers",
                    batch.failure_count(),
                    batch.errors_by_layer().len()
                );
                self.emit(EditEvent::Rejected {
                    failures: batch.failure_count(),
                });
            }
            Err(e) => {
                error!("applyEdits response could not be normalized: {}", e);
                self.emit(EditEvent::TransportFailed {
                    message: e.to_string(),
                });
            }
        }

        outcome
    }

    /// Build the form request for a batch without sending it
    pub fn build_request<F: Serialize>(
        &self,
        edits: &[EditSet<F>],
        options: &ApplyOptions,
    ) -> Result<FormRequest> {
        let mut form = vec![
            ("edits".to_string(), encode_edits(edits)?),
            (
                "rollbackOnFailure".to_string(),
                options.rollback_on_failure.to_string(),
            ),
        ];

        let gdb_version = options
            .gdb_version
            .as_ref()
            .or(self.options.gdb_version.as_ref());
        if let Some(version) = gdb_version {
            form.push(("gdbVersion".to_string(), version.clone()));
        }

        Ok(FormRequest {
            url: self.apply_edits_url.clone(),
            form,
        })
    }
}

//! `applyEdits` response types and aggregation

use crate::core::errors::{BatchError, Result, RowError, TransportError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Outcome of a single add, update or delete as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Per-layer entry of the service response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerEditResult {
    pub id: i64,
    #[serde(default)]
    pub add_results: Vec<RowResult>,
    #[serde(default)]
    pub update_results: Vec<RowResult>,
    #[serde(default)]
    pub delete_results: Vec<RowResult>,
}

/// Identifiers assigned to one layer's successful rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerOutcome {
    #[serde(rename = "id")]
    pub layer_id: i64,
    pub adds: Vec<i64>,
    pub updates: Vec<i64>,
    pub deletes: Vec<i64>,
}

impl LayerOutcome {
    pub fn new(layer_id: i64) -> Self {
        Self {
            layer_id,
            ..Default::default()
        }
    }
}

/// Successful batch: one outcome per layer, in response order
pub type BatchResult = Vec<LayerOutcome>;

/// Parse a raw response body into per-layer results
pub fn parse_response(body: Value) -> std::result::Result<Vec<LayerEditResult>, TransportError> {
    serde_json::from_value(body).map_err(|e| {
        TransportError::InvalidResponse(format!("unexpected applyEdits response: {}", e))
    })
}

/// Classify every row of every layer.
///
/// All rows are visited before deciding; a single failed row anywhere turns
/// the whole call into a [`BatchError`]. A successful row with no object id
/// cannot be reported; when no row failed it is treated as a malformed
/// response.
pub fn aggregate(layers: Vec<LayerEditResult>) -> Result<BatchResult> {
    let mut outcomes = Vec::with_capacity(layers.len());
    let mut errors = Vec::new();
    let mut missing_id = None;

    for layer in layers {
        let mut outcome = LayerOutcome::new(layer.id);

        partition(
            layer.id,
            "add",
            layer.add_results,
            &mut outcome.adds,
            &mut errors,
            &mut missing_id,
        );
        partition(
            layer.id,
            "update",
            layer.update_results,
            &mut outcome.updates,
            &mut errors,
            &mut missing_id,
        );
        partition(
            layer.id,
            "delete",
            layer.delete_results,
            &mut outcome.deletes,
            &mut errors,
            &mut missing_id,
        );

        debug!(
            layer_id = outcome.layer_id,
            adds = outcome.adds.len(),
            updates = outcome.updates.len(),
            deletes = outcome.deletes.len(),
            "Normalized layer results"
        );
        outcomes.push(outcome);
    }

    if !errors.is_empty() {
        return Err(BatchError::new(errors).into());
    }
    match missing_id {
        Some(row) => Err(TransportError::InvalidResponse(format!(
            "{} succeeded without an objectId",
            row
        ))
        .into()),
        None => Ok(outcomes),
    }
}

fn partition(
    layer_id: i64,
    kind: &str,
    rows: Vec<RowResult>,
    ids: &mut Vec<i64>,
    errors: &mut Vec<RowError>,
    missing_id: &mut Option<String>,
) {
    for (index, row) in rows.into_iter().enumerate() {
        if !row.success {
            errors.push(RowError::new(layer_id, row.error));
            continue;
        }

        match row.object_id {
            Some(id) => ids.push(id),
            // First one wins
            None if missing_id.is_none() => {
                *missing_id = Some(format!("layer {} {} result {}", layer_id, kind, index));
            }
            None => {}
        }
    }
}

//! Edit batches and their wire projection

use crate::core::errors::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Edits targeting a single layer of the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de>"))]
pub struct EditSet<F = Graphic> {
    /// Layer id on the remote service
    #[serde(rename = "id")]
    pub layer_id: i64,
    /// Features to insert
    #[serde(default, deserialize_with = "null_as_empty")]
    pub adds: Vec<F>,
    /// Features to update, identified by their object id attribute
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updates: Vec<F>,
    /// Object ids to delete
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deletes: Vec<i64>,
}

impl<F> EditSet<F> {
    /// Empty edit set for a layer
    pub fn new(layer_id: i64) -> Self {
        Self {
            layer_id,
            adds: Vec::new(),
            updates: Vec::new(),
            deletes: Vec::new(),
        }
    }

    pub fn with_adds(mut self, adds: impl IntoIterator<Item = F>) -> Self {
        self.adds.extend(adds);
        self
    }

    pub fn with_updates(mut self, updates: impl IntoIterator<Item = F>) -> Self {
        self.updates.extend(updates);
        self
    }

    pub fn with_deletes(mut self, deletes: impl IntoIterator<Item = i64>) -> Self {
        self.deletes.extend(deletes);
        self
    }

    /// Total number of rows this set will touch
    pub fn len(&self) -> usize {
        self.adds.len() + self.updates.len() + self.deletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Serialize> EditSet<F> {
    /// Project onto the wire format, order preserved
    pub fn to_serialized(&self) -> Result<SerializedEdit> {
        Ok(SerializedEdit {
            id: self.layer_id,
            adds: serialize_features(&self.adds)?,
            updates: serialize_features(&self.updates)?,
            deletes: self.deletes.clone(),
        })
    }
}

/// A feature in the service's JSON representation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Graphic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(mut self, geometry: Value) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// One element of the `edits` request parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedEdit {
    pub id: i64,
    pub adds: Vec<Value>,
    pub updates: Vec<Value>,
    pub deletes: Vec<i64>,
}

/// Serialize every edit set, keeping input order
pub fn serialize_edits<F: Serialize>(edits: &[EditSet<F>]) -> Result<Vec<SerializedEdit>> {
    edits.iter().map(EditSet::to_serialized).collect()
}

/// Encode edit sets as the JSON string sent in the `edits` parameter
pub fn encode_edits<F: Serialize>(edits: &[EditSet<F>]) -> Result<String> {
    let serialized = serialize_edits(edits)?;
    Ok(serde_json::to_string(&serialized)?)
}

fn serialize_features<F: Serialize>(features: &[F]) -> Result<Vec<Value>> {
    features
        .iter()
        .map(|feature| serde_json::to_value(feature).map_err(Into::into))
        .collect()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

//! The JSON Schema document produced by a conversion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A finished JSON Schema document.
///
/// Stored as a plain JSON object because `schema_overwrite` may replace any
/// top-level key with arbitrary content. Key order is insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchemaDocument(Map<String, Value>);

impl JsonSchemaDocument {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Look up a top-level keyword.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Names listed under `required`.
    pub fn required(&self) -> Vec<&str> {
        self.0
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The `properties` map.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.0.get("properties").and_then(Value::as_object)
    }

    /// A single property schema.
    pub fn property(&self, name: &str) -> Option<&Map<String, Value>> {
        self.properties()?.get(name)?.as_object()
    }

    pub fn additional_properties(&self) -> Option<bool> {
        self.0.get("additionalProperties").and_then(Value::as_bool)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Serialize with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Serialize on a single line.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<JsonSchemaDocument> for Value {
    fn from(doc: JsonSchemaDocument) -> Self {
        doc.into_value()
    }
}

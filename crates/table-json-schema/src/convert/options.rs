//! Per-call conversion options.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Draft used for `$schema` unless the caller declares another.
pub const DEFAULT_SCHEMA_DECLARATION: &str = "http://json-schema.org/draft-07/schema#";

/// Options recognised by [`SchemaConverter::convert`](super::SchemaConverter::convert).
///
/// Every field is optional when deserialized; unknown fields are rejected so
/// that a misspelt option fails loudly instead of being ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Value of the document's `additionalProperties` (default: false).
    pub allow_additional_properties: bool,

    /// Columns skipped entirely.
    pub exclude_properties: HashSet<String>,

    /// Columns never listed in `required`.
    pub exclude_required: HashSet<String>,

    /// Columns always listed in `required`. Wins over `exclude_required`.
    pub include_required: HashSet<String>,

    /// Render `decimal(P,S)` columns as patterned strings.
    pub decimals_to_pattern: bool,

    /// Synthesize a `description` for each property.
    pub has_schema_property_description: bool,

    /// Do not copy column defaults into `default`.
    pub ignore_property_defaults: bool,

    /// Emit the minimum-side bound keyword as well as the maximum.
    pub add_property_minimum_value: bool,

    /// Property key renames (old → new), applied last.
    pub overwrite_schema_property_keys: HashMap<String, String>,

    /// Per-column property merges or replacements.
    pub overwrite_schema_properties: HashMap<String, PropertyOverride>,

    /// Extra properties not backed by any column.
    pub add_schema_properties: Map<String, Value>,

    /// Copied verbatim to the document's `dependencies`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,

    /// `$schema` value; an empty string omits the keyword.
    pub schema_declaration: String,

    /// Shallow-merged over the finished document.
    pub schema_overwrite: Map<String, Value>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            allow_additional_properties: false,
            exclude_properties: HashSet::new(),
            exclude_required: HashSet::new(),
            include_required: HashSet::new(),
            decimals_to_pattern: false,
            has_schema_property_description: false,
            ignore_property_defaults: false,
            add_property_minimum_value: false,
            overwrite_schema_property_keys: HashMap::new(),
            overwrite_schema_properties: HashMap::new(),
            add_schema_properties: Map::new(),
            dependencies: None,
            schema_declaration: DEFAULT_SCHEMA_DECLARATION.to_string(),
            schema_overwrite: Map::new(),
        }
    }
}

/// How a [`PropertyOverride`] combines with the computed property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideAction {
    /// Layer the override's keys over the computed property.
    #[default]
    Merge,
    /// Discard the computed property.
    Overwrite,
}

/// A partial property plus the `_action` controlling how it is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOverride {
    #[serde(rename = "_action", default)]
    pub action: OverrideAction,

    #[serde(flatten)]
    pub property: Map<String, Value>,
}

impl PropertyOverride {
    pub fn merge(property: Map<String, Value>) -> Self {
        Self {
            action: OverrideAction::Merge,
            property,
        }
    }

    pub fn overwrite(property: Map<String, Value>) -> Self {
        Self {
            action: OverrideAction::Overwrite,
            property,
        }
    }

    /// Apply this override to `target` in place.
    pub fn apply_to(self, target: &mut Value) {
        match (self.action, target) {
            (OverrideAction::Merge, Value::Object(existing)) => {
                for (key, value) in self.property {
                    existing.insert(key, value);
                }
            }
            (_, target) => *target = Value::Object(self.property),
        }
    }
}

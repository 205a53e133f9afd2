//! Configuration type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::convert::ConvertOptions;
use crate::core::Column;
use crate::dialect::MapOverrides;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Source dialect (default: "MySQL").
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Replacements for individual dialect table keys.
    #[serde(default)]
    pub overrides: MapOverrides,

    /// Options applied to every conversion.
    #[serde(default)]
    pub options: ConvertOptions,

    /// Table name → columns in declaration order.
    pub tables: BTreeMap<String, Vec<Column>>,
}

fn default_dialect() -> String {
    "MySQL".to_string()
}

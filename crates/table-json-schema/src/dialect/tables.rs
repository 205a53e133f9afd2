//! Lookup tables that drive the conversion.
//!
//! A [`DialectTables`] value bundles every per-dialect map the converter
//! consults. Built-in dialects supply defaults; callers layer
//! [`MapOverrides`] on top once, at converter construction.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema base type a column data type resolves to.
///
/// `Enum` is kept as its own category through the pipeline; enum properties
/// are rendered with an `enum` keyword and no `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Enum,
    Object,
}

impl JsonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Enum => "enum",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[min, max]` bounds.
///
/// The minimum is signed and the maximum unsigned so that both the signed
/// and unsigned BIGINT ranges fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundPair(pub i64, pub u64);

impl BoundPair {
    pub fn min(&self) -> i64 {
        self.0
    }

    pub fn max(&self) -> u64 {
        self.1
    }

    pub fn min_value(&self) -> Value {
        Value::from(self.0)
    }

    pub fn max_value(&self) -> Value {
        Value::from(self.1)
    }
}

/// Length map entry for a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthBounds {
    /// Bounds that do not depend on signedness (string widths).
    Flat(BoundPair),
    /// Numeric bounds split by signedness.
    Signed {
        signed: BoundPair,
        unsigned: BoundPair,
    },
}

/// Keyword names used to express a type's `(min, max)` bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeKeywords(pub String, pub String);

impl RangeKeywords {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self(min.into(), max.into())
    }

    pub fn min(&self) -> &str {
        &self.0
    }

    pub fn max(&self) -> &str {
        &self.1
    }
}

/// Dialect data type → JSON base type.
pub type TypeMap = HashMap<String, JsonType>;
/// Dialect data type → numeric bounds.
pub type LengthMap = HashMap<String, LengthBounds>;
/// JSON base type → bound keyword names.
pub type LengthTypeMap = HashMap<JsonType, RangeKeywords>;
/// Dialect data type → regular expression.
pub type PatternMap = HashMap<String, String>;
/// Dialect data type → JSON Schema `format`.
pub type FormatMap = HashMap<String, String>;

/// Every lookup table the converter consults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialectTables {
    pub type_map: TypeMap,
    pub length_map: LengthMap,
    pub length_type_map: LengthTypeMap,
    pub pattern_map: PatternMap,
    pub format_map: FormatMap,
}

/// Lookup key for a dialect data type: trimmed and lowercased.
pub fn normalize_type_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn normalized<V>(map: HashMap<String, V>) -> impl Iterator<Item = (String, V)> {
    map.into_iter()
        .map(|(key, value)| (normalize_type_name(&key), value))
}

impl DialectTables {
    /// Shallow-merge `overrides` over these tables; caller keys win.
    ///
    /// Data type keys are normalized with [`normalize_type_name`] so they
    /// match the lookup the converter performs.
    pub fn merged(mut self, overrides: MapOverrides) -> Self {
        if let Some(map) = overrides.type_map {
            self.type_map.extend(normalized(map));
        }
        if let Some(map) = overrides.length_map {
            self.length_map.extend(normalized(map));
        }
        if let Some(map) = overrides.length_type_map {
            self.length_type_map.extend(map);
        }
        if let Some(map) = overrides.pattern_map {
            self.pattern_map.extend(normalized(map));
        }
        if let Some(map) = overrides.format_map {
            self.format_map.extend(normalized(map));
        }
        self
    }
}

/// Caller-supplied replacements for individual dialect table keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_map: Option<TypeMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_map: Option<LengthMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_type_map: Option<LengthTypeMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_map: Option<PatternMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_map: Option<FormatMap>,
}

impl MapOverrides {
    pub fn is_empty(&self) -> bool {
        self.type_map.is_none()
            && self.length_map.is_none()
            && self.length_type_map.is_none()
            && self.pattern_map.is_none()
            && self.format_map.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DialectTables {
        let mut tables = DialectTables::default();
        tables.type_map.insert("varchar".into(), JsonType::String);
        tables.type_map.insert("int".into(), JsonType::Integer);
        tables
    }

    #[test]
    fn test_merge_caller_keys_win() {
        let overrides = MapOverrides {
            type_map: Some(HashMap::from([
                ("varchar".to_string(), JsonType::Object),
                ("uuid".to_string(), JsonType::String),
            ])),
            ..Default::default()
        };
        let merged = base().merged(overrides);
        assert_eq!(merged.type_map["varchar"], JsonType::Object);
        assert_eq!(merged.type_map["uuid"], JsonType::String);
        assert_eq!(merged.type_map["int"], JsonType::Integer);
    }

    #[test]
    fn test_merge_normalizes_override_keys() {
        let overrides = MapOverrides {
            type_map: Some(HashMap::from([
                (" GEOMETRY ".to_string(), JsonType::Object),
                ("VarChar".to_string(), JsonType::Object),
            ])),
            pattern_map: Some(HashMap::from([("YEAR".to_string(), "^y$".to_string())])),
            length_map: Some(HashMap::from([(
                "Char".to_string(),
                LengthBounds::Flat(BoundPair(1, 2)),
            )])),
            format_map: Some(HashMap::from([("DATE".to_string(), "date".to_string())])),
            ..Default::default()
        };
        let merged = base().merged(overrides);
        assert_eq!(merged.type_map["geometry"], JsonType::Object);
        assert_eq!(merged.type_map["varchar"], JsonType::Object);
        assert!(!merged.type_map.contains_key("VarChar"));
        assert_eq!(merged.pattern_map["year"], "^y$");
        assert_eq!(merged.length_map["char"], LengthBounds::Flat(BoundPair(1, 2)));
        assert_eq!(merged.format_map["date"], "date");
    }

    #[test]
    fn test_merge_empty_is_identity() {
        assert!(MapOverrides::default().is_empty());
        assert_eq!(base().merged(MapOverrides::default()), base());
    }

    #[test]
    fn test_length_bounds_deserialize_both_shapes() {
        let flat: LengthBounds = serde_yaml::from_str("[0, 255]").unwrap();
        assert_eq!(flat, LengthBounds::Flat(BoundPair(0, 255)));

        let split: LengthBounds =
            serde_yaml::from_str("{ signed: [-128, 127], unsigned: [0, 255] }").unwrap();
        assert_eq!(
            split,
            LengthBounds::Signed {
                signed: BoundPair(-128, 127),
                unsigned: BoundPair(0, 255),
            }
        );
    }

    #[test]
    fn test_overrides_reject_unknown_json_type() {
        let result: std::result::Result<MapOverrides, _> =
            serde_yaml::from_str("type_map: { geometry: polygon }");
        assert!(result.is_err());
    }
}

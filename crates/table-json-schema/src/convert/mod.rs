//! Column metadata → JSON Schema conversion.
//!
//! [`SchemaConverter`] owns the effective lookup tables for one dialect and
//! turns a table's columns into a [`JsonSchemaDocument`]:
//!
//! ```rust
//! use table_json_schema::{Column, ConvertOptions, SchemaConverter, TableCatalog};
//!
//! let catalog = TableCatalog::new().with_table(
//!     "users",
//!     vec![Column::new("id", "int").auto_increment(), Column::new("nick", "varchar").nullable()],
//! );
//! let converter = SchemaConverter::builder()
//!     .provider(catalog)
//!     .dialect("MySQL")
//!     .build()
//!     .unwrap();
//!
//! let doc = converter.convert("users", &ConvertOptions::default()).unwrap();
//! assert_eq!(doc.required(), vec!["id"]);
//! ```
//!
//! # Pipeline
//!
//! Each column is typed, bounded, checked for required-ness, given its
//! default, enum members, nullability, decimal pattern, dialect pattern and
//! description. Once every column is computed, `add_schema_properties` are
//! injected, overrides run in column order, and finally all key renames are
//! applied together in one pass.

pub mod describe;
mod document;
mod options;
pub mod range;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::core::schema::{Column, ColumnSize};
use crate::core::traits::ColumnMetadataProvider;
use crate::dialect::{normalize_type_name, Dialect, DialectTables, JsonType, MapOverrides};
use crate::error::{Result, SchemaError};

pub use document::JsonSchemaDocument;
pub use options::{ConvertOptions, OverrideAction, PropertyOverride, DEFAULT_SCHEMA_DECLARATION};

/// Converts table column metadata into JSON Schema documents.
pub struct SchemaConverter {
    provider: Arc<dyn ColumnMetadataProvider>,
    dialect: Dialect,
    tables: DialectTables,
}

impl std::fmt::Debug for SchemaConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaConverter")
            .field("dialect", &self.dialect)
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

impl SchemaConverter {
    /// Start building a converter.
    pub fn builder() -> SchemaConverterBuilder {
        SchemaConverterBuilder::default()
    }

    /// Build a converter with the dialect's default tables.
    pub fn new(provider: impl ColumnMetadataProvider + 'static, dialect: &str) -> Result<Self> {
        Self::builder().provider(provider).dialect(dialect).build()
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The effective (defaults + overrides) lookup tables.
    pub fn tables(&self) -> &DialectTables {
        &self.tables
    }

    /// Convert the columns of `source` into a JSON Schema document.
    pub fn convert(&self, source: &str, options: &ConvertOptions) -> Result<JsonSchemaDocument> {
        if source.trim().is_empty() {
            return Err(SchemaError::MissingSource);
        }

        let columns = self.provider.columns_for(source)?;
        debug!("Loaded {} columns for {}", columns.len(), source);

        let mut required: Vec<Value> = Vec::new();
        let mut properties = Map::new();
        let mut converted: Vec<String> = Vec::with_capacity(columns.len());

        for column in &columns {
            if options.exclude_properties.contains(&column.name) {
                debug!("Skipping excluded column {}.{}", source, column.name);
                continue;
            }

            let (property, is_required) = self.convert_column(source, column, options)?;
            if is_required {
                required.push(Value::String(column.name.clone()));
            }
            properties.insert(column.name.clone(), Value::Object(property));
            converted.push(column.name.clone());
        }

        for (key, value) in &options.add_schema_properties {
            properties.insert(key.clone(), value.clone());
        }

        let added = options
            .add_schema_properties
            .keys()
            .filter(|key| !converted.contains(key))
            .cloned()
            .collect::<Vec<_>>();

        let mut pending = options.overwrite_schema_properties.clone();
        for key in converted.iter().chain(added.iter()) {
            if let Some(over) = pending.remove(key) {
                if let Some(target) = properties.get_mut(key) {
                    debug!("Applying {:?} override to {}.{}", over.action, source, key);
                    over.apply_to(target);
                }
            }
        }
        for key in pending.keys() {
            warn!("Property override for {}.{} matched no property", source, key);
        }

        let properties = rename_keys(properties, &options.overwrite_schema_property_keys, source);

        let mut document = Map::new();
        if !options.schema_declaration.is_empty() {
            document.insert(
                "$schema".to_string(),
                Value::String(options.schema_declaration.clone()),
            );
        }
        document.insert("type".to_string(), json!("object"));
        document.insert("required".to_string(), Value::Array(required));
        document.insert("properties".to_string(), Value::Object(properties));
        document.insert(
            "additionalProperties".to_string(),
            Value::Bool(options.allow_additional_properties),
        );
        if let Some(dependencies) = &options.dependencies {
            document.insert("dependencies".to_string(), dependencies.clone());
        }
        for (key, value) in &options.schema_overwrite {
            document.insert(key.clone(), value.clone());
        }

        info!(
            "Converted {} ({} of {} columns)",
            source,
            converted.len(),
            columns.len()
        );

        Ok(JsonSchemaDocument::new(document))
    }

    /// Compute one column's property and whether it is required.
    fn convert_column(
        &self,
        source: &str,
        column: &Column,
        options: &ConvertOptions,
    ) -> Result<(Map<String, Value>, bool)> {
        let data_type = normalize_type_name(&column.data_type);
        let json_type = *self.tables.type_map.get(&data_type).ok_or_else(|| {
            SchemaError::unknown_column_type(source, &column.name, &column.data_type)
        })?;

        let mut property = Map::new();
        if json_type != JsonType::Enum {
            property.insert("type".to_string(), json!(json_type.as_str()));
        }

        if let Some(format) = self.tables.format_map.get(&data_type) {
            property.insert("format".to_string(), json!(format));
        } else if let Some(bounds) = self.tables.length_map.get(&data_type) {
            if let Some(keywords) = self.tables.length_type_map.get(&json_type) {
                let bounds = range::resolve(column, bounds);
                if options.add_property_minimum_value {
                    property.insert(keywords.min().to_string(), bounds.min_value());
                }
                property.insert(keywords.max().to_string(), bounds.max_value());
            }
        }

        let is_required = is_required(column, options);

        if !options.ignore_property_defaults {
            if let Some(default) = column.default_value.as_ref().and_then(|d| d.as_scalar()) {
                property.insert("default".to_string(), default.clone());
            }
        }

        if json_type == JsonType::Enum {
            if let Some(members) = column.members() {
                property.insert("enum".to_string(), json!(members));
            }
        }

        if column.is_nullable && !is_required {
            if json_type == JsonType::Enum {
                match property.get_mut("enum") {
                    Some(Value::Array(members)) => members.push(json!("null")),
                    _ => debug!(
                        "Enum column {}.{} has no members; left unconstrained",
                        source, column.name
                    ),
                }
            } else {
                property.insert("type".to_string(), json!([json_type.as_str(), "null"]));
            }
        }

        if options.decimals_to_pattern && json_type == JsonType::Number {
            if let Some(ColumnSize::Precision(precision, scale)) = column.size {
                property.insert("type".to_string(), json!("string"));
                property.insert(
                    "pattern".to_string(),
                    json!(decimal_pattern(precision, scale)),
                );
            }
        }

        if let Some(pattern) = self.tables.pattern_map.get(&data_type) {
            property.insert("pattern".to_string(), json!(pattern));
        }

        if options.has_schema_property_description && !property.contains_key("description") {
            let field = options
                .overwrite_schema_property_keys
                .get(&column.name)
                .unwrap_or(&column.name);
            let description = describe::describe(&property, field);
            property.insert("description".to_string(), Value::String(description));
        }

        debug!(
            "Column {}.{} ({}) -> {}{}",
            source,
            column.name,
            column.data_type,
            json_type,
            if is_required { " [required]" } else { "" }
        );

        Ok((property, is_required))
    }
}

/// Required iff forced in, or not nullable, without a default, and not forced out.
fn is_required(column: &Column, options: &ConvertOptions) -> bool {
    if options.include_required.contains(&column.name) {
        return true;
    }
    if options.exclude_required.contains(&column.name) {
        return false;
    }
    !column.has_default() && !column.is_nullable
}

/// `^\d{1,P-S}\.\d{0,S}$`; at least one integer digit is always allowed.
fn decimal_pattern(precision: u32, scale: u32) -> String {
    let integer_digits = precision.saturating_sub(scale).max(1);
    format!(r"^\d{{1,{}}}\.\d{{0,{}}}$", integer_digits, scale)
}

/// Apply every key rename in one pass over the pre-rename keys.
///
/// Positions are kept. A rename whose target is still occupied (by a key that
/// is not itself renamed away, or by an earlier rename to the same target) is
/// skipped with a warning, so no property is ever dropped.
fn rename_keys(
    properties: Map<String, Value>,
    renames: &HashMap<String, String>,
    source: &str,
) -> Map<String, Value> {
    for key in renames.keys().filter(|key| !properties.contains_key(*key)) {
        warn!("Property rename for {}.{} matched no property", source, key);
    }

    let mut active: HashMap<&str, &str> = properties
        .keys()
        .filter_map(|key| {
            renames
                .get(key)
                .filter(|new| *new != key)
                .map(|new| (key.as_str(), new.as_str()))
        })
        .collect();

    while let Some(conflict) = first_conflict(&properties, &active) {
        warn!(
            "Property rename {}.{} -> {} collides with an existing property; keeping {}",
            source, conflict, active[conflict], conflict
        );
        active.remove(conflict);
    }

    let active: HashMap<String, String> = active
        .into_iter()
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .collect();

    properties
        .into_iter()
        .map(|(key, value)| match active.get(&key) {
            Some(new) => (new.clone(), value),
            None => (key, value),
        })
        .collect()
}

/// The first rename (in property order) whose target key is already taken.
fn first_conflict<'a>(
    properties: &'a Map<String, Value>,
    active: &HashMap<&'a str, &'a str>,
) -> Option<&'a str> {
    let mut taken: HashSet<&str> = properties
        .keys()
        .map(String::as_str)
        .filter(|key| !active.contains_key(key))
        .collect();

    properties
        .keys()
        .map(String::as_str)
        .find(|key| active.get(key).is_some_and(|new| !taken.insert(*new)))
}

/// Builder for [`SchemaConverter`].
#[derive(Default)]
pub struct SchemaConverterBuilder {
    provider: Option<Arc<dyn ColumnMetadataProvider>>,
    dialect: Option<String>,
    overrides: MapOverrides,
}

impl SchemaConverterBuilder {
    /// Set the column metadata provider (required).
    pub fn provider(mut self, provider: impl ColumnMetadataProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Set an already shared provider.
    pub fn shared_provider(mut self, provider: Arc<dyn ColumnMetadataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the dialect name (required), e.g. "MySQL".
    pub fn dialect(mut self, name: impl Into<String>) -> Self {
        self.dialect = Some(name.into());
        self
    }

    /// Replace all map overrides at once.
    pub fn overrides(mut self, overrides: MapOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn type_map(mut self, map: crate::dialect::TypeMap) -> Self {
        self.overrides.type_map = Some(map);
        self
    }

    pub fn length_map(mut self, map: crate::dialect::LengthMap) -> Self {
        self.overrides.length_map = Some(map);
        self
    }

    pub fn length_type_map(mut self, map: crate::dialect::LengthTypeMap) -> Self {
        self.overrides.length_type_map = Some(map);
        self
    }

    pub fn pattern_map(mut self, map: crate::dialect::PatternMap) -> Self {
        self.overrides.pattern_map = Some(map);
        self
    }

    pub fn format_map(mut self, map: crate::dialect::FormatMap) -> Self {
        self.overrides.format_map = Some(map);
        self
    }

    /// Validate arguments, resolve the dialect and merge overrides.
    pub fn build(self) -> Result<SchemaConverter> {
        let provider = self
            .provider
            .ok_or_else(|| SchemaError::MissingArgument("column metadata provider".into()))?;
        let name = self
            .dialect
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| SchemaError::MissingArgument("schema source dialect".into()))?;
        let dialect = Dialect::from_name(&name)?;

        if !self.overrides.is_empty() {
            debug!("Merging caller map overrides over {} defaults", dialect);
        }
        let tables = dialect.tables().merged(self.overrides);

        Ok(SchemaConverter {
            provider,
            dialect,
            tables,
        })
    }
}

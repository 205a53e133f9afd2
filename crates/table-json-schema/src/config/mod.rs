//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::convert::SchemaConverter;
use crate::core::TableCatalog;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Build an in-memory catalog holding every configured table.
    pub fn catalog(&self) -> TableCatalog {
        self.tables
            .iter()
            .fold(TableCatalog::new(), |catalog, (name, columns)| {
                catalog.with_table(name.clone(), columns.clone())
            })
    }

    /// Build a converter for the configured dialect, tables and overrides.
    pub fn build_converter(&self) -> Result<SchemaConverter> {
        debug!(
            "Building {} converter for {} tables",
            self.dialect,
            self.tables.len()
        );
        SchemaConverter::builder()
            .provider(self.catalog())
            .dialect(self.dialect.clone())
            .overrides(self.overrides.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;
    use std::io::Write;

    const SAMPLE: &str = r#"
dialect: MySQL
overrides:
  type_map:
    geometry: object
options:
  decimals_to_pattern: true
  exclude_properties: [secret]
tables:
  users:
    - name: id
      data_type: bigint
      is_auto_increment: true
      extra: { unsigned: true }
    - name: price
      data_type: decimal
      size: [6, 2]
    - name: shape
      data_type: geometry
      is_nullable: true
    - name: secret
      data_type: varchar
"#;

    #[test]
    fn test_from_yaml_and_convert() {
        let config = Config::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.tables["users"].len(), 4);

        let converter = config.build_converter().unwrap();
        let doc = converter.convert("users", &config.options).unwrap();
        assert_eq!(doc.required(), vec!["id", "price"]);
        assert_eq!(doc.property("price").unwrap()["type"], json!("string"));
        assert_eq!(
            doc.property("shape").unwrap()["type"],
            json!(["object", "null"])
        );
        assert!(doc.property("secret").is_none());
    }

    #[test]
    fn test_dialect_defaults_to_mysql() {
        let config = Config::from_yaml("tables: { t: [ { name: a, data_type: int } ] }").unwrap();
        assert_eq!(config.dialect, "MySQL");
        assert_eq!(config.catalog().tables(), vec!["t"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_yaml("tables: {}\nextra_key: 1").unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
    }

    #[test]
    fn test_empty_tables_rejected() {
        let err = Config::from_yaml("tables: {}").unwrap_err();
        assert!(matches!(err, SchemaError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(config.options.decimals_to_pattern);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/schema.yaml").unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}

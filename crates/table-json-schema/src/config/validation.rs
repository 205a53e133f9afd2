//! Configuration validation.

use std::collections::HashSet;

use super::Config;
use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.dialect.trim().is_empty() {
        return Err(SchemaError::Config("dialect is required".into()));
    }
    if let Err(SchemaError::InvalidDialect { name, allowed }) = Dialect::from_name(&config.dialect)
    {
        return Err(SchemaError::Config(format!(
            "dialect must be one of {}, got '{}'",
            allowed, name
        )));
    }

    if config.tables.is_empty() {
        return Err(SchemaError::Config(
            "tables must define at least one table".into(),
        ));
    }

    for (table, columns) in &config.tables {
        if table.trim().is_empty() {
            return Err(SchemaError::Config("table names cannot be empty".into()));
        }

        let mut seen = HashSet::new();
        for column in columns {
            if column.name.trim().is_empty() {
                return Err(SchemaError::Config(format!(
                    "tables.{}: column names cannot be empty",
                    table
                )));
            }
            if column.data_type.trim().is_empty() {
                return Err(SchemaError::Config(format!(
                    "tables.{}.{}: data_type is required",
                    table, column.name
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::Config(format!(
                    "tables.{}: duplicate column '{}'",
                    table, column.name
                )));
            }
        }
    }

    Ok(())
}

//! In-memory table catalog.
//!
//! [`TableCatalog`] is the stock [`ColumnMetadataProvider`]: tables are
//! registered up front (from a configuration file or by hand in tests) and
//! looked up by name during conversion.

use std::collections::HashMap;

use crate::error::{Result, SchemaError};

use super::schema::Column;
use super::traits::ColumnMetadataProvider;

/// Registry of table column definitions keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: HashMap<String, Vec<Column>>,
}

impl TableCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a table's columns.
    pub fn register(&mut self, table: impl Into<String>, columns: Vec<Column>) {
        self.tables.insert(table.into(), columns);
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_table(mut self, table: impl Into<String>, columns: Vec<Column>) -> Self {
        self.register(table, columns);
        self
    }

    /// Registered table names, sorted.
    pub fn tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check whether a table is registered.
    pub fn contains(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl From<HashMap<String, Vec<Column>>> for TableCatalog {
    fn from(tables: HashMap<String, Vec<Column>>) -> Self {
        Self { tables }
    }
}

impl ColumnMetadataProvider for TableCatalog {
    fn columns_for(&self, source: &str) -> Result<Vec<Column>> {
        self.tables
            .get(source)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownSource(source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_table() {
        let catalog = TableCatalog::new().with_table("users", vec![Column::new("id", "int")]);
        let cols = catalog.columns_for("users").unwrap();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].name, "id");
    }

    #[test]
    fn test_unknown_table_fails() {
        let catalog = TableCatalog::new();
        let err = catalog.columns_for("ghost").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownSource(ref t) if t == "ghost"));
    }

    #[test]
    fn test_tables_sorted() {
        let catalog = TableCatalog::new()
            .with_table("orders", vec![])
            .with_table("accounts", vec![]);
        assert_eq!(catalog.tables(), vec!["accounts", "orders"]);
        assert!(catalog.contains("orders"));
        assert_eq!(catalog.len(), 2);
    }
}

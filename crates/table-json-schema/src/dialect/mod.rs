//! Built-in dialects and their lookup tables.
//!
//! Dialects are a closed set resolved once when a converter is built:
//!
//! ```rust
//! use table_json_schema::dialect::{Dialect, JsonType};
//!
//! let dialect = Dialect::from_name("MySQL").unwrap();
//! let tables = dialect.tables();
//! assert_eq!(tables.type_map["varchar"], JsonType::String);
//! ```

mod mysql;
mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SchemaError};

pub use tables::{
    normalize_type_name, BoundPair, DialectTables, FormatMap, JsonType, LengthBounds, LengthMap,
    LengthTypeMap, MapOverrides, PatternMap, RangeKeywords, TypeMap,
};

/// A source database type system with built-in default tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySql,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: &'static [Dialect] = &[Dialect::MySql];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySql => "MySQL",
        }
    }

    /// Resolve a dialect by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SchemaError::InvalidDialect {
                name: name.to_string(),
                allowed: Self::allowed_names(),
            })
    }

    /// Comma-separated list of supported dialect names.
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Default lookup tables for this dialect.
    pub fn tables(&self) -> DialectTables {
        match self {
            Dialect::MySql => mysql::tables(),
        }
    }
}

impl FromStr for Dialect {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Dialect::from_name("MySQL").unwrap(), Dialect::MySql);
        assert_eq!(Dialect::from_name("mysql").unwrap(), Dialect::MySql);
        assert_eq!("MYSQL".parse::<Dialect>().unwrap(), Dialect::MySql);
    }

    #[test]
    fn test_invalid_dialect_names_allowed_set() {
        let err = Dialect::from_name("Oracle").unwrap_err();
        match err {
            SchemaError::InvalidDialect { name, allowed } => {
                assert_eq!(name, "Oracle");
                assert_eq!(allowed, "MySQL");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Dialect::MySql.to_string(), "MySQL");
    }
}

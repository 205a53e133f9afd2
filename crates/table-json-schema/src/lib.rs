//! # table-json-schema
//!
//! Convert relational table column metadata into JSON Schema documents.
//!
//! The library provides:
//!
//! - **Column metadata model** with defaults, sizes and enum members
//! - **Built-in dialect tables** (MySQL) for type, range and pattern mapping
//! - **A single conversion pipeline** with exclusion, required-field,
//!   decimal, description, override and rename rules
//! - **YAML configuration** describing tables and conversion options
//!
//! ## Example
//!
//! ```rust,no_run
//! use table_json_schema::Config;
//!
//! fn main() -> table_json_schema::Result<()> {
//!     let config = Config::load("schema.yaml")?;
//!     let converter = config.build_converter()?;
//!     let doc = converter.convert("users", &config.options)?;
//!     println!("{}", doc.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod convert;
pub mod core;
pub mod dialect;
pub mod error;

// Re-exports for convenient access
pub use config::Config;
pub use convert::{
    ConvertOptions, JsonSchemaDocument, OverrideAction, PropertyOverride, SchemaConverter,
    SchemaConverterBuilder,
};
pub use crate::core::{Column, ColumnExtra, ColumnMetadataProvider, ColumnSize, DefaultValue, TableCatalog};
pub use dialect::{Dialect, JsonType, MapOverrides};
pub use error::{Result, SchemaError};

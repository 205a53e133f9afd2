//! Core abstractions shared by the converter and its collaborators.
//!
//! - [`schema`]: column metadata types
//! - [`traits`]: the [`ColumnMetadataProvider`] seam
//! - [`catalog`]: an in-memory provider

pub mod catalog;
pub mod schema;
pub mod traits;

pub use catalog::TableCatalog;
pub use schema::{Column, ColumnExtra, ColumnSize, DefaultValue};
pub use traits::ColumnMetadataProvider;

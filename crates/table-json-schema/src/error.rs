//! Error types for the schema conversion library.

use thiserror::Error;

/// Main error type for schema conversion.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A required construction argument was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// The requested dialect has no built-in tables.
    #[error("Invalid dialect '{name}', expected one of: {allowed}")]
    InvalidDialect { name: String, allowed: String },

    /// `convert` was called with an empty source name.
    #[error("Missing source: a table or source name is required")]
    MissingSource,

    /// A column's data type is absent from the effective type map.
    #[error("Unknown column type '{data_type}' for column {column} in source {source_name}")]
    UnknownColumnType {
        source_name: String,
        column: String,
        data_type: String,
    },

    /// The metadata provider has no such table.
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Create an UnknownColumnType error
    pub fn unknown_column_type(
        source_name: impl Into<String>,
        column: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        SchemaError::UnknownColumnType {
            source_name: source_name.into(),
            column: column.into(),
            data_type: data_type.into(),
        }
    }

    /// Process exit code for the CLI.
    ///
    /// 1 for configuration and usage problems, 2 for conversion failures,
    /// 3 for IO and serialization failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            SchemaError::MissingArgument(_)
            | SchemaError::InvalidDialect { .. }
            | SchemaError::Config(_) => 1,
            SchemaError::MissingSource
            | SchemaError::UnknownColumnType { .. }
            | SchemaError::UnknownSource(_) => 2,
            SchemaError::Io(_) | SchemaError::Yaml(_) | SchemaError::Json(_) => 3,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for schema conversion.
pub type Result<T> = std::result::Result<T, SchemaError>;

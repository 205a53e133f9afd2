//! Column metadata types consumed by the converter.
//!
//! These types provide a dialect-agnostic description of a table column as
//! reported by a [`ColumnMetadataProvider`](super::traits::ColumnMetadataProvider).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Data type (e.g., "varchar", "bigint", "enum").
    pub data_type: String,

    /// Whether the column allows NULL.
    #[serde(default)]
    pub is_nullable: bool,

    /// Default value, if the column declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,

    /// Declared size: a maximum length or a (precision, scale) pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ColumnSize>,

    /// Whether the column is auto-incremented by the database.
    #[serde(default)]
    pub is_auto_increment: bool,

    /// Dialect-specific extras (signedness, enum members).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ColumnExtra>,
}

impl Column {
    /// Create a NOT NULL column with no default, size or extras.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable: false,
            default_value: None,
            size: None,
            is_auto_increment: false,
            extra: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.is_auto_increment = true;
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default_value = Some(default);
        self
    }

    pub fn with_size(mut self, size: ColumnSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Mark the column unsigned, keeping any enum members already set.
    pub fn unsigned(mut self) -> Self {
        self.extra.get_or_insert_with(ColumnExtra::default).unsigned = true;
        self
    }

    /// Set the enum/set member list.
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.get_or_insert_with(ColumnExtra::default).list =
            Some(members.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the column declares any default, literal or computed.
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Whether `extra.unsigned` is set.
    pub fn is_unsigned(&self) -> bool {
        self.extra.as_ref().is_some_and(|e| e.unsigned)
    }

    /// Enum/set members, if the metadata carries them.
    pub fn members(&self) -> Option<&[String]> {
        self.extra.as_ref().and_then(|e| e.list.as_deref())
    }
}

/// A column default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Database-computed default such as `CURRENT_TIMESTAMP`.
    Expression { expression: String },
    /// Literal default value.
    Literal(Value),
}

impl DefaultValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        DefaultValue::Literal(value.into())
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        DefaultValue::Expression {
            expression: expression.into(),
        }
    }

    /// The value to copy into a property, if this default is a plain scalar.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            DefaultValue::Literal(v @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
                Some(v)
            }
            _ => None,
        }
    }
}

/// Declared column size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSize {
    /// Maximum length (characters, bytes or digits).
    Length(u64),
    /// Decimal precision and scale.
    Precision(u32, u32),
}

/// Extra column attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnExtra {
    /// Numeric column declared UNSIGNED.
    #[serde(default)]
    pub unsigned: bool,

    /// ENUM/SET members in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

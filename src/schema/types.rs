//! Schema type definitions
//!
//! Supported column types:
//! - integer: 64-bit signed integer
//! - text: UTF-8 string, optionally bounded to a maximum length
//! - boolean: Boolean
//! - float: 64-bit floating point

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use crate::observability::Logger;
use crate::row::Value;

/// Supported column types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string, optionally bounded
    Text {
        /// Maximum accepted length in characters
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_len: Option<usize>,
    },
    /// Boolean
    Boolean,
    /// 64-bit floating point
    Float,
}

impl ColumnType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Text { .. } => "text",
            ColumnType::Boolean => "boolean",
            ColumnType::Float => "float",
        }
    }

    /// Returns the full type description, including the text bound
    pub fn describe(&self) -> String {
        match self {
            ColumnType::Text { max_len: Some(n) } => format!("text({})", n),
            other => other.type_name().to_string(),
        }
    }
}

/// One column's type, constraints, and default value.
///
/// Constructed through the per-type helpers and refined with the
/// chainable modifiers:
///
/// ```
/// use reldb::row::Value;
/// use reldb::schema::ColumnSpec;
///
/// let id = ColumnSpec::integer("id").primary_key();
/// let name = ColumnSpec::varchar("name", 9).not_null().unique();
/// let active = ColumnSpec::boolean("active")
///     .not_null()
///     .default_value(Value::Boolean(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, unique within its table
    pub name: String,
    /// Column data type
    pub column_type: ColumnType,
    /// Whether NULL is accepted
    pub nullable: bool,
    /// Whether values must be unique across the table
    pub unique: bool,
    /// Whether this column is the table's primary key
    pub primary_key: bool,
    /// Value materialized when the caller supplies none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ColumnSpec {
    fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            unique: false,
            primary_key: false,
            default: None,
        }
    }

    /// Create an integer column
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    /// Create an unbounded text column
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Text { max_len: None })
    }

    /// Create a text column bounded to `max_len` characters
    pub fn varchar(name: impl Into<String>, max_len: usize) -> Self {
        Self::new(
            name,
            ColumnType::Text {
                max_len: Some(max_len),
            },
        )
    }

    /// Create a boolean column
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Boolean)
    }

    /// Create a float column
    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Float)
    }

    /// Reject NULL values for this column
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Require values to be unique across the table
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark this column as the table's primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Declare the value materialized when the caller supplies none
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// A named, ordered, immutable set of column specs.
///
/// Validates itself at construction; schema migration is out of scope,
/// so a constructed schema never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnSpec>,
}

impl TableSchema {
    /// Constructs a validated table schema.
    ///
    /// A primary-key column is normalized to non-null and unique.
    /// A default on a unique or primary-key column is permitted but
    /// logged, since every defaulted insert after the first will hit the
    /// uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the column list is empty, a column name
    /// repeats, more than one column is marked primary key, or a declared
    /// default does not match its column type.
    pub fn new(name: impl Into<String>, mut columns: Vec<ColumnSpec>) -> SchemaResult<Self> {
        let name = name.into();

        if columns.is_empty() {
            return Err(SchemaError::empty(name));
        }

        let mut seen = HashSet::new();
        let mut primary_key: Option<String> = None;

        for column in &mut columns {
            if !seen.insert(column.name.clone()) {
                return Err(SchemaError::duplicate_column(name, column.name.clone()));
            }

            if column.primary_key {
                if let Some(first) = &primary_key {
                    return Err(SchemaError::multiple_primary_keys(
                        name,
                        first.clone(),
                        column.name.clone(),
                    ));
                }
                primary_key = Some(column.name.clone());
                column.nullable = false;
                column.unique = true;
            }

            if let Some(default) = &column.default {
                if !default.matches_type(&column.column_type) {
                    return Err(SchemaError::default_type_mismatch(
                        name,
                        column.name.clone(),
                        column.column_type.describe(),
                        default.type_name(),
                    ));
                }

                if column.unique || column.primary_key {
                    Logger::warn(
                        "SCHEMA_DEFAULT_ON_UNIQUE",
                        &[("table", name.as_str()), ("column", column.name.as_str())],
                    );
                }
            }
        }

        Ok(Self { name, columns })
    }

    /// Returns the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the columns in declaration order
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the named column, if declared
    pub fn column_named(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns the position of the named column, if declared
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Returns the primary-key column, if one is declared
    pub fn primary_key_column(&self) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.primary_key)
    }
}

//! Runtime value types
//!
//! Supported values:
//! - integer: 64-bit signed integer
//! - text: UTF-8 string
//! - boolean: Boolean
//! - float: 64-bit floating point
//! - null: explicit absence of a value

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::ColumnType;

/// A typed runtime value held by one column of one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Explicit NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// UTF-8 string
    Text(String),
    /// Boolean
    Boolean(bool),
    /// 64-bit floating point
    Float(f64),
}

impl Value {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::Float(_) => "float",
        }
    }

    /// Returns whether this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns whether this value conforms to the given column type.
    ///
    /// Matching is exact: an integer is not accepted where a float is
    /// declared. NULL conforms to every type; nullability is enforced
    /// separately. A text value longer than the declared maximum length
    /// does not conform.
    pub fn matches_type(&self, column_type: &ColumnType) -> bool {
        match (self, column_type) {
            (Value::Null, _) => true,
            (Value::Integer(_), ColumnType::Integer) => true,
            (Value::Text(s), ColumnType::Text { max_len }) => {
                max_len.map_or(true, |limit| s.chars().count() <= limit)
            }
            (Value::Boolean(_), ColumnType::Boolean) => true,
            (Value::Float(_), ColumnType::Float) => true,
            _ => false,
        }
    }

    /// Returns whether this value collides with another under uniqueness
    /// rules: equal and non-NULL. NULL never collides with NULL.
    pub fn collides_with(&self, other: &Value) -> bool {
        !self.is_null() && self == other
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

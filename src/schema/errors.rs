//! Schema error types
//!
//! Error codes:
//! - REL_SCHEMA_EMPTY
//! - REL_SCHEMA_DUPLICATE_COLUMN
//! - REL_SCHEMA_MULTIPLE_PRIMARY_KEYS
//! - REL_SCHEMA_DEFAULT_TYPE_MISMATCH
//! - REL_SCHEMA_TABLE_ALREADY_DEFINED
//!
//! All schema errors reject the definition; none are recoverable by
//! retrying the same input.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema has no columns
    RelSchemaEmpty,
    /// A column name repeats within the schema
    RelSchemaDuplicateColumn,
    /// More than one column is marked primary key
    RelSchemaMultiplePrimaryKeys,
    /// A declared default does not match its column type
    RelSchemaDefaultTypeMismatch,
    /// A table with this name is already registered
    RelSchemaTableAlreadyDefined,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::RelSchemaEmpty => "REL_SCHEMA_EMPTY",
            SchemaErrorCode::RelSchemaDuplicateColumn => "REL_SCHEMA_DUPLICATE_COLUMN",
            SchemaErrorCode::RelSchemaMultiplePrimaryKeys => "REL_SCHEMA_MULTIPLE_PRIMARY_KEYS",
            SchemaErrorCode::RelSchemaDefaultTypeMismatch => "REL_SCHEMA_DEFAULT_TYPE_MISMATCH",
            SchemaErrorCode::RelSchemaTableAlreadyDefined => "REL_SCHEMA_TABLE_ALREADY_DEFINED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Table name if applicable
    table: Option<String>,
    /// Column name if applicable
    column: Option<String>,
}

impl SchemaError {
    /// Create an empty-schema error
    pub fn empty(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::RelSchemaEmpty,
            message: format!("Table '{}' must declare at least one column", table),
            table: Some(table),
            column: None,
        }
    }

    /// Create a duplicate-column error
    pub fn duplicate_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: SchemaErrorCode::RelSchemaDuplicateColumn,
            message: format!("Column '{}' declared more than once in table '{}'", column, table),
            table: Some(table),
            column: Some(column),
        }
    }

    /// Create a multiple-primary-keys error
    pub fn multiple_primary_keys(
        table: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        let table = table.into();
        let first: String = first.into();
        let second = second.into();
        Self {
            code: SchemaErrorCode::RelSchemaMultiplePrimaryKeys,
            message: format!(
                "Table '{}' marks both '{}' and '{}' as primary key",
                table, first, second
            ),
            table: Some(table),
            column: Some(second),
        }
    }

    /// Create a default-type-mismatch error
    pub fn default_type_mismatch(
        table: impl Into<String>,
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let table = table.into();
        let column = column.into();
        let expected: String = expected.into();
        let actual: String = actual.into();
        Self {
            code: SchemaErrorCode::RelSchemaDefaultTypeMismatch,
            message: format!(
                "Default for column '{}' in table '{}' must be {}, got {}",
                column, table, expected, actual
            ),
            table: Some(table),
            column: Some(column),
        }
    }

    /// Create a table-already-defined error
    pub fn table_already_defined(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            code: SchemaErrorCode::RelSchemaTableAlreadyDefined,
            message: format!("Table '{}' is already defined", table),
            table: Some(table),
            column: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table name if applicable
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the column name if applicable
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REJECT] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

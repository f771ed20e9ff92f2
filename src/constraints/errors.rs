//! Constraint error types
//!
//! Error codes:
//! - REL_CONSTRAINT_MISSING_REQUIRED_COLUMN
//! - REL_CONSTRAINT_TYPE_MISMATCH
//! - REL_CONSTRAINT_UNIQUE_VIOLATION
//!
//! Constraint errors are recoverable: the caller may retry with corrected
//! values, and the store is unaffected by the failed insert.

use std::fmt;

use crate::row::Value;

/// Constraint-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintErrorCode {
    /// No value for a non-nullable column without a default
    RelConstraintMissingRequiredColumn,
    /// Value type does not match the column type
    RelConstraintTypeMismatch,
    /// Value collides with an existing row on a unique column
    RelConstraintUniqueViolation,
}

impl ConstraintErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ConstraintErrorCode::RelConstraintMissingRequiredColumn => {
                "REL_CONSTRAINT_MISSING_REQUIRED_COLUMN"
            }
            ConstraintErrorCode::RelConstraintTypeMismatch => "REL_CONSTRAINT_TYPE_MISMATCH",
            ConstraintErrorCode::RelConstraintUniqueViolation => "REL_CONSTRAINT_UNIQUE_VIOLATION",
        }
    }
}

impl fmt::Display for ConstraintErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Constraint error with the column and value context a caller needs to
/// correct the insert.
#[derive(Debug, Clone)]
pub struct ConstraintError {
    /// Error code
    code: ConstraintErrorCode,
    /// Human-readable message
    message: String,
    /// Table the insert targeted
    table: String,
    /// Column that failed
    column: String,
    /// Expected type or condition, if applicable
    expected: Option<String>,
    /// Actual type or condition found, if applicable
    actual: Option<String>,
    /// Rendering of the offending value, if applicable
    value: Option<String>,
}

impl ConstraintError {
    /// Create a missing-required-column error for an absent value
    pub fn missing_required(table: impl Into<String>, column: impl Into<String>) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: ConstraintErrorCode::RelConstraintMissingRequiredColumn,
            message: format!(
                "Column '{}' in table '{}' requires a value and has no default",
                column, table
            ),
            table,
            column,
            expected: Some("value to be present".into()),
            actual: Some("missing".into()),
            value: None,
        }
    }

    /// Create a missing-required-column error for an explicit NULL on a
    /// non-nullable column
    pub fn null_not_allowed(table: impl Into<String>, column: impl Into<String>) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: ConstraintErrorCode::RelConstraintMissingRequiredColumn,
            message: format!("Column '{}' in table '{}' is not nullable", column, table),
            table,
            column,
            expected: Some("non-null value".into()),
            actual: Some("null".into()),
            value: None,
        }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(
        table: impl Into<String>,
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let table = table.into();
        let column = column.into();
        let expected = expected.into();
        let actual = actual.into();
        Self {
            code: ConstraintErrorCode::RelConstraintTypeMismatch,
            message: format!(
                "Column '{}' in table '{}': expected {}, got {}",
                column, table, expected, actual
            ),
            table,
            column,
            expected: Some(expected),
            actual: Some(actual),
            value: None,
        }
    }

    /// Create a unique-violation error
    pub fn unique_violation(
        table: impl Into<String>,
        column: impl Into<String>,
        value: &Value,
    ) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: ConstraintErrorCode::RelConstraintUniqueViolation,
            message: format!(
                "Value {} already exists for unique column '{}' in table '{}'",
                value, column, table
            ),
            table,
            column,
            expected: None,
            actual: None,
            value: Some(value.to_string()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ConstraintErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table the insert targeted
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the column that failed
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the expected type or condition, if applicable
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Returns the actual type or condition found, if applicable
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Returns the offending value rendering, if applicable
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REJECT] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ConstraintError {}

/// Result type for constraint validation
pub type ConstraintResult<T> = Result<T, ConstraintError>;

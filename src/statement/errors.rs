//! Statement error types
//!
//! Error codes:
//! - REL_STATEMENT_UNKNOWN_COLUMN
//! - REL_STATEMENT_DUPLICATE_COLUMN
//!
//! Statement errors are fatal at build time: the descriptor is never
//! constructed and nothing reaches an executor or store.

use std::fmt;

/// Statement-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementErrorCode {
    /// A supplied column name is not declared in the schema
    RelStatementUnknownColumn,
    /// A column name is supplied more than once
    RelStatementDuplicateColumn,
}

impl StatementErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            StatementErrorCode::RelStatementUnknownColumn => "REL_STATEMENT_UNKNOWN_COLUMN",
            StatementErrorCode::RelStatementDuplicateColumn => "REL_STATEMENT_DUPLICATE_COLUMN",
        }
    }
}

impl fmt::Display for StatementErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Statement error with the table and column involved
#[derive(Debug, Clone)]
pub struct StatementError {
    /// Error code
    code: StatementErrorCode,
    /// Human-readable message
    message: String,
    /// Table the statement referenced
    table: String,
    /// Column that failed to resolve
    column: String,
}

impl StatementError {
    /// Create an unknown-column error
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: StatementErrorCode::RelStatementUnknownColumn,
            message: format!("Column '{}' is not declared in table '{}'", column, table),
            table,
            column,
        }
    }

    /// Create a duplicate-column error
    pub fn duplicate_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        let table = table.into();
        let column = column.into();
        Self {
            code: StatementErrorCode::RelStatementDuplicateColumn,
            message: format!(
                "Column '{}' supplied more than once for table '{}'",
                column, table
            ),
            table,
            column,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StatementErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table the statement referenced
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the column that failed to resolve
    pub fn column(&self) -> &str {
        &self.column
    }
}

impl fmt::Display for StatementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REJECT] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for StatementError {}

/// Result type for statement building
pub type StatementResult<T> = Result<T, StatementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            StatementErrorCode::RelStatementUnknownColumn.code(),
            "REL_STATEMENT_UNKNOWN_COLUMN"
        );
        assert_eq!(
            StatementErrorCode::RelStatementDuplicateColumn.code(),
            "REL_STATEMENT_DUPLICATE_COLUMN"
        );
    }

    #[test]
    fn test_error_carries_context() {
        let err = StatementError::unknown_column("person", "nickname");
        assert_eq!(err.table(), "person");
        assert_eq!(err.column(), "nickname");
        assert!(format!("{}", err).contains("REL_STATEMENT_UNKNOWN_COLUMN"));
    }
}

//! Store error types
//!
//! Error codes:
//! - REL_STORE_OPEN_FAILED (ERROR severity)
//! - REL_STORE_APPEND_FAILED (ERROR severity)
//! - REL_STORE_SCAN_FAILED (ERROR severity)
//! - REL_STORE_CORRUPTION (FATAL severity)
//!
//! The core treats store errors as fatal for the failing call only and
//! propagates them opaquely to the caller.

use std::fmt;
use std::io;

/// Severity levels for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, the store remains usable
    Error,
    /// Stored data cannot be trusted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Store could not be opened
    RelStoreOpenFailed,
    /// Row append failed
    RelStoreAppendFailed,
    /// Table scan failed
    RelStoreScanFailed,
    /// Record checksum or framing failure (FATAL)
    RelStoreCorruption,
}

impl StoreErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::RelStoreOpenFailed => "REL_STORE_OPEN_FAILED",
            StoreErrorCode::RelStoreAppendFailed => "REL_STORE_APPEND_FAILED",
            StoreErrorCode::RelStoreScanFailed => "REL_STORE_SCAN_FAILED",
            StoreErrorCode::RelStoreCorruption => "REL_STORE_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::RelStoreCorruption => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with table and source context
#[derive(Debug)]
pub struct StoreError {
    /// Error code
    code: StoreErrorCode,
    /// Human-readable message
    message: String,
    /// Table involved, if known
    table: Option<String>,
    /// Byte offset of the failing record, if applicable
    offset: Option<u64>,
    /// Underlying I/O error, if any
    source: Option<io::Error>,
}

impl StoreError {
    /// Create an open-failed error
    pub fn open_failed(reason: impl Into<String>, source: io::Error) -> Self {
        let reason: String = reason.into();
        Self {
            code: StoreErrorCode::RelStoreOpenFailed,
            message: format!("Store open failed: {}", reason),
            table: None,
            offset: None,
            source: Some(source),
        }
    }

    /// Create an append-failed error
    pub fn append_failed(
        table: impl Into<String>,
        reason: impl Into<String>,
        source: io::Error,
    ) -> Self {
        let table = table.into();
        let reason: String = reason.into();
        Self {
            code: StoreErrorCode::RelStoreAppendFailed,
            message: format!("Append to table '{}' failed: {}", table, reason),
            table: Some(table),
            offset: None,
            source: Some(source),
        }
    }

    /// Create a scan-failed error
    pub fn scan_failed(
        table: impl Into<String>,
        reason: impl Into<String>,
        source: io::Error,
    ) -> Self {
        let table = table.into();
        let reason: String = reason.into();
        Self {
            code: StoreErrorCode::RelStoreScanFailed,
            message: format!("Scan of table '{}' failed: {}", table, reason),
            table: Some(table),
            offset: None,
            source: Some(source),
        }
    }

    /// Create a corruption error (FATAL)
    pub fn corruption(table: impl Into<String>, offset: u64, reason: impl Into<String>) -> Self {
        let table = table.into();
        let reason: String = reason.into();
        Self {
            code: StoreErrorCode::RelStoreCorruption,
            message: format!(
                "Corrupt record in table '{}' at offset {}: {}",
                table, offset, reason
            ),
            table: Some(table),
            offset: Some(offset),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table involved, if known
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the failing record's byte offset, if applicable
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

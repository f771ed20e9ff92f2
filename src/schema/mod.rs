//! Table schema subsystem for reldb
//!
//! A table schema is defined once, validates itself at construction, and
//! is immutable thereafter.
//!
//! # Design Principles
//!
//! - Column names unique within a schema
//! - At most one primary-key column
//! - A primary-key column is implicitly non-null and unique
//! - Declared defaults must match their column type
//! - Schema migration is out of scope

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{ColumnSpec, ColumnType, TableSchema};

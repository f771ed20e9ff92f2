//! Statement subsystem for reldb
//!
//! Statements are pure descriptors of call-site intent, built against a
//! table schema and executed elsewhere. Building a statement never
//! touches a store.
//!
//! # Design Principles
//!
//! - Construction is pure and side-effect-free
//! - Column references resolve against the schema at build time
//! - Select carries no predicate: the scope is full-table scans

mod errors;
mod statement;

pub use errors::{StatementError, StatementErrorCode, StatementResult};
pub use statement::{InsertStatement, SelectStatement, Statement};

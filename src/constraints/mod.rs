//! Constraint enforcement subsystem for reldb
//!
//! Constraints are declared in the schema and enforced when an insert
//! executes, before anything reaches the store.
//!
//! # Design Principles
//!
//! - Checks run per column, in schema column order, fail-fast
//! - Defaults materialize only for absent columns, never for explicit NULL
//! - Type matching is exact; no coercion
//! - NULL never collides with NULL under uniqueness
//! - Validation is deterministic and read-only against the table state

mod errors;
mod validator;

pub use errors::{ConstraintError, ConstraintErrorCode, ConstraintResult};
pub use validator::ConstraintValidator;

//! Statement executor subsystem for reldb
//!
//! The executor is where pure statement descriptors meet the effectful
//! store. Inserts validate against a snapshot of the table before
//! anything is appended, so a failed insert leaves the store exactly as
//! it was. Selects read the table in insertion order.
//!
//! # Design Principles
//!
//! - Validate-then-append is exclusive: inserts take `&mut self`
//! - The store handle is explicit; no ambient connection state
//! - Execution is deterministic: same statement + same store = same result
//! - Results are owned; the executor retains no row references

mod errors;
mod executor;
mod result;

pub use errors::{ExecutorError, ExecutorResult};
pub use executor::Executor;
pub use result::{ExecutionOutcome, SelectResult};

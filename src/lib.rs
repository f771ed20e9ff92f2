//! reldb - a strict, minimal relational data-access core
//!
//! Define a named table with typed, constrained columns; issue structured
//! insert and select operations against it; receive typed rows back.
//! Schemas are immutable once constructed, every insert is validated
//! column by column before anything reaches the store, and a failed
//! insert leaves the store exactly as it was.

pub mod constraints;
pub mod executor;
pub mod observability;
pub mod row;
pub mod schema;
pub mod statement;
pub mod store;

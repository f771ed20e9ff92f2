//! Statement executor
//!
//! Execution flow for an insert, in strict order:
//! 1. Snapshot the target table from the store
//! 2. Validate the candidate row against the schema and the snapshot
//! 3. Append the materialized row
//! 4. Return the row as stored
//!
//! Nothing is appended unless validation passes, so the store is
//! untouched by a failed insert. A select snapshots the table's rows in
//! insertion order and never fails on an empty or unknown table.

use crate::constraints::ConstraintValidator;
use crate::observability::Logger;
use crate::row::Row;
use crate::statement::{InsertStatement, SelectStatement, Statement};
use crate::store::Store;

use super::errors::ExecutorResult;
use super::result::{ExecutionOutcome, SelectResult};

/// Applies statement descriptors to a backing store.
pub struct Executor<S: Store> {
    store: S,
}

impl<S: Store> Executor<S> {
    /// Creates an executor over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a shared view of the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the executor and returns the backing store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Routes either statement kind to its handler
    pub fn execute(&mut self, statement: &Statement<'_>) -> ExecutorResult<ExecutionOutcome> {
        match statement {
            Statement::Insert(insert) => {
                Ok(ExecutionOutcome::Inserted(self.execute_insert(insert)?))
            }
            Statement::Select(select) => {
                Ok(ExecutionOutcome::Selected(self.execute_select(select)?))
            }
        }
    }

    /// Validates and applies a single-row insert.
    ///
    /// Taking `&mut self` makes the validate-then-append window exclusive
    /// with respect to other inserts on this executor.
    ///
    /// # Errors
    ///
    /// Returns the constraint violation or store failure unchanged; in
    /// either case the store holds exactly the rows it held before.
    pub fn execute_insert(&mut self, statement: &InsertStatement<'_>) -> ExecutorResult<Row> {
        let schema = statement.schema();
        let existing = self.store.scan(schema.name())?;

        let validator = ConstraintValidator::new(schema);
        let row = match validator.validate_insert(statement.values(), &existing) {
            Ok(row) => row,
            Err(err) => {
                Logger::warn(
                    "INSERT_REJECTED",
                    &[
                        ("code", err.code().code()),
                        ("column", err.column()),
                        ("table", schema.name()),
                    ],
                );
                return Err(err.into());
            }
        };

        self.store.append(schema.name(), row.clone())?;

        let columns = row.len().to_string();
        Logger::info(
            "INSERT_APPLIED",
            &[("columns", columns.as_str()), ("table", schema.name())],
        );

        Ok(row)
    }

    /// Returns the target table's rows in insertion order.
    ///
    /// An empty or never-inserted-into table yields an empty result,
    /// never an error.
    pub fn execute_select(&self, statement: &SelectStatement<'_>) -> ExecutorResult<SelectResult> {
        let rows = self.store.scan(statement.table())?;
        Ok(SelectResult::new(rows))
    }
}

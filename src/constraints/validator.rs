//! Constraint validator for candidate inserts
//!
//! Validation semantics, applied per column in schema order:
//! - Absent value: materialize the default, else NULL if nullable, else
//!   fail missing-required
//! - Explicit NULL: kept when nullable, never triggers the default
//! - Type check against the column type, exact, no coercion
//! - Unique/primary-key columns: no equal non-NULL value may already
//!   exist in the table
//!
//! The first violation wins; column order is the tie-break when several
//! exist. On success the result is a fully materialized row in schema
//! column order, ready for storage. The validator never mutates table
//! state.

use super::errors::{ConstraintError, ConstraintResult};
use crate::row::{Row, Value};
use crate::schema::{ColumnSpec, TableSchema};

/// Validates candidate rows against a schema and the table's current
/// contents. Validation is deterministic.
pub struct ConstraintValidator<'a> {
    schema: &'a TableSchema,
}

impl<'a> ConstraintValidator<'a> {
    /// Creates a validator for the given schema
    pub fn new(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Validates a candidate insert and materializes the full row.
    ///
    /// `supplied` holds the caller's column values (any subset of the
    /// schema's columns, names already resolved by statement building).
    /// `existing` is a read-only snapshot of the table's current rows,
    /// used for uniqueness checks.
    ///
    /// # Errors
    ///
    /// Returns the first `ConstraintError` encountered in schema column
    /// order. The snapshot is never modified.
    pub fn validate_insert(
        &self,
        supplied: &[(String, Value)],
        existing: &[Row],
    ) -> ConstraintResult<Row> {
        let mut row = Row::with_capacity(self.schema.columns().len());

        for column in self.schema.columns() {
            let value = self.materialize(column, supplied)?;
            self.check_type(column, &value)?;
            if column.unique || column.primary_key {
                self.check_unique(column, &value, existing)?;
            }
            row.push(column.name.clone(), value);
        }

        Ok(row)
    }

    /// Resolves the value for one column: supplied, defaulted, or NULL.
    fn materialize(
        &self,
        column: &ColumnSpec,
        supplied: &[(String, Value)],
    ) -> ConstraintResult<Value> {
        let supplied_value = supplied
            .iter()
            .find(|(name, _)| name == &column.name)
            .map(|(_, value)| value);

        match supplied_value {
            Some(Value::Null) => {
                if column.nullable {
                    Ok(Value::Null)
                } else {
                    Err(ConstraintError::null_not_allowed(
                        self.schema.name(),
                        &column.name,
                    ))
                }
            }
            Some(value) => Ok(value.clone()),
            None => match &column.default {
                Some(default) => Ok(default.clone()),
                None if column.nullable => Ok(Value::Null),
                None => Err(ConstraintError::missing_required(
                    self.schema.name(),
                    &column.name,
                )),
            },
        }
    }

    /// Checks the materialized value against the column type.
    fn check_type(&self, column: &ColumnSpec, value: &Value) -> ConstraintResult<()> {
        if value.matches_type(&column.column_type) {
            return Ok(());
        }

        // Same base type means a bound failed rather than the type itself;
        // describe the actual value so the bound violation is visible.
        let actual = if value.type_name() == column.column_type.type_name() {
            match value {
                Value::Text(s) => format!("text of {} characters", s.chars().count()),
                other => other.type_name().to_string(),
            }
        } else {
            value.type_name().to_string()
        };

        Err(ConstraintError::type_mismatch(
            self.schema.name(),
            &column.name,
            column.column_type.describe(),
            actual,
        ))
    }

    /// Scans existing rows for an equal non-NULL value on a unique column.
    fn check_unique(
        &self,
        column: &ColumnSpec,
        value: &Value,
        existing: &[Row],
    ) -> ConstraintResult<()> {
        if value.is_null() {
            return Ok(());
        }

        for row in existing {
            if let Some(stored) = row.get(&column.name) {
                if stored.collides_with(value) {
                    return Err(ConstraintError::unique_violation(
                        self.schema.name(),
                        &column.name,
                        value,
                    ));
                }
            }
        }

        Ok(())
    }
}

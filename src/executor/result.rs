//! Execution result types

use crate::row::Row;

/// Rows returned by a select, in insertion order.
///
/// The result is a finite snapshot; re-execute the select to observe
/// later inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectResult {
    rows: Vec<Row>,
}

impl SelectResult {
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the result holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the first row, if any
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Iterates the rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl IntoIterator for SelectResult {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a SelectResult {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// What executing a [`crate::statement::Statement`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// The materialized row an insert appended
    Inserted(Row),
    /// The rows a select returned
    Selected(SelectResult),
}

impl ExecutionOutcome {
    /// Returns the inserted row, if this was an insert
    pub fn into_row(self) -> Option<Row> {
        match self {
            ExecutionOutcome::Inserted(row) => Some(row),
            ExecutionOutcome::Selected(_) => None,
        }
    }

    /// Returns the select result, if this was a select
    pub fn into_rows(self) -> Option<SelectResult> {
        match self {
            ExecutionOutcome::Inserted(_) => None,
            ExecutionOutcome::Selected(result) => Some(result),
        }
    }
}

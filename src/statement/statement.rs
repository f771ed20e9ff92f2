//! Insert and select statement descriptors
//!
//! Both kinds borrow the schema they were built against; the executor
//! reads the schema back out of the descriptor, so no ambient catalog or
//! connection state is involved.

use super::errors::{StatementError, StatementResult};
use crate::row::Value;
use crate::schema::TableSchema;

/// Descriptor for a single-row insert.
///
/// Holds only the columns the caller supplied; absent columns default or
/// NULL at validation time. An empty supply is a valid statement.
#[derive(Debug, Clone)]
pub struct InsertStatement<'a> {
    schema: &'a TableSchema,
    values: Vec<(String, Value)>,
}

impl<'a> InsertStatement<'a> {
    /// Builds an insert descriptor from caller-supplied column values.
    ///
    /// # Errors
    ///
    /// Returns `REL_STATEMENT_UNKNOWN_COLUMN` if a supplied name is not
    /// declared in the schema, `REL_STATEMENT_DUPLICATE_COLUMN` if a name
    /// is supplied twice.
    pub fn build(
        schema: &'a TableSchema,
        values: Vec<(String, Value)>,
    ) -> StatementResult<Self> {
        for (position, (name, _)) in values.iter().enumerate() {
            if schema.column_named(name).is_none() {
                return Err(StatementError::unknown_column(schema.name(), name));
            }
            if values[..position].iter().any(|(earlier, _)| earlier == name) {
                return Err(StatementError::duplicate_column(schema.name(), name));
            }
        }

        Ok(Self { schema, values })
    }

    /// Returns the schema this statement was built against
    pub fn schema(&self) -> &TableSchema {
        self.schema
    }

    /// Returns the target table name
    pub fn table(&self) -> &str {
        self.schema.name()
    }

    /// Returns the supplied column values
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }
}

/// Descriptor for a full-table select.
///
/// Carries no predicate; execution returns every row of the table in
/// insertion order.
#[derive(Debug, Clone)]
pub struct SelectStatement<'a> {
    schema: &'a TableSchema,
}

impl<'a> SelectStatement<'a> {
    /// Builds a select descriptor for the whole table
    pub fn build(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Returns the schema this statement was built against
    pub fn schema(&self) -> &TableSchema {
        self.schema
    }

    /// Returns the target table name
    pub fn table(&self) -> &str {
        self.schema.name()
    }
}

/// Either statement kind, for callers routing through a single execute
/// entry point.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    /// Single-row insert
    Insert(InsertStatement<'a>),
    /// Full-table select
    Select(SelectStatement<'a>),
}

impl<'a> Statement<'a> {
    /// Returns the target table name
    pub fn table(&self) -> &str {
        match self {
            Statement::Insert(insert) => insert.table(),
            Statement::Select(select) => select.table(),
        }
    }

    /// Returns the statement kind name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Insert(_) => "insert",
            Statement::Select(_) => "select",
        }
    }
}

impl<'a> From<InsertStatement<'a>> for Statement<'a> {
    fn from(insert: InsertStatement<'a>) -> Self {
        Statement::Insert(insert)
    }
}

impl<'a> From<SelectStatement<'a>> for Statement<'a> {
    fn from(select: SelectStatement<'a>) -> Self {
        Statement::Select(select)
    }
}

#[cfg(test)]
mod tests {
    use super::super::StatementErrorCode;
    use super::*;
    use crate::schema::ColumnSpec;

    fn person_schema() -> TableSchema {
        TableSchema::new(
            "person",
            vec![
                ColumnSpec::integer("id").primary_key(),
                ColumnSpec::text("name").not_null().unique(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_build_insert_with_known_columns() {
        let schema = person_schema();
        let statement = InsertStatement::build(
            &schema,
            vec![
                ("id".into(), Value::Integer(42)),
                ("name".into(), Value::Text("Pepe".into())),
            ],
        )
        .unwrap();

        assert_eq!(statement.table(), "person");
        assert_eq!(statement.values().len(), 2);
    }

    #[test]
    fn test_build_insert_with_no_values() {
        // Valid descriptor; every column defaults or NULLs at execution
        let schema = person_schema();
        let statement = InsertStatement::build(&schema, vec![]).unwrap();
        assert!(statement.values().is_empty());
    }

    #[test]
    fn test_unknown_column_rejected() {
        let schema = person_schema();
        let err = InsertStatement::build(
            &schema,
            vec![("nickname".into(), Value::Text("P".into()))],
        )
        .unwrap_err();

        assert_eq!(err.code(), StatementErrorCode::RelStatementUnknownColumn);
        assert_eq!(err.column(), "nickname");
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let schema = person_schema();
        let err = InsertStatement::build(
            &schema,
            vec![
                ("id".into(), Value::Integer(1)),
                ("id".into(), Value::Integer(2)),
            ],
        )
        .unwrap_err();

        assert_eq!(err.code(), StatementErrorCode::RelStatementDuplicateColumn);
        assert_eq!(err.column(), "id");
    }

    #[test]
    fn test_select_builds_infallibly() {
        let schema = person_schema();
        let statement = SelectStatement::build(&schema);
        assert_eq!(statement.table(), "person");
    }

    #[test]
    fn test_statement_routing_accessors() {
        let schema = person_schema();

        let insert: Statement<'_> =
            InsertStatement::build(&schema, vec![]).unwrap().into();
        assert_eq!(insert.name(), "insert");
        assert_eq!(insert.table(), "person");

        let select: Statement<'_> = SelectStatement::build(&schema).into();
        assert_eq!(select.name(), "select");
        assert_eq!(select.table(), "person");
    }
}

//! Constraint Invariant Tests
//!
//! - Checks run in schema column order, fail-fast
//! - Missing required columns reject before anything else about the row
//! - Defaults materialize only for absent columns
//! - Type matching is exact, including text bounds
//! - Unique columns never accept an equal non-NULL value twice
//! - NULL never collides with NULL

use reldb::constraints::{ConstraintErrorCode, ConstraintValidator};
use reldb::row::{Row, Value};
use reldb::schema::{ColumnSpec, TableSchema};

// =============================================================================
// Helper Functions
// =============================================================================

fn person_schema() -> TableSchema {
    TableSchema::new(
        "person",
        vec![
            ColumnSpec::integer("id").primary_key(),
            ColumnSpec::varchar("name", 9).not_null().unique(),
            ColumnSpec::boolean("active")
                .not_null()
                .default_value(Value::Boolean(true)),
            ColumnSpec::float("rank")
                .not_null()
                .default_value(Value::Float(0.0)),
        ],
    )
    .unwrap()
}

fn values(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

// =============================================================================
// Materialization
// =============================================================================

/// A fully supplied row materializes unchanged, in schema column order.
#[test]
fn test_full_supply_materializes_in_order() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let row = validator
        .validate_insert(
            &values(&[
                ("rank", Value::Float(9.6)),
                ("id", Value::Integer(42)),
                ("name", Value::Text("Pepe".into())),
                ("active", Value::Boolean(true)),
            ]),
            &[],
        )
        .unwrap();

    // Supplied order does not matter; schema order does
    assert_eq!(row.column_names(), vec!["id", "name", "active", "rank"]);
    assert_eq!(row.get_at(0), Some(&Value::Integer(42)));
}

/// Absent columns with defaults materialize the default.
#[test]
fn test_defaults_apply_to_absent_columns() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let row = validator
        .validate_insert(
            &values(&[("id", Value::Integer(1)), ("name", Value::Text("Ana".into()))]),
            &[],
        )
        .unwrap();

    assert_eq!(row.get("active"), Some(&Value::Boolean(true)));
    assert_eq!(row.get("rank"), Some(&Value::Float(0.0)));
}

/// Absent nullable columns without a default materialize NULL.
#[test]
fn test_absent_nullable_column_becomes_null() {
    let schema = TableSchema::new(
        "note",
        vec![ColumnSpec::integer("id").primary_key(), ColumnSpec::text("body")],
    )
    .unwrap();
    let validator = ConstraintValidator::new(&schema);

    let row = validator
        .validate_insert(&values(&[("id", Value::Integer(1))]), &[])
        .unwrap();
    assert_eq!(row.get("body"), Some(&Value::Null));
}

/// An explicit NULL is kept as NULL, never replaced by the default.
#[test]
fn test_explicit_null_bypasses_default() {
    let schema = TableSchema::new(
        "note",
        vec![
            ColumnSpec::integer("id").primary_key(),
            ColumnSpec::text("body").default_value(Value::Text("n/a".into())),
        ],
    )
    .unwrap();
    let validator = ConstraintValidator::new(&schema);

    let row = validator
        .validate_insert(
            &values(&[("id", Value::Integer(1)), ("body", Value::Null)]),
            &[],
        )
        .unwrap();
    assert_eq!(row.get("body"), Some(&Value::Null));
}

// =============================================================================
// Missing Required Columns
// =============================================================================

/// No value, no default, not nullable: rejected.
#[test]
fn test_missing_required_column_rejected() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let err = validator
        .validate_insert(&values(&[("name", Value::Text("Ana".into()))]), &[])
        .unwrap_err();

    assert_eq!(
        err.code(),
        ConstraintErrorCode::RelConstraintMissingRequiredColumn
    );
    assert_eq!(err.column(), "id");
}

/// Explicit NULL on a non-nullable column: rejected with the same code.
#[test]
fn test_explicit_null_on_required_column_rejected() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let err = validator
        .validate_insert(
            &values(&[("id", Value::Integer(1)), ("name", Value::Null)]),
            &[],
        )
        .unwrap_err();

    assert_eq!(
        err.code(),
        ConstraintErrorCode::RelConstraintMissingRequiredColumn
    );
    assert_eq!(err.column(), "name");
}

// =============================================================================
// Type Matching
// =============================================================================

/// Wrong value type is rejected with expected and actual names.
#[test]
fn test_type_mismatch_rejected() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let err = validator
        .validate_insert(
            &values(&[("id", Value::Integer(1)), ("name", Value::Integer(123))]),
            &[],
        )
        .unwrap_err();

    assert_eq!(err.code(), ConstraintErrorCode::RelConstraintTypeMismatch);
    assert_eq!(err.expected(), Some("text(9)"));
    assert_eq!(err.actual(), Some("integer"));
}

/// Integers are not coerced into float columns.
#[test]
fn test_no_integer_to_float_coercion() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let err = validator
        .validate_insert(
            &values(&[
                ("id", Value::Integer(1)),
                ("name", Value::Text("Ana".into())),
                ("rank", Value::Integer(5)),
            ]),
            &[],
        )
        .unwrap_err();

    assert_eq!(err.code(), ConstraintErrorCode::RelConstraintTypeMismatch);
    assert_eq!(err.column(), "rank");
}

/// Text beyond the declared bound is rejected, naming the bound.
#[test]
fn test_text_bound_enforced() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let err = validator
        .validate_insert(
            &values(&[
                ("id", Value::Integer(1)),
                ("name", Value::Text("Bartholomew".into())),
            ]),
            &[],
        )
        .unwrap_err();

    assert_eq!(err.code(), ConstraintErrorCode::RelConstraintTypeMismatch);
    assert_eq!(err.expected(), Some("text(9)"));
    assert_eq!(err.actual(), Some("text of 11 characters"));
}

// =============================================================================
// Uniqueness
// =============================================================================

/// An equal non-NULL value on a unique column is rejected.
#[test]
fn test_unique_column_rejects_equal_value() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let existing = validator
        .validate_insert(
            &values(&[("id", Value::Integer(1)), ("name", Value::Text("Ana".into()))]),
            &[],
        )
        .unwrap();

    let err = validator
        .validate_insert(
            &values(&[("id", Value::Integer(2)), ("name", Value::Text("Ana".into()))]),
            std::slice::from_ref(&existing),
        )
        .unwrap_err();

    assert_eq!(err.code(), ConstraintErrorCode::RelConstraintUniqueViolation);
    assert_eq!(err.column(), "name");
    assert_eq!(err.value(), Some("'Ana'"));
}

/// Two NULLs on a unique column coexist.
#[test]
fn test_unique_nulls_coexist() {
    let schema = TableSchema::new(
        "device",
        vec![
            ColumnSpec::integer("id").primary_key(),
            ColumnSpec::text("serial").unique(),
        ],
    )
    .unwrap();
    let validator = ConstraintValidator::new(&schema);

    let first = validator
        .validate_insert(&values(&[("id", Value::Integer(1))]), &[])
        .unwrap();
    let second = validator
        .validate_insert(
            &values(&[("id", Value::Integer(2))]),
            std::slice::from_ref(&first),
        )
        .unwrap();

    assert_eq!(first.get("serial"), Some(&Value::Null));
    assert_eq!(second.get("serial"), Some(&Value::Null));
}

// =============================================================================
// Fail-Fast Ordering
// =============================================================================

/// When several columns violate, the earliest schema column is reported.
#[test]
fn test_earliest_column_violation_reported() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    // Missing id (column 0) and mistyped name (column 1)
    let err = validator
        .validate_insert(&values(&[("name", Value::Integer(9))]), &[])
        .unwrap_err();

    assert_eq!(err.column(), "id");
    assert_eq!(
        err.code(),
        ConstraintErrorCode::RelConstraintMissingRequiredColumn
    );
}

// =============================================================================
// Determinism
// =============================================================================

/// The same candidate validates identically on every call.
#[test]
fn test_validation_is_deterministic() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);
    let supplied = values(&[("id", Value::Integer(7)), ("name", Value::Text("Gil".into()))]);

    let first = validator.validate_insert(&supplied, &[]).unwrap();
    for _ in 0..100 {
        assert_eq!(validator.validate_insert(&supplied, &[]).unwrap(), first);
    }
}

/// Validation never mutates the snapshot it reads.
#[test]
fn test_snapshot_is_read_only() {
    let schema = person_schema();
    let validator = ConstraintValidator::new(&schema);

    let existing = vec![Row::from_pairs(vec![
        ("id".into(), Value::Integer(1)),
        ("name".into(), Value::Text("Ana".into())),
        ("active".into(), Value::Boolean(true)),
        ("rank".into(), Value::Float(0.0)),
    ])];
    let before = existing.clone();

    let _ = validator.validate_insert(
        &values(&[("id", Value::Integer(1)), ("name", Value::Text("Bo".into()))]),
        &existing,
    );

    assert_eq!(existing, before);
}

//! Ordered row records
//!
//! A row is an ordered mapping from column name to value. Once a row has
//! been materialized by constraint validation it carries every schema
//! column, in schema column order, with defaults applied.

use serde::{Deserialize, Serialize};

use super::Value;

/// One schema-conformant record.
///
/// Column order is significant: positional access via [`Row::get_at`]
/// follows the order the pairs were pushed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Creates an empty row with capacity for `n` columns
    pub fn with_capacity(n: usize) -> Self {
        Self {
            columns: Vec::with_capacity(n),
        }
    }

    /// Creates a row from ordered name/value pairs
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        Self { columns: pairs }
    }

    /// Appends a column value. Later pushes do not replace earlier ones;
    /// callers are expected to push each column once, in order.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.columns.push((name.into(), value));
    }

    /// Returns the value for the named column, if present
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Returns the value at the given column position, if present
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.columns.get(index).map(|(_, value)| value)
    }

    /// Returns the number of columns in this row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether this row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates name/value pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        let mut row = Row::with_capacity(3);
        row.push("id", Value::Integer(42));
        row.push("name", Value::Text("Pepe".into()));
        row.push("active", Value::Boolean(true));
        row
    }

    #[test]
    fn test_access_by_name() {
        let row = sample_row();
        assert_eq!(row.get("id"), Some(&Value::Integer(42)));
        assert_eq!(row.get("name"), Some(&Value::Text("Pepe".into())));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_access_by_position() {
        let row = sample_row();
        assert_eq!(row.get_at(0), Some(&Value::Integer(42)));
        assert_eq!(row.get_at(2), Some(&Value::Boolean(true)));
        assert_eq!(row.get_at(3), None);
    }

    #[test]
    fn test_column_order_preserved() {
        let row = sample_row();
        assert_eq!(row.column_names(), vec!["id", "name", "active"]);
    }

    #[test]
    fn test_equality_by_pairs() {
        let row = sample_row();
        let same = Row::from_pairs(vec![
            ("id".into(), Value::Integer(42)),
            ("name".into(), Value::Text("Pepe".into())),
            ("active".into(), Value::Boolean(true)),
        ]);
        assert_eq!(row, same);
    }

    #[test]
    fn test_serde_roundtrip() {
        let row = sample_row();
        let encoded = serde_json::to_vec(&row).unwrap();
        let decoded: Row = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(row, decoded);
    }
}

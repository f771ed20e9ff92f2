//! In-memory store
//!
//! Rows live in a Vec per table name, so insertion order falls out of
//! the representation. Append and scan cannot fail.

use std::collections::HashMap;

use super::errors::StoreResult;
use super::Store;
use crate::row::Row;

/// In-memory, insertion-ordered row storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Vec<Row>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Returns the number of rows held for a table
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, Vec::len)
    }

    /// Returns the number of tables that have received at least one row
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Store for MemoryStore {
    fn append(&mut self, table: &str, row: Row) -> StoreResult<()> {
        self.tables.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    fn scan(&self, table: &str) -> StoreResult<Vec<Row>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

//! In-memory catalog of defined table schemas
//!
//! The registry maps table names to their schemas. Registration is
//! first-writer-wins: defining a table name twice is rejected, since
//! schemas are immutable once defined.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::TableSchema;

/// Catalog of table schemas indexed by table name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    tables: HashMap<String, TableSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Registers a table schema.
    ///
    /// # Errors
    ///
    /// Returns `REL_SCHEMA_TABLE_ALREADY_DEFINED` if a schema with the
    /// same table name is already registered.
    pub fn register(&mut self, schema: TableSchema) -> SchemaResult<()> {
        if self.tables.contains_key(schema.name()) {
            return Err(SchemaError::table_already_defined(schema.name()));
        }
        self.tables.insert(schema.name().to_string(), schema);
        Ok(())
    }

    /// Returns the schema for a table name, if registered
    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// Returns whether a table name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns all registered table names, sorted for deterministic output
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

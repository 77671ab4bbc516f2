//! Spreadsheet state: the set of tables and the active-table pointer

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::table::Table;

/// Owns all tables, keyed by name, and tracks which one is active.
///
/// At most one table is active at a time; unqualified cell references in
/// formulas resolve against it. The active name always points at a live
/// entry or is unset.
#[derive(Debug, Default)]
pub struct Spreadsheet {
    /// All tables by name, in creation order
    tables: IndexMap<String, Table>,
    /// Name of the currently active table, if any
    active: Option<String>,
}

impl Spreadsheet {
    /// Create an empty spreadsheet with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check whether a table exists
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Get a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a mutable table by name
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Table names in creation order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Name of the active table, if any
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active table, if any
    pub fn active_table(&self) -> Option<&Table> {
        self.active.as_deref().and_then(|name| self.tables.get(name))
    }

    /// The active table, mutably, if any
    pub fn active_table_mut(&mut self) -> Option<&mut Table> {
        match &self.active {
            Some(name) => self.tables.get_mut(name),
            None => None,
        }
    }

    /// Create a new empty table and make it active
    pub fn create_table(&mut self, name: &str) -> Result<()> {
        if self.tables.contains_key(name) {
            return Err(Error::DuplicateTable(name.to_string()));
        }
        self.tables.insert(name.to_string(), Table::new(name));
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Make an existing table active
    pub fn switch_table(&mut self, name: &str) -> Result<()> {
        if !self.tables.contains_key(name) {
            return Err(Error::TableNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Delete a table; if it was active, clear the active pointer
    pub fn delete_table(&mut self, name: &str) -> Result<()> {
        if self.tables.shift_remove(name).is_none() {
            return Err(Error::TableNotFound(name.to_string()));
        }
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        Ok(())
    }

    /// Deep-copy a table under a new name. The copy is not made active.
    pub fn copy_table(&mut self, source: &str, destination: &str) -> Result<()> {
        if self.tables.contains_key(destination) {
            return Err(Error::DuplicateTable(destination.to_string()));
        }
        let mut copy = self
            .tables
            .get(source)
            .ok_or_else(|| Error::TableNotFound(source.to_string()))?
            .clone();
        copy.set_name(destination);
        self.tables.insert(destination.to_string(), copy);
        Ok(())
    }

    /// Insert a table built elsewhere (e.g. a CSV import), replacing any
    /// table with the same name, and make it active.
    pub fn insert_table(&mut self, table: Table) {
        let name = table.name().to_string();
        self.tables.insert(name.clone(), table);
        self.active = Some(name);
    }
}

//! Table type

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A named grid of named columns and named rows holding text cells.
///
/// Columns are kept in insertion order and every row's cell sequence is
/// positionally aligned to them. Rows may be ragged: a stored sequence can
/// be shorter than the column count, in which case the missing positions
/// read as empty cells and are padded lazily on write. Row and column names
/// compare exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name
    name: String,
    /// Column names, insertion order significant
    columns: Vec<String>,
    /// Row name -> cell values, iterated in insertion order
    rows: IndexMap<String, Vec<String>>,
}

impl Table {
    /// Create a new empty table with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: IndexMap::new(),
        }
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the table name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Shape queries ===

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Check whether a row exists
    pub fn has_row(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    /// Positional index of a column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Row names in insertion order
    pub fn row_names(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Iterate rows as (name, cells) in insertion order.
    ///
    /// Cell sequences are returned as stored, i.e. possibly shorter than the
    /// column count.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Get a row's stored cells
    pub fn row(&self, name: &str) -> Option<&[String]> {
        self.rows.get(name).map(Vec::as_slice)
    }

    // === Cell access ===

    /// Get the text stored at (row, column).
    ///
    /// Both names must exist. A read past the row's stored length yields the
    /// empty string.
    pub fn cell(&self, row: &str, column: &str) -> Result<&str> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        let cells = self
            .rows
            .get(row)
            .ok_or_else(|| Error::RowNotFound(row.to_string()))?;
        Ok(cells.get(idx).map(String::as_str).unwrap_or(""))
    }

    /// Overwrite the single cell at (row, column).
    ///
    /// Both names must exist. The row is padded with empty cells up to the
    /// full column count first.
    pub fn set_cell<S: Into<String>>(&mut self, row: &str, column: &str, value: S) -> Result<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        let width = self.columns.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::RowNotFound(row.to_string()))?;
        if cells.len() < width {
            cells.resize(width, String::new());
        }
        cells[idx] = value.into();
        Ok(())
    }

    // === Column mutation ===

    /// Append a column, giving every existing row one more empty cell.
    ///
    /// Returns `false` (and changes nothing) if the column already exists.
    pub fn add_column<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.has_column(&name) {
            return false;
        }
        self.columns.push(name);
        for cells in self.rows.values_mut() {
            cells.push(String::new());
        }
        true
    }

    /// Remove a column and that position from every row's sequence.
    ///
    /// Rows shorter than the removed index are left untouched. Returns
    /// `false` if the column does not exist.
    pub fn delete_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for cells in self.rows.values_mut() {
            if idx < cells.len() {
                cells.remove(idx);
            }
        }
        true
    }

    /// Rename a column in place, keeping its position and every row's cells.
    pub fn rename_column(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self
            .column_index(old)
            .ok_or_else(|| Error::ColumnNotFound(old.to_string()))?;
        if self.has_column(new) {
            return Err(Error::DuplicateColumn(new.to_string()));
        }
        self.columns[idx] = new.to_string();
        Ok(())
    }

    // === Row mutation ===

    /// Add a row with one empty cell per current column.
    ///
    /// Returns `false` (and changes nothing) if the row already exists.
    pub fn add_row<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.rows.contains_key(&name) {
            return false;
        }
        self.rows.insert(name, vec![String::new(); self.columns.len()]);
        true
    }

    /// Remove a row entirely, preserving the order of the remaining rows.
    ///
    /// Returns `false` if the row does not exist.
    pub fn delete_row(&mut self, name: &str) -> bool {
        self.rows.shift_remove(name).is_some()
    }

    /// Rename a row, keeping its position and cells.
    pub fn rename_row(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self
            .rows
            .get_index_of(old)
            .ok_or_else(|| Error::RowNotFound(old.to_string()))?;
        if self.rows.contains_key(new) {
            return Err(Error::DuplicateRow(new.to_string()));
        }
        // IndexMap has no in-place key rename; rebuild preserving order.
        let entries: Vec<(String, Vec<String>)> = self.rows.drain(..).collect();
        for (i, (name, cells)) in entries.into_iter().enumerate() {
            if i == idx {
                self.rows.insert(new.to_string(), cells);
            } else {
                self.rows.insert(name, cells);
            }
        }
        Ok(())
    }

    /// Overwrite a row's entire sequence positionally.
    ///
    /// Column *i* gets `values[i]` if present, else the empty string; extra
    /// values beyond the column count are ignored.
    pub fn fill_row(&mut self, name: &str, values: &[String]) -> Result<()> {
        let width = self.columns.len();
        let cells = self
            .rows
            .get_mut(name)
            .ok_or_else(|| Error::RowNotFound(name.to_string()))?;
        *cells = (0..width)
            .map(|i| values.get(i).cloned().unwrap_or_default())
            .collect();
        Ok(())
    }

    /// Assign `values[i]` to the column's cell in the *i*-th row, in row
    /// insertion order.
    ///
    /// Rows past the supplied values get the empty string; extra values
    /// beyond the row count are ignored. Ragged rows are padded first.
    pub fn fill_column(&mut self, name: &str, values: &[String]) -> Result<()> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        for (i, cells) in self.rows.values_mut().enumerate() {
            if cells.len() <= idx {
                cells.resize(idx + 1, String::new());
            }
            cells[idx] = values.get(i).cloned().unwrap_or_default();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_column_pads_existing_rows() {
        let mut t = Table::new("t");
        t.add_row("r1");
        t.add_row("r2");
        assert!(t.add_column("C"));
        assert_eq!(t.row("r1").unwrap(), &["".to_string()]);
        assert_eq!(t.row("r2").unwrap(), &["".to_string()]);
        // duplicate is a no-op
        assert!(!t.add_column("C"));
        assert_eq!(t.column_count(), 1);
    }

    #[test]
    fn add_row_matches_column_count() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_column("b");
        assert!(t.add_row("r"));
        assert_eq!(t.row("r").unwrap().len(), 2);
        assert!(!t.add_row("r"));
    }

    #[test]
    fn fill_column_assigns_in_insertion_order() {
        let mut t = Table::new("t");
        t.add_row("r1");
        t.add_row("r2");
        t.add_column("C");
        t.fill_column("C", &strings(&["a", "b"])).unwrap();
        assert_eq!(t.cell("r1", "C").unwrap(), "a");
        assert_eq!(t.cell("r2", "C").unwrap(), "b");
    }

    #[test]
    fn fill_column_short_values_blank_remaining_rows() {
        let mut t = Table::new("t");
        t.add_column("C");
        t.add_row("r1");
        t.add_row("r2");
        t.fill_column("C", &strings(&["only"])).unwrap();
        assert_eq!(t.cell("r1", "C").unwrap(), "only");
        assert_eq!(t.cell("r2", "C").unwrap(), "");
    }

    #[test]
    fn delete_column_removes_position_everywhere() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_column("b");
        t.add_row("r");
        t.fill_row("r", &strings(&["1", "2"])).unwrap();
        assert!(t.delete_column("a"));
        assert_eq!(t.columns(), &["b".to_string()]);
        assert_eq!(t.row("r").unwrap(), &["2".to_string()]);
        assert!(!t.delete_column("a"));
    }

    #[test]
    fn delete_column_skips_short_rows() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_column("b");
        t.add_row("r");
        // make the row ragged: shorter than the index being removed
        t.fill_row("r", &[]).unwrap();
        let cells = t.rows.get_mut("r").unwrap();
        cells.truncate(1);
        assert!(t.delete_column("b"));
        assert_eq!(t.row("r").unwrap().len(), 1);
    }

    #[test]
    fn fill_row_truncates_and_pads() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_column("b");
        t.add_row("r");
        t.fill_row("r", &strings(&["1", "2", "ignored"])).unwrap();
        assert_eq!(t.row("r").unwrap(), &strings(&["1", "2"]));
        t.fill_row("r", &strings(&["x"])).unwrap();
        assert_eq!(t.row("r").unwrap(), &strings(&["x", ""]));
        assert_eq!(
            t.fill_row("nope", &[]),
            Err(Error::RowNotFound("nope".into()))
        );
    }

    #[test]
    fn set_cell_pads_ragged_row() {
        let mut t = Table::new("t");
        t.add_row("r");
        t.add_column("a");
        t.add_column("b");
        // force a ragged row shorter than the column count
        t.rows.get_mut("r").unwrap().clear();
        t.set_cell("r", "b", "x").unwrap();
        assert_eq!(t.row("r").unwrap(), &strings(&["", "x"]));
    }

    #[test]
    fn cell_read_past_stored_length_is_empty() {
        let mut t = Table::new("t");
        t.add_row("r");
        t.add_column("a");
        t.rows.get_mut("r").unwrap().clear();
        assert_eq!(t.cell("r", "a").unwrap(), "");
    }

    #[test]
    fn cell_errors_name_the_missing_part() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_row("r");
        assert_eq!(t.cell("r", "z"), Err(Error::ColumnNotFound("z".into())));
        assert_eq!(t.cell("z", "a"), Err(Error::RowNotFound("z".into())));
        assert_eq!(
            t.set_cell("z", "a", "v"),
            Err(Error::RowNotFound("z".into()))
        );
    }

    #[test]
    fn rename_row_keeps_order_and_cells() {
        let mut t = Table::new("t");
        t.add_column("C");
        t.add_row("r1");
        t.add_row("r2");
        t.add_row("r3");
        t.set_cell("r2", "C", "v").unwrap();
        t.rename_row("r2", "mid").unwrap();
        let names: Vec<&str> = t.row_names().collect();
        assert_eq!(names, vec!["r1", "mid", "r3"]);
        assert_eq!(t.cell("mid", "C").unwrap(), "v");
        assert_eq!(
            t.rename_row("mid", "r1"),
            Err(Error::DuplicateRow("r1".into()))
        );
        assert_eq!(
            t.rename_row("gone", "x"),
            Err(Error::RowNotFound("gone".into()))
        );
    }

    #[test]
    fn rename_column_keeps_position() {
        let mut t = Table::new("t");
        t.add_column("a");
        t.add_column("b");
        t.rename_column("a", "first").unwrap();
        assert_eq!(t.columns(), &strings(&["first", "b"]));
        assert_eq!(
            t.rename_column("first", "b"),
            Err(Error::DuplicateColumn("b".into()))
        );
    }

    #[test]
    fn delete_row_preserves_remaining_order() {
        let mut t = Table::new("t");
        t.add_row("r1");
        t.add_row("r2");
        t.add_row("r3");
        assert!(t.delete_row("r2"));
        let names: Vec<&str> = t.row_names().collect();
        assert_eq!(names, vec!["r1", "r3"]);
        assert!(!t.delete_row("r2"));
    }
}

//! Command executor
//!
//! Owns the spreadsheet state and one formula evaluator, and applies one
//! parsed command at a time. Each command runs to completion before the
//! next is read, so a mutation is never interleaved with an in-flight
//! evaluation.

use std::path::Path;

use tabulet::prelude::*;

use crate::command::Command;
use crate::render::render_table;

const NO_ACTIVE_TABLE: &str = "No active table. Create a table first.";

/// Applies commands to the spreadsheet and produces user-facing messages.
pub struct Executor {
    state: Spreadsheet,
    evaluator: Evaluator,
}

impl Executor {
    pub fn new() -> Self {
        Self {
            state: Spreadsheet::new(),
            evaluator: Evaluator::new(),
        }
    }

    /// The spreadsheet being operated on
    pub fn state(&self) -> &Spreadsheet {
        &self.state
    }

    /// Execute one command, returning the message to show the user.
    pub fn execute(&mut self, command: Command) -> String {
        log::debug!("executing {command:?}");
        match command {
            Command::CreateTable { name } => self.create_table(&name),
            Command::DeleteTable { name } => self.delete_table(&name),
            Command::SwitchTable { name } => self.switch_table(&name),
            Command::AddRows { names } => self.add_rows(&names),
            Command::DeleteRows { names } => self.delete_rows(&names),
            Command::AddColumns { names } => self.add_columns(&names),
            Command::DeleteColumns { names } => self.delete_columns(&names),
            Command::FillRow { row, values } => self.fill_row(&row, &values),
            Command::FillColumn { column, values } => self.fill_column(&column, &values),
            Command::SetCell { row, column, value } => self.set_cell(&row, &column, &value),
            Command::ShowTable => self.show_table(),
            Command::ShowTables => self.show_tables(),
            Command::RenameRow { old, new } => self.rename_row(&old, &new),
            Command::RenameColumn { old, new } => self.rename_column(&old, &new),
            Command::CopyTable {
                source,
                destination,
            } => self.copy_table(&source, &destination),
            Command::ExportTable { file } => self.export_table(&file),
            Command::ImportTable { file } => self.import_table(&file),
            Command::DefineConstant { name, value } => self.define_constant(&name, &value),
            Command::Help => help_text(),
            // `exit` is handled by the REPL loop before execution
            Command::Exit => String::new(),
        }
    }

    // === Tables ===

    fn create_table(&mut self, name: &str) -> String {
        if name.is_empty() {
            return "Table name cannot be empty.".to_string();
        }
        if self.state.has_table(name) {
            // original behavior: creating an existing table switches to it
            let _ = self.state.switch_table(name);
            return format!("Table '{name}' already exists. Switched to it.");
        }
        match self.state.create_table(name) {
            Ok(()) => format!("Created table '{name}' and set as active."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn delete_table(&mut self, name: &str) -> String {
        match self.state.delete_table(name) {
            Ok(()) => format!("Deleted table '{name}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn switch_table(&mut self, name: &str) -> String {
        match self.state.switch_table(name) {
            Ok(()) => format!("Switched to table '{name}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn copy_table(&mut self, source: &str, destination: &str) -> String {
        match self.state.copy_table(source, destination) {
            Ok(()) => format!("Copied table '{source}' to '{destination}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn show_tables(&self) -> String {
        if self.state.table_count() == 0 {
            return "No tables.".to_string();
        }
        let mut out = String::new();
        for name in self.state.table_names() {
            let marker = if self.state.active_name() == Some(name) {
                "* "
            } else {
                "  "
            };
            out.push_str(marker);
            out.push_str(name);
            out.push('\n');
        }
        out.pop();
        out
    }

    fn show_table(&self) -> String {
        let Some(table) = self.state.active_table() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        if table.row_count() == 0 && table.column_count() == 0 {
            return format!("Table '{}' is empty.", table.name());
        }
        format!("{}:\n{}", table.name(), render_table(table).trim_end())
    }

    // === Rows and columns ===

    fn add_rows(&mut self, names: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            if table.add_row(name.clone()) {
                out.push(format!("Added row '{name}'."));
            } else {
                out.push(format!("Row '{name}' already exists."));
            }
        }
        out.join("\n")
    }

    fn delete_rows(&mut self, names: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            if table.delete_row(name) {
                out.push(format!("Deleted row '{name}'."));
            } else {
                out.push(format!("Row '{name}' does not exist."));
            }
        }
        out.join("\n")
    }

    fn add_columns(&mut self, names: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            if table.add_column(name.clone()) {
                out.push(format!("Added column '{name}'."));
            } else {
                out.push(format!("Column '{name}' already exists."));
            }
        }
        out.join("\n")
    }

    fn delete_columns(&mut self, names: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            if table.delete_column(name) {
                out.push(format!("Deleted column '{name}'."));
            } else {
                out.push(format!("Column '{name}' does not exist."));
            }
        }
        out.join("\n")
    }

    fn rename_row(&mut self, old: &str, new: &str) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match table.rename_row(old, new) {
            Ok(()) => format!("Renamed row '{old}' to '{new}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn rename_column(&mut self, old: &str, new: &str) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match table.rename_column(old, new) {
            Ok(()) => format!("Renamed column '{old}' to '{new}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn fill_row(&mut self, row: &str, values: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match table.fill_row(row, values) {
            Ok(()) => format!("Filled row '{row}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn fill_column(&mut self, column: &str, values: &[String]) -> String {
        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match table.fill_column(column, values) {
            Ok(()) => format!("Filled column '{column}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    // === Cells and formulas ===

    fn set_cell(&mut self, row: &str, column: &str, value: &str) -> String {
        let Some(table) = self.state.active_table() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        if !table.has_row(row) {
            return format!("Row '{row}' does not exist.");
        }
        if !table.has_column(column) {
            return format!("Column '{column}' does not exist.");
        }

        // A leading '=' marks a formula; the engine gets the rest. The
        // cell is assigned only after a successful evaluation.
        let text = match value.strip_prefix('=') {
            Some(expression) => {
                match self.evaluator.evaluate(expression, self.state.active_table()) {
                    Ok(result) => format_number(result),
                    Err(e) => return format!("Error: {e}"),
                }
            }
            None => value.to_string(),
        };

        let Some(table) = self.state.active_table_mut() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match table.set_cell(row, column, text.clone()) {
            Ok(()) => format!("Set cell '{row}.{column}' to '{text}'."),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn define_constant(&mut self, name: &str, value: &str) -> String {
        let Ok(parsed) = value.parse::<f64>() else {
            return format!("'{value}' is not a number.");
        };
        match self.evaluator.register_constant(name, parsed) {
            Ok(()) => format!("Defined constant '{name}' = {parsed}."),
            Err(e) => format!("Error: {e}"),
        }
    }

    // === Import / export ===

    fn export_table(&self, file: &str) -> String {
        let Some(table) = self.state.active_table() else {
            return NO_ACTIVE_TABLE.to_string();
        };
        match CsvWriter::write_file(table, file, &CsvWriteOptions::default()) {
            Ok(()) => format!("Exported table '{}' to '{file}'.", table.name()),
            Err(e) => format!("Error: {e}"),
        }
    }

    fn import_table(&mut self, file: &str) -> String {
        let name = Path::new(file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imported".to_string());
        match CsvReader::read_file(file, &name, &CsvReadOptions::default()) {
            Ok(table) => {
                self.state.insert_table(table);
                format!("Imported table '{name}' from '{file}' and set as active.")
            }
            Err(e) => format!("Error: {e}"),
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an evaluation result for storage in a cell: integral values
/// print without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn help_text() -> String {
    "Commands:\n\
     \x20   create table named <name>\n\
     \x20   delete table <name> | switch table <name> | copy table <a> to <b>\n\
     \x20   add rows <name...> | delete rows <name...>\n\
     \x20   add columns <name...> | delete columns <name...>\n\
     \x20   rename row <old> to <new> | rename column <old> to <new>\n\
     \x20   fill <row> with <value...> | fill column <col> with <value...>\n\
     \x20   set <row> <col> to <value>      (use '=' for formulas: set r c to = 1 + R1.C1)\n\
     \x20   show table | show tables\n\
     \x20   export table to <file.csv> | import table from <file.csv>\n\
     \x20   define <name> as <number>\n\
     \x20   help | exit"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn run(executor: &mut Executor, line: &str) -> String {
        executor.execute(parse(line).expect("command should parse"))
    }

    fn setup() -> Executor {
        let mut ex = Executor::new();
        run(&mut ex, "create table named t");
        run(&mut ex, "add columns A B");
        run(&mut ex, "add rows r1 r2");
        ex
    }

    #[test]
    fn commands_require_an_active_table() {
        let mut ex = Executor::new();
        assert_eq!(run(&mut ex, "add rows r1"), NO_ACTIVE_TABLE);
        assert_eq!(run(&mut ex, "show table"), NO_ACTIVE_TABLE);
        assert_eq!(run(&mut ex, "set r1 C to 5"), NO_ACTIVE_TABLE);
    }

    #[test]
    fn create_switches_when_table_exists() {
        let mut ex = setup();
        run(&mut ex, "create table named other");
        let msg = run(&mut ex, "create table named t");
        assert_eq!(msg, "Table 't' already exists. Switched to it.");
        assert_eq!(ex.state().active_name(), Some("t"));
    }

    #[test]
    fn set_cell_stores_plain_text() {
        let mut ex = setup();
        run(&mut ex, "set r1 A to hello");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "A").unwrap(), "hello");
    }

    #[test]
    fn set_cell_evaluates_formulas() {
        let mut ex = setup();
        run(&mut ex, "set r1 A to 5");
        let msg = run(&mut ex, "set r1 B to = r1.A * 2 + 1");
        assert_eq!(msg, "Set cell 'r1.B' to '11'.");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "B").unwrap(), "11");
    }

    #[test]
    fn failed_formula_leaves_cell_untouched() {
        let mut ex = setup();
        run(&mut ex, "set r1 A to before");
        let msg = run(&mut ex, "set r1 A to = missing.Ref + 1");
        assert!(msg.starts_with("Error:"), "got: {msg}");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "A").unwrap(), "before");
    }

    #[test]
    fn formula_results_format_cleanly() {
        let mut ex = setup();
        run(&mut ex, "set r1 A to = 1 / 4");
        run(&mut ex, "set r1 B to = 2 + 2");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "A").unwrap(), "0.25");
        assert_eq!(table.cell("r1", "B").unwrap(), "4");
    }

    #[test]
    fn defined_constants_reach_formulas() {
        let mut ex = setup();
        run(&mut ex, "define tau as 6.5");
        run(&mut ex, "set r1 A to = tau * 2");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "A").unwrap(), "13");

        assert_eq!(
            run(&mut ex, "define bad_value as oops"),
            "'oops' is not a number."
        );
    }

    #[test]
    fn row_and_column_messages_report_duplicates() {
        let mut ex = setup();
        assert_eq!(run(&mut ex, "add rows r1"), "Row 'r1' already exists.");
        assert_eq!(
            run(&mut ex, "add rows r3 r1"),
            "Added row 'r3'.\nRow 'r1' already exists."
        );
        assert_eq!(
            run(&mut ex, "delete columns Z"),
            "Column 'Z' does not exist."
        );
    }

    #[test]
    fn show_tables_marks_the_active_one() {
        let mut ex = setup();
        run(&mut ex, "create table named other");
        assert_eq!(run(&mut ex, "show tables"), "  t\n* other");
    }

    #[test]
    fn fill_and_show() {
        let mut ex = setup();
        run(&mut ex, "fill r1 with 1 2");
        run(&mut ex, "fill column A with 10 20");
        let table = ex.state().active_table().unwrap();
        assert_eq!(table.cell("r1", "A").unwrap(), "10");
        assert_eq!(table.cell("r2", "A").unwrap(), "20");
        assert_eq!(table.cell("r1", "B").unwrap(), "2");

        let shown = ex.execute(Command::ShowTable);
        assert!(shown.contains("Row"), "got: {shown}");
        assert!(shown.contains("r2"), "got: {shown}");
    }

    #[test]
    fn deleting_active_table_requires_recreate() {
        let mut ex = setup();
        run(&mut ex, "delete table t");
        assert_eq!(run(&mut ex, "add rows r9"), NO_ACTIVE_TABLE);
    }
}

//! Parsed user commands

/// One fully parsed user command.
///
/// Commands are produced by [`crate::parser::parse`] and consumed by
/// [`crate::executor::Executor`]; parsing never touches the spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `create table named <name>`
    CreateTable { name: String },
    /// `delete table <name>`
    DeleteTable { name: String },
    /// `switch table <name>`
    SwitchTable { name: String },
    /// `add rows <name...>`
    AddRows { names: Vec<String> },
    /// `delete rows <name...>`
    DeleteRows { names: Vec<String> },
    /// `add columns <name...>`
    AddColumns { names: Vec<String> },
    /// `delete columns <name...>`
    DeleteColumns { names: Vec<String> },
    /// `fill <row> with <value...>`
    FillRow { row: String, values: Vec<String> },
    /// `fill column <column> with <value...>`
    FillColumn { column: String, values: Vec<String> },
    /// `set <row> <column> to <value>`; a value starting with `=` is a formula
    SetCell {
        row: String,
        column: String,
        value: String,
    },
    /// `show table`
    ShowTable,
    /// `show tables`
    ShowTables,
    /// `rename row <old> to <new>`
    RenameRow { old: String, new: String },
    /// `rename column <old> to <new>`
    RenameColumn { old: String, new: String },
    /// `copy table <source> to <destination>`
    CopyTable {
        source: String,
        destination: String,
    },
    /// `export table to <file>`
    ExportTable { file: String },
    /// `import table from <file>`
    ImportTable { file: String },
    /// `define <name> as <number>`
    DefineConstant { name: String, value: String },
    /// `help`
    Help,
    /// `exit`
    Exit,
}

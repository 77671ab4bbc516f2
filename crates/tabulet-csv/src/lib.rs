//! # tabulet-csv
//!
//! CSV export and import for tabulet tables.
//!
//! The on-disk shape mirrors the in-memory table: a header record naming
//! the row-name column followed by the table's columns, then one record
//! per row in insertion order. Exporting and re-importing a table
//! reproduces its column list and row/value mapping string-for-string.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions};
pub use reader::CsvReader;
pub use writer::CsvWriter;

/// Label of the leading row-name column in exported files
pub const ROW_NAME_HEADER: &str = "Row";

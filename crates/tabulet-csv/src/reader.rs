//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tabulet_core::Table;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table with the given name
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        table_name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, table_name, options)
    }

    /// Read CSV from a reader into a table.
    ///
    /// The first record is the header: its leading field labels the
    /// row-name column and is discarded, the rest become the table's
    /// columns. Every following record contributes one row, named by its
    /// first field.
    pub fn read<R: Read>(reader: R, table_name: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(CsvError::MissingHeader),
        };

        let mut table = Table::new(table_name);
        for column in header.iter().skip(1) {
            if !table.add_column(column) {
                log::warn!("duplicate column {column:?} in CSV header, keeping the first");
            }
        }

        for (index, record) in records.enumerate() {
            let record = record?;
            let Some(row_name) = record.get(0).filter(|name| !name.is_empty()) else {
                return Err(CsvError::MissingRowName(index + 1));
            };
            if !table.add_row(row_name) {
                log::warn!("duplicate row {row_name:?} in CSV input, overwriting");
            }
            let values: Vec<String> = record.iter().skip(1).map(str::to_string).collect();
            // the row is known to exist, fill_row cannot fail here
            let _ = table.fill_row(row_name, &values);
        }

        Ok(table)
    }
}

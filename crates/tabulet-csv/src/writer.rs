//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tabulet_core::Table;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;
use crate::ROW_NAME_HEADER;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer.
    ///
    /// Emits a header record (`Row` plus the column names) followed by one
    /// record per row in insertion order, each padded to the full column
    /// count so ragged rows export their implicit empty cells.
    pub fn write<W: Write>(table: &Table, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .from_writer(writer);

        let mut header = Vec::with_capacity(table.column_count() + 1);
        header.push(ROW_NAME_HEADER);
        header.extend(table.columns().iter().map(String::as_str));
        csv_writer.write_record(&header)?;

        let width = table.column_count();
        for (name, cells) in table.rows() {
            let mut record = Vec::with_capacity(width + 1);
            record.push(name);
            for i in 0..width {
                record.push(cells.get(i).map(String::as_str).unwrap_or(""));
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

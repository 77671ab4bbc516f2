//! Error types for tabulet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabulet-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Table not found by name
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Table name already exists
    #[error("Table already exists: {0}")]
    DuplicateTable(String),

    /// Row not found by name
    #[error("Row not found: {0}")]
    RowNotFound(String),

    /// Row name already exists
    #[error("Row already exists: {0}")]
    DuplicateRow(String),

    /// Column not found by name
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column name already exists
    #[error("Column already exists: {0}")]
    DuplicateColumn(String),
}

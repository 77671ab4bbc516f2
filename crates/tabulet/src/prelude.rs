//! Prelude module - common imports for tabulet users
//!
//! ```rust
//! use tabulet::prelude::*;
//! ```

pub use crate::{
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Formula types
    EvalError,
    EvalResult,
    Evaluator,
    // Error types
    Error,
    Result,
    // Main types
    Spreadsheet,
    Table,
};

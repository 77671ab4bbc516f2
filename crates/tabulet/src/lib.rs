//! # tabulet
//!
//! A library for small in-memory spreadsheets made of named tables, where
//! rows and columns are addressed by name and cells hold text. Derived
//! numeric values are computed through arithmetic formulas that reference
//! cells as `Row.Column`.
//!
//! The formula engine is a three-stage pipeline: a tokenizer, an
//! infix-to-postfix (shunting-yard) converter, and a postfix (RPN)
//! evaluator that resolves cell references against the active table.
//!
//! ## Example
//!
//! ```rust
//! use tabulet::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.create_table("costs").unwrap();
//!
//! let table = sheet.active_table_mut().unwrap();
//! table.add_column("Amount");
//! table.add_row("Widgets");
//! table.set_cell("Widgets", "Amount", "5").unwrap();
//!
//! let eval = Evaluator::new();
//! let total = eval
//!     .evaluate("Widgets.Amount * 2 + 1", sheet.active_table())
//!     .unwrap();
//! assert_eq!(total, 11.0);
//! ```

pub mod prelude;

// Re-export core types
pub use tabulet_core::{Error, Result, Spreadsheet, Table};

// Re-export formula types
pub use tabulet_formula::{
    is_identifier, to_postfix, tokenize, BinaryOp, ConstantRegistry, EvalError, EvalResult,
    Evaluator, FunctionRegistry, Token,
};

// Re-export I/O types
pub use tabulet_csv::{CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter};

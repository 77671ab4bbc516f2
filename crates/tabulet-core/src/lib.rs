//! # tabulet-core
//!
//! Core data structures for the tabulet spreadsheet library.
//!
//! This crate provides the fundamental types used throughout tabulet:
//! - [`Table`] - A named grid of named columns and named rows holding text cells
//! - [`Spreadsheet`] - The set of tables, with at most one active table
//!
//! ## Example
//!
//! ```rust
//! use tabulet_core::Spreadsheet;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.create_table("budget").unwrap();
//!
//! let table = sheet.active_table_mut().unwrap();
//! table.add_column("Amount");
//! table.add_row("Rent");
//! table.set_cell("Rent", "Amount", "1200").unwrap();
//!
//! assert_eq!(table.cell("Rent", "Amount").unwrap(), "1200");
//! ```

pub mod error;
pub mod state;
pub mod table;

// Re-exports for convenience
pub use error::{Error, Result};
pub use state::Spreadsheet;
pub use table::Table;

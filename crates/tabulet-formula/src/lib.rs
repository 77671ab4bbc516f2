//! # tabulet-formula
//!
//! Formula engine for tabulet.
//!
//! This crate provides:
//! - Tokenizing (text → tokens)
//! - Infix-to-postfix conversion (shunting-yard)
//! - Postfix (RPN) evaluation against the active table
//! - Constant and function registries
//!
//! ## Example
//!
//! ```rust
//! use tabulet_formula::Evaluator;
//!
//! let eval = Evaluator::new();
//! assert_eq!(eval.evaluate("2 + 3 * 4", None).unwrap(), 14.0);
//! assert_eq!(eval.evaluate("sqrt(16)", None).unwrap(), 4.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod postfix;
pub mod registry;
pub mod token;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use postfix::to_postfix;
pub use registry::{ConstantRegistry, FunctionRegistry};
pub use token::{is_identifier, tokenize, BinaryOp, Token};

//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur during formula conversion or evaluation.
///
/// Every variant is terminal to the one evaluation: there are no retries
/// and no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Unbalanced parentheses during conversion or at drain time
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// Operator applied with insufficient operands, or the evaluation did
    /// not collapse to exactly one value
    #[error("Invalid expression")]
    InvalidExpression,

    /// A postfix token is none of: operator, number, cell reference,
    /// function, constant
    #[error("Unrecognized token '{0}'")]
    UnrecognizedToken(String),

    /// A function was applied with an empty operand stack
    #[error("Invalid invocation of function '{0}'")]
    InvalidFunctionCall(String),

    /// A cell reference was evaluated while no table is active
    #[error("No active table for cell reference")]
    NoActiveTable,

    /// The referenced row or column does not exist in the active table
    #[error("Invalid cell reference '{0}'")]
    InvalidCellReference(String),

    /// The referenced cell's text does not parse as a finite number
    #[error("Cell {0} does not contain a numeric value")]
    NonNumericCell(String),

    /// Constant registration was given a malformed name
    #[error("Invalid constant name '{0}'")]
    InvalidConstantName(String),
}

//! Postfix (RPN) evaluator
//!
//! Runs the full pipeline (tokenize → shunting-yard → RPN) and executes
//! the postfix sequence over an explicit operand stack, resolving cell
//! references against the active table and dispatching functions and
//! constants through the instance-owned registries.

use tabulet_core::Table;

use crate::error::{EvalError, EvalResult};
use crate::postfix::to_postfix;
use crate::registry::{ConstantRegistry, FunctionRegistry};
use crate::token::{tokenize, Token};

/// The formula evaluation engine.
///
/// Owns its constant and function registries; nothing is process-global.
/// An evaluation is a pure, blocking computation over the current snapshot
/// of the table it is given — the evaluator never writes to the table, and
/// the caller is responsible for storing the result.
pub struct Evaluator {
    constants: ConstantRegistry,
    functions: FunctionRegistry,
}

impl Evaluator {
    /// Create an evaluator with the built-in functions and the seeded
    /// constants (`pi`, `e`)
    pub fn new() -> Self {
        Self {
            constants: ConstantRegistry::new(),
            functions: FunctionRegistry::new(),
        }
    }

    /// Add or update a named constant usable in expressions.
    ///
    /// Fails with [`EvalError::InvalidConstantName`] if the name does not
    /// match `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn register_constant(&mut self, name: &str, value: f64) -> EvalResult<()> {
        self.constants.register(name, value)
    }

    /// Evaluate an infix expression against the active table, if any.
    ///
    /// The expression must already have any leading formula marker
    /// stripped by the caller.
    pub fn evaluate(&self, expression: &str, active_table: Option<&Table>) -> EvalResult<f64> {
        let tokens = tokenize(expression);
        let rpn = to_postfix(tokens, &self.functions)?;
        self.evaluate_postfix(&rpn, active_table)
    }

    /// Execute an already-converted postfix sequence
    pub fn evaluate_postfix(
        &self,
        rpn: &[Token],
        active_table: Option<&Table>,
    ) -> EvalResult<f64> {
        let mut stack: Vec<f64> = Vec::new();

        for token in rpn {
            match token {
                Token::Op(op) => {
                    let b = stack.pop().ok_or(EvalError::InvalidExpression)?;
                    let a = stack.pop().ok_or(EvalError::InvalidExpression)?;
                    stack.push(op.apply(a, b));
                }

                Token::Number(text) => {
                    let value: f64 = text
                        .parse()
                        .map_err(|_| EvalError::UnrecognizedToken(text.clone()))?;
                    stack.push(value);
                }

                Token::CellRef { row, column } => {
                    stack.push(self.cell_value(row, column, active_table)?);
                }

                Token::Ident(name) => {
                    if let Some(func) = self.functions.get(name) {
                        let a = stack
                            .pop()
                            .ok_or_else(|| EvalError::InvalidFunctionCall(name.clone()))?;
                        stack.push(func(a));
                    } else if let Some(value) = self.constants.get(name) {
                        stack.push(value);
                    } else {
                        return Err(EvalError::UnrecognizedToken(name.clone()));
                    }
                }

                // Grouping tokens never survive conversion
                Token::LeftParen | Token::RightParen | Token::Comma => {
                    return Err(EvalError::InvalidExpression);
                }
            }
        }

        if stack.len() != 1 {
            return Err(EvalError::InvalidExpression);
        }
        Ok(stack[0])
    }

    /// Resolve `row.column` against the active table as a finite number
    fn cell_value(&self, row: &str, column: &str, table: Option<&Table>) -> EvalResult<f64> {
        let table = table.ok_or(EvalError::NoActiveTable)?;
        if !table.has_row(row) || !table.has_column(column) {
            return Err(EvalError::InvalidCellReference(format!("{row}.{column}")));
        }
        let raw = table
            .cell(row, column)
            .map_err(|_| EvalError::InvalidCellReference(format!("{row}.{column}")))?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| EvalError::NonNumericCell(format!("{row}.{column}")))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

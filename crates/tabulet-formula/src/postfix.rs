//! Infix-to-postfix conversion (shunting-yard)

use crate::error::{EvalError, EvalResult};
use crate::registry::FunctionRegistry;
use crate::token::Token;

/// Reorder an infix token sequence into postfix (RPN) order.
///
/// Operands (numbers, cell references, and identifiers that are not
/// registered functions) go straight to the output queue; operators wait on
/// an explicit stack until precedence or grouping releases them. The only
/// failure is [`EvalError::MismatchedParentheses`]; unknown identifiers
/// pass through and are reported by the evaluator.
pub fn to_postfix(tokens: Vec<Token>, functions: &FunctionRegistry) -> EvalResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::CellRef { .. } => output.push(token),

            Token::Ident(ref name) => {
                if functions.contains(name) {
                    ops.push(token);
                } else {
                    // constant or unknown; the evaluator decides which
                    output.push(token);
                }
            }

            // Argument separator: flush operators back to the opening
            // paren, which stays on the stack. The comma itself is dropped.
            Token::Comma => {
                while let Some(top) = ops.pop() {
                    if matches!(top, Token::LeftParen) {
                        ops.push(top);
                        break;
                    }
                    output.push(top);
                }
            }

            Token::LeftParen => ops.push(token),

            Token::RightParen => {
                loop {
                    match ops.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(top),
                        None => return Err(EvalError::MismatchedParentheses),
                    }
                }
                // A function directly under the paren binds to the
                // argument that was just completed.
                if matches!(ops.last(), Some(Token::Ident(_))) {
                    if let Some(func) = ops.pop() {
                        output.push(func);
                    }
                }
            }

            Token::Op(op) => {
                // Left-associative: equal precedence pops before pushing.
                while let Some(top) = ops.pop() {
                    match top {
                        Token::Op(waiting) if waiting.precedence() >= op.precedence() => {
                            output.push(Token::Op(waiting));
                        }
                        other => {
                            ops.push(other);
                            break;
                        }
                    }
                }
                ops.push(Token::Op(op));
            }
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top, Token::LeftParen | Token::RightParen) {
            return Err(EvalError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{tokenize, BinaryOp};
    use pretty_assertions::assert_eq;

    fn convert(expr: &str) -> EvalResult<Vec<Token>> {
        to_postfix(tokenize(expr), &FunctionRegistry::new())
    }

    fn rendered(expr: &str) -> String {
        convert(expr)
            .unwrap()
            .iter()
            .map(|t| match t {
                Token::Number(n) => n.clone(),
                Token::Ident(i) => i.clone(),
                Token::CellRef { row, column } => format!("{row}.{column}"),
                Token::Op(op) => op.symbol().to_string(),
                Token::LeftParen => "(".to_string(),
                Token::RightParen => ")".to_string(),
                Token::Comma => ",".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(rendered("2 + 3 * 4"), "2 3 4 * +");
        assert_eq!(rendered("2 * 3 + 4"), "2 3 * 4 +");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(rendered("(2 + 3) * 4"), "2 3 + 4 *");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(rendered("8 - 3 - 2"), "8 3 - 2 -");
        assert_eq!(rendered("8 / 4 / 2"), "8 4 / 2 /");
    }

    #[test]
    fn function_binds_to_its_argument() {
        assert_eq!(rendered("sqrt(16)"), "16 sqrt");
        assert_eq!(rendered("sqrt(9) + 1"), "9 sqrt 1 +");
        assert_eq!(rendered("sqrt(sqrt(16))"), "16 sqrt sqrt");
    }

    #[test]
    fn comma_separates_without_emitting() {
        assert_eq!(rendered("sqrt(1 + 2, 3)"), "1 2 + 3 sqrt");
    }

    #[test]
    fn constants_and_unknowns_pass_through() {
        assert_eq!(rendered("pi * 2"), "pi 2 *");
        assert_eq!(rendered("bogus + 1"), "bogus 1 +");
    }

    #[test]
    fn cell_references_are_operands() {
        assert_eq!(rendered("R1.C1 + 1"), "R1.C1 1 +");
    }

    #[test]
    fn unbalanced_parens_fail() {
        assert_eq!(convert("(1 + 2"), Err(EvalError::MismatchedParentheses));
        assert_eq!(convert("1 + 2)"), Err(EvalError::MismatchedParentheses));
        assert_eq!(convert(")("), Err(EvalError::MismatchedParentheses));
    }

    #[test]
    fn operator_tokens_survive_conversion() {
        let out = convert("1 - 2").unwrap();
        assert_eq!(
            out,
            vec![
                Token::Number("1".to_string()),
                Token::Number("2".to_string()),
                Token::Op(BinaryOp::Sub),
            ]
        );
    }
}

//! Formula tokenizer
//!
//! Lexes a formula string into an ordered token sequence. Anything the
//! lexer cannot match (whitespace included) is skipped, never an error;
//! downstream stages report what the skipping left behind.

use lazy_regex::regex;

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operator precedence: additive = 1, multiplicative = 2.
    /// All four are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// Apply the operator with IEEE semantics. Division by zero yields
    /// infinity or NaN, never an error.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }

    /// The source character for this operator
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

/// A lexical token of the formula language
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, kept as source text
    Number(String),
    /// Cell reference `Row.Column`
    CellRef { row: String, column: String },
    /// Function or constant name
    Ident(String),
    /// One of `+ - * /`
    Op(BinaryOp),
    LeftParen,
    RightParen,
    Comma,
}

/// Check a name against the identifier pattern `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    regex!(r"^[A-Za-z_][A-Za-z0-9_]*$").is_match(name)
}

/// Lex a formula string into tokens in source order.
///
/// Matches, in priority order: a cell reference (`Ident.Ident`), a bare
/// identifier, an unsigned numeric literal with an optional single
/// fractional part, or one of the single characters `+ - * / ( ) ,`.
/// Unmatched input is dropped silently; non-whitespace drops are reported
/// at debug level.
pub fn tokenize(text: &str) -> Vec<Token> {
    let pattern = regex!(
        r"[A-Za-z_][A-Za-z0-9_]*\.[A-Za-z_][A-Za-z0-9_]*|[A-Za-z_][A-Za-z0-9_]*|[0-9]+(?:\.[0-9]+)?|[+\-*/(),]"
    );

    let mut tokens = Vec::new();
    let mut last_end = 0;
    for m in pattern.find_iter(text) {
        report_skipped(&text[last_end..m.start()]);
        last_end = m.end();
        tokens.push(classify(m.as_str()));
    }
    report_skipped(&text[last_end..]);
    tokens
}

fn report_skipped(gap: &str) {
    let gap = gap.trim();
    if !gap.is_empty() {
        log::debug!("tokenizer skipped unmatched input: {gap:?}");
    }
}

fn classify(lexeme: &str) -> Token {
    match lexeme {
        "+" => return Token::Op(BinaryOp::Add),
        "-" => return Token::Op(BinaryOp::Sub),
        "*" => return Token::Op(BinaryOp::Mul),
        "/" => return Token::Op(BinaryOp::Div),
        "(" => return Token::LeftParen,
        ")" => return Token::RightParen,
        "," => return Token::Comma,
        _ => {}
    }

    let first = lexeme.chars().next().unwrap_or_default();
    if first.is_ascii_digit() {
        return Token::Number(lexeme.to_string());
    }

    // A dot in a non-numeric lexeme can only be the cell-reference
    // separator; both halves matched the identifier pattern.
    if let Some((row, column)) = lexeme.split_once('.') {
        return Token::CellRef {
            row: row.to_string(),
            column: column.to_string(),
        };
    }

    Token::Ident(lexeme.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> Token {
        Token::Number(text.to_string())
    }

    fn ident(name: &str) -> Token {
        Token::Ident(name.to_string())
    }

    #[test]
    fn lexes_arithmetic() {
        assert_eq!(
            tokenize("2 + 3 * 4"),
            vec![
                num("2"),
                Token::Op(BinaryOp::Add),
                num("3"),
                Token::Op(BinaryOp::Mul),
                num("4"),
            ]
        );
    }

    #[test]
    fn lexes_fractional_numbers() {
        assert_eq!(tokenize("1.25"), vec![num("1.25")]);
        // no exponent notation: the 'e' becomes an identifier
        assert_eq!(tokenize("1e3"), vec![num("1"), ident("e3")]);
    }

    #[test]
    fn cell_reference_wins_over_identifier() {
        assert_eq!(
            tokenize("R1.C1"),
            vec![Token::CellRef {
                row: "R1".to_string(),
                column: "C1".to_string(),
            }]
        );
        // a dangling dot is dropped, leaving a plain identifier
        assert_eq!(tokenize("R1."), vec![ident("R1")]);
    }

    #[test]
    fn lexes_function_call_shape() {
        assert_eq!(
            tokenize("sqrt(16)"),
            vec![ident("sqrt"), Token::LeftParen, num("16"), Token::RightParen]
        );
    }

    #[test]
    fn comma_is_a_token() {
        assert_eq!(
            tokenize("f(1,2)"),
            vec![
                ident("f"),
                Token::LeftParen,
                num("1"),
                Token::Comma,
                num("2"),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn unmatched_input_is_dropped() {
        assert_eq!(
            tokenize("1 $ % 2 @"),
            vec![num("1"), num("2")],
        );
        assert_eq!(tokenize("   "), Vec::<Token>::new());
    }

    #[test]
    fn no_sign_or_exponent_in_literals() {
        assert_eq!(
            tokenize("-5"),
            vec![Token::Op(BinaryOp::Sub), num("5")]
        );
    }

    #[test]
    fn identifier_pattern() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("_bar9"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("white space"));
    }
}

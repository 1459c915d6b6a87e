//! Tokenizer for calculator expressions.

use super::{EvalError, Operator};
use tracing::instrument;

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal.
    Number(f64),
    /// Binary (or unary `+`/`-`) operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op.ascii()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Splits `input` into tokens.
///
/// Accepts digits, `.`, parentheses, whitespace and the operators in either
/// keypad-glyph or ASCII form. Anything else is rejected.
#[instrument]
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() || c == '.' {
            let mut literal = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    literal.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Number(parse_literal(&literal)?));
        } else if c == '(' {
            chars.next();
            tokens.push(Token::LeftParen);
        } else if c == ')' {
            chars.next();
            tokens.push(Token::RightParen);
        } else if let Some(op) = Operator::from_symbol(c) {
            chars.next();
            tokens.push(Token::Operator(op));
        } else {
            return Err(EvalError::InvalidCharacter(c));
        }
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<f64, EvalError> {
    let has_digit = literal.chars().any(|c| c.is_ascii_digit());
    if !has_digit || literal.matches('.').count() > 1 {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

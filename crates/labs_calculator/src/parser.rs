//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Binary operators are left associative.

use super::{EvalError, Operator, Token};
use tracing::instrument;

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Unary minus.
    Negate(Box<Expr>),
    /// Binary operation.
    Binary {
        /// Operator.
        op: Operator,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Evaluates the tree. May return an infinity or NaN.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Negate(inner) => -inner.eval(),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
        }
    }
}

/// Deepest expression the parser builds. Counts nested parentheses, signs
/// and chained operators alike.
pub const MAX_DEPTH: usize = 256;

/// Parses a token stream into a single expression.
#[instrument(skip(tokens), fields(len = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let (expr, _) = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
    }
}

/// A subtree paired with its height.
type Node = (Expr, usize);

fn node(expr: Expr, height: usize) -> Result<Node, EvalError> {
    if height > MAX_DEPTH {
        return Err(EvalError::TooDeep);
    }
    Ok((expr, height))
}

fn binary(op: Operator, (lhs, lh): Node, (rhs, rh): Node) -> Result<Node, EvalError> {
    node(
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        lh.max(rh) + 1,
    )
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    // Open parentheses and pending signs.
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.term()?;
        while let Some(Token::Operator(op)) = self.peek() {
            if op.is_multiplicative() {
                break;
            }
            self.pos += 1;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.unary()?;
        while let Some(Token::Operator(op)) = self.peek() {
            if !op.is_multiplicative() {
                break;
            }
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, EvalError> {
        match self.peek() {
            Some(Token::Operator(Operator::Subtract)) => {
                self.pos += 1;
                self.descend()?;
                let (inner, height) = self.unary()?;
                self.depth -= 1;
                node(Expr::Negate(Box::new(inner)), height + 1)
            }
            Some(Token::Operator(Operator::Add)) => {
                self.pos += 1;
                self.descend()?;
                let inner = self.unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Node, EvalError> {
        match self.next() {
            Some(Token::Number(n)) => Ok((Expr::Number(n), 1)),
            Some(Token::LeftParen) => {
                self.descend()?;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::RightParen) => Ok(inner),
                    Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

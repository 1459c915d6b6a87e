//! Binary operators.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction (also unary negation in expressions).
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// Floating-point remainder.
    Modulo,
}

impl Operator {
    /// Glyph shown on the keypad and in the expression line.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
            Operator::Modulo => '%',
        }
    }

    /// ASCII form fed to the evaluator.
    pub fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
        }
    }

    /// Parses either the glyph or the ASCII form.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            _ => None,
        }
    }

    /// True for `*`, `/` and `%`, which bind tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide | Operator::Modulo)
    }

    /// Applies the operator. Division by zero yields an infinity or NaN;
    /// callers check finiteness once on the final result.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Modulo => lhs % rhs,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

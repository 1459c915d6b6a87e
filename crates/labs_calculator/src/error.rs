//! Evaluation errors.

/// Why an expression could not be evaluated.
///
/// The calculator never surfaces these to its caller; every variant ends up
/// as the `Error` display.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EvalError {
    /// A character outside digits, `.`, parentheses and operators.
    #[display("Invalid character '{}'", _0)]
    InvalidCharacter(char),

    /// A numeral with more than one decimal point or no digits.
    #[display("Invalid number '{}'", _0)]
    InvalidNumber(String),

    /// A token where it cannot appear.
    #[display("Unexpected '{}'", _0)]
    UnexpectedToken(String),

    /// The input ended mid-expression.
    #[display("Unexpected end of expression")]
    UnexpectedEnd,

    /// Nothing to evaluate.
    #[display("Empty expression")]
    Empty,

    /// Nesting deeper than the parser accepts.
    #[display("Expression nested too deeply")]
    TooDeep,

    /// The result is infinite or NaN (division by zero, overflow).
    #[display("Result is not a finite number")]
    NonFinite,
}

impl std::error::Error for EvalError {}

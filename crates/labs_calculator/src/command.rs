//! Discrete calculator inputs.

use super::Operator;

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Command {
    /// A digit `0`..=`9`.
    #[display("digit {}", _0)]
    Digit(u8),
    /// The decimal point.
    #[display("decimal")]
    Decimal,
    /// A binary operator.
    #[display("operator {}", _0)]
    Operator(Operator),
    /// `=`.
    #[display("evaluate")]
    Evaluate,
    /// Clear display and expression.
    #[display("clear")]
    ClearAll,
    /// Backspace.
    #[display("delete")]
    DeleteLast,
    /// `±`.
    #[display("toggle sign")]
    ToggleSign,
    /// Divide the display by 100.
    #[display("percent")]
    Percent,
    /// Forget every history entry.
    #[display("clear history")]
    ClearHistory,
}

impl Command {
    /// Maps a typed character to a command.
    ///
    /// Digits, `.`, the operators in either form, `=` or newline to
    /// evaluate, `c` to clear, backspace to delete, `n` for sign, `p` for
    /// percent and `h` to clear history.
    pub fn from_key(key: char) -> Option<Self> {
        if let Some(digit) = key.to_digit(10) {
            return Some(Command::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_symbol(key) {
            return Some(Command::Operator(op));
        }
        match key {
            'x' | 'X' => Some(Command::Operator(Operator::Multiply)),
            '.' | ',' => Some(Command::Decimal),
            '=' | '\n' | '\r' => Some(Command::Evaluate),
            'c' | 'C' | '\u{1b}' => Some(Command::ClearAll),
            '\u{8}' | '\u{7f}' => Some(Command::DeleteLast),
            'n' | 'N' => Some(Command::ToggleSign),
            'p' | 'P' => Some(Command::Percent),
            'h' | 'H' => Some(Command::ClearHistory),
            _ => None,
        }
    }
}

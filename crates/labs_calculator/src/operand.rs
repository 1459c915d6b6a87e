//! The numeric-entry buffer shown on the display.

use std::fmt;

/// A number as typed on the keypad.
///
/// The fraction is either absent or a single run of digits, so a second
/// decimal point cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operand {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Operand {
    /// The `0` placeholder.
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: "0".to_string(),
            fraction: None,
        }
    }

    /// Parses `-?digits(.digits?)?`. Used to load formatted results back
    /// into the display.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !fraction.is_none_or(all_digits) {
            return None;
        }

        Some(Self {
            negative,
            integer: integer.to_string(),
            fraction: fraction.map(str::to_string),
        })
    }

    /// True for the untouched `0` placeholder.
    pub fn is_placeholder(&self) -> bool {
        !self.negative && self.integer == "0" && self.fraction.is_none()
    }

    /// Appends a digit. A lone leading `0` is replaced rather than extended.
    pub fn push_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        match &mut self.fraction {
            Some(fraction) => fraction.push(digit),
            None if self.integer == "0" => {
                self.integer.clear();
                self.integer.push(digit);
            }
            None => self.integer.push(digit),
        }
    }

    /// Starts the fraction. Ignored when a decimal point is already present.
    pub fn push_decimal(&mut self) {
        if self.fraction.is_none() {
            self.fraction = Some(String::new());
        }
    }

    /// Removes the last typed character. Returns `None` when nothing
    /// but (at most) a sign would remain.
    pub fn pop(mut self) -> Option<Self> {
        if let Some(fraction) = &mut self.fraction {
            if fraction.pop().is_none() {
                self.fraction = None;
            }
        } else {
            self.integer.pop();
            if self.integer.is_empty() {
                return None;
            }
        }
        Some(self)
    }

    /// Adds or removes the leading minus sign.
    pub fn toggle_sign(&mut self) {
        self.negative = !self.negative;
    }

    /// Numeric value of the buffer.
    pub fn value(&self) -> f64 {
        // Every representable buffer is a valid float literal, including
        // a trailing `.`.
        self.to_string().parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

/// What the display currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readout {
    /// Cleared after an operator, waiting for the next operand.
    Empty,
    /// A number being typed, or a result.
    Number(Operand),
    /// The error sentinel. Blocks arithmetic input until cleared.
    Error,
}

impl Default for Readout {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl Readout {
    /// The `0` placeholder.
    pub fn placeholder() -> Self {
        Readout::Number(Operand::zero())
    }

    /// True for the error sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Readout::Error)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Empty => Ok(()),
            Readout::Number(operand) => write!(f, "{}", operand),
            Readout::Error => write!(f, "Error"),
        }
    }
}

//! String-in, number-out evaluation.

use super::{EvalError, parse, tokenize};
use tracing::{debug, instrument};

/// Decimal places kept in every result.
pub const RESULT_PRECISION: i32 = 8;

/// Evaluates `input` under the calculator grammar.
///
/// The result is rounded to [`RESULT_PRECISION`] decimal places. Results
/// that are not finite are errors.
#[instrument]
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    let value = parse(&tokens)?.eval();

    if !value.is_finite() {
        debug!(value, "Non-finite result");
        return Err(EvalError::NonFinite);
    }

    Ok(round(value))
}

/// Rounds to [`RESULT_PRECISION`] decimal places and normalizes `-0` to `0`.
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_PRECISION);
    let scaled = (value * scale).round();
    let rounded = if scaled.is_finite() {
        scaled / scale
    } else {
        value
    };
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a result as a plain decimal with no trailing `.0`.
pub fn format_number(value: f64) -> String {
    // f64's Display is the shortest round-tripping decimal and never uses
    // exponent notation.
    format!("{}", if value == 0.0 { 0.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_display(input: &str) -> String {
        evaluate(input)
            .map(format_number)
            .unwrap_or_else(|_| "Error".to_string())
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(eval_display("2 + 2"), "4");
        assert_eq!(eval_display("7 / 0"), "Error");
        assert_eq!(eval_display("3 × 4 − 5"), "7");
    }

    #[test]
    fn test_floating_point_noise_is_rounded() {
        assert_eq!(eval_display("0.1 + 0.2"), "0.3");
        assert_eq!(eval_display("1 / 3"), "0.33333333");
        assert_eq!(eval_display("2 / 3"), "0.66666667");
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(evaluate("0 / 0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("5 % 0"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("-1 / 0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let n = 50_000;
        let input = format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(evaluate(&input), Err(EvalError::TooDeep));
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(eval_display("-0 * 5"), "0");
        assert_eq!(eval_display("-0.000000001"), "0");
    }

    #[test]
    fn test_large_values_are_plain() {
        assert_eq!(eval_display("12345 * 10000"), "123450000");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }
}

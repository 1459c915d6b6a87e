//! Keypad input state machine.

use super::{
    Command, Expression, History, HistoryEntry, Operand, Operator, Readout, evaluate,
    format_number, round,
};
use labs_store::SharedStore;
use tracing::{debug, info, instrument};

/// The calculator behind the keypad.
///
/// Every command completes synchronously; read the snapshot accessors
/// after each one to re-render.
#[derive(Debug, Clone)]
pub struct Calculator {
    readout: Readout,
    expression: Expression,
    showing_result: bool,
    history: History,
}

impl Calculator {
    /// Creates a calculator showing the placeholder, with history loaded
    /// from `store`.
    #[instrument(skip(store))]
    pub fn new(store: SharedStore) -> Self {
        Self {
            readout: Readout::placeholder(),
            expression: Expression::new(),
            showing_result: false,
            history: History::load(store),
        }
    }

    /// The display line: the number being typed, a result, `Error`, or
    /// nothing right after an operator.
    pub fn display_text(&self) -> String {
        self.readout.to_string()
    }

    /// The expression line in glyph form.
    pub fn expression_text(&self) -> String {
        self.expression.render()
    }

    /// The display state.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// The accumulated expression.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// True while the error sentinel is shown.
    pub fn is_error(&self) -> bool {
        self.readout.is_error()
    }

    /// True right after a successful evaluation.
    pub fn is_showing_result(&self) -> bool {
        self.showing_result
    }

    /// Dispatches a command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(digit) => self.input_digit(digit),
            Command::Decimal => self.input_decimal(),
            Command::Operator(op) => self.input_operator(op),
            Command::Evaluate => self.evaluate(),
            Command::ClearAll => self.clear_all(),
            Command::DeleteLast => self.delete_last(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percent => self.percent(),
            Command::ClearHistory => self.clear_history(),
        }
    }

    /// Types a digit. Starts a fresh number after a result.
    #[instrument(skip(self))]
    pub fn input_digit(&mut self, digit: u8) {
        let Some(key) = char::from_digit(u32::from(digit), 10) else {
            debug!("Not a digit, ignoring");
            return;
        };
        if let Some(operand) = self.entry() {
            operand.push_digit(key);
        }
    }

    /// Types the decimal point. A second point in the same number is ignored.
    #[instrument(skip(self))]
    pub fn input_decimal(&mut self) {
        if let Some(operand) = self.entry() {
            operand.push_decimal();
        }
    }

    /// Moves the display into the expression followed by `op`, or swaps
    /// the trailing operator when no number has been typed since.
    #[instrument(skip(self))]
    pub fn input_operator(&mut self, op: Operator) {
        match std::mem::replace(&mut self.readout, Readout::Empty) {
            Readout::Error => {
                self.readout = Readout::Error;
                debug!("Error shown, operator ignored");
            }
            Readout::Empty => {
                if !self.expression.replace_last_operator(op) {
                    debug!("Nothing to operate on");
                }
            }
            Readout::Number(operand) => {
                // After a result the expression is empty and the display
                // holds the result, so it becomes the left operand.
                self.expression.push(operand, op);
                self.showing_result = false;
            }
        }
    }

    /// Evaluates expression plus display. On success the result replaces
    /// the display and is logged to history; on failure the display shows
    /// `Error` and the expression is kept.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) {
        if self.is_error() {
            debug!("Error shown, evaluate ignored");
            return;
        }
        if self.expression.is_empty() {
            debug!("Empty expression, nothing to evaluate");
            return;
        }

        let current = match &self.readout {
            Readout::Number(operand) => Some(operand),
            _ => None,
        };
        let source = self.expression.to_source(current);
        let full_text = self.expression.render_with(current);

        let value = match evaluate(&source) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, %source, "Evaluation failed");
                self.readout = Readout::Error;
                return;
            }
        };

        let result = format_number(value);
        let Some(operand) = Operand::parse(&result) else {
            debug!(%result, "Result not representable on the display");
            self.readout = Readout::Error;
            return;
        };

        info!(expression = %full_text, %result, "Evaluated");
        self.history.push(full_text, result);
        self.readout = Readout::Number(operand);
        self.expression.clear();
        self.showing_result = true;
    }

    /// Resets display, expression and error state.
    #[instrument(skip(self))]
    pub fn clear_all(&mut self) {
        self.readout = Readout::placeholder();
        self.expression.clear();
        self.showing_result = false;
    }

    /// Removes the last typed character. Available from the error state.
    #[instrument(skip(self))]
    pub fn delete_last(&mut self) {
        self.readout = match std::mem::replace(&mut self.readout, Readout::Empty) {
            Readout::Number(operand) => operand
                .pop()
                .map_or_else(Readout::placeholder, Readout::Number),
            Readout::Empty | Readout::Error => Readout::placeholder(),
        };
        self.showing_result = false;
    }

    /// Flips the sign of the display. No effect on the placeholder.
    #[instrument(skip(self))]
    pub fn toggle_sign(&mut self) {
        match &mut self.readout {
            Readout::Number(operand) if !operand.is_placeholder() => operand.toggle_sign(),
            _ => debug!("Nothing to negate"),
        }
    }

    /// Replaces the display with its value divided by 100. The expression
    /// is left alone.
    #[instrument(skip(self))]
    pub fn percent(&mut self) {
        let Readout::Number(operand) = &self.readout else {
            debug!("Nothing to take a percent of");
            return;
        };
        let result = format_number(round(operand.value() / 100.0));
        match Operand::parse(&result) {
            Some(operand) => self.readout = Readout::Number(operand),
            None => self.readout = Readout::Error,
        }
    }

    /// Empties the history, in memory and in the store.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The operand being typed, starting a fresh one after a result or an
    /// operator. `None` while the error sentinel is shown.
    fn entry(&mut self) -> Option<&mut Operand> {
        if self.showing_result {
            self.readout = Readout::placeholder();
            self.showing_result = false;
        }
        if matches!(self.readout, Readout::Empty) {
            self.readout = Readout::placeholder();
        }
        match &mut self.readout {
            Readout::Number(operand) => Some(operand),
            Readout::Empty => None,
            Readout::Error => {
                debug!("Error shown, input ignored");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labs_store::MemoryStore;
    use std::sync::Arc;

    fn calculator() -> Calculator {
        Calculator::new(Arc::new(MemoryStore::new()))
    }

    fn press(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            if let Some(command) = Command::from_key(key) {
                calc.apply(command);
            }
        }
    }

    #[test]
    fn test_starts_at_placeholder() {
        let calc = calculator();
        assert_eq!(calc.display_text(), "0");
        assert_eq!(calc.expression_text(), "");
        assert!(!calc.is_error());
    }

    #[test]
    fn test_operator_moves_display_into_expression() {
        let mut calc = calculator();
        press(&mut calc, "12+");
        assert_eq!(calc.expression_text(), "12 +");
        assert_eq!(calc.display_text(), "");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut calc = calculator();
        press(&mut calc, "2+3=");
        assert_eq!(calc.display_text(), "5");
        press(&mut calc, "7");
        assert_eq!(calc.display_text(), "7");
    }

    #[test]
    fn test_result_becomes_left_operand() {
        let mut calc = calculator();
        press(&mut calc, "2+3=*4=");
        assert_eq!(calc.display_text(), "20");
        assert_eq!(calc.history()[0].expression(), "5 × 4");
    }

    #[test]
    fn test_operator_on_fresh_calculator_uses_placeholder() {
        let mut calc = calculator();
        press(&mut calc, "-3=");
        assert_eq!(calc.display_text(), "-3");
    }

    #[test]
    fn test_evaluate_without_expression_is_noop() {
        let mut calc = calculator();
        press(&mut calc, "42=");
        assert_eq!(calc.display_text(), "42");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_dangling_operator_is_error() {
        let mut calc = calculator();
        press(&mut calc, "3+=");
        assert!(calc.is_error());
        assert_eq!(calc.expression_text(), "3 +");
    }

    #[test]
    fn test_toggle_sign() {
        let mut calc = calculator();
        press(&mut calc, "n");
        assert_eq!(calc.display_text(), "0");
        press(&mut calc, "5n");
        assert_eq!(calc.display_text(), "-5");
        press(&mut calc, "n");
        assert_eq!(calc.display_text(), "5");
    }

    #[test]
    fn test_percent_leaves_expression() {
        let mut calc = calculator();
        press(&mut calc, "200+50p");
        assert_eq!(calc.display_text(), "0.5");
        assert_eq!(calc.expression_text(), "200 +");
        press(&mut calc, "=");
        assert_eq!(calc.display_text(), "200.5");
    }

    #[test]
    fn test_delete_last() {
        let mut calc = calculator();
        press(&mut calc, "12.5");
        calc.delete_last();
        assert_eq!(calc.display_text(), "12.");
        calc.delete_last();
        calc.delete_last();
        calc.delete_last();
        assert_eq!(calc.display_text(), "0");
    }

    #[test]
    fn test_delete_last_clears_error() {
        let mut calc = calculator();
        press(&mut calc, "1/0=");
        assert!(calc.is_error());
        calc.delete_last();
        assert!(!calc.is_error());
        assert_eq!(calc.display_text(), "0");
    }

    #[test]
    fn test_clear_all() {
        let mut calc = calculator();
        press(&mut calc, "9*8");
        calc.clear_all();
        assert_eq!(calc.display_text(), "0");
        assert_eq!(calc.expression_text(), "");
    }
}

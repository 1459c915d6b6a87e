//! The accumulated left-hand side of the calculation.

use super::{Operand, Operator};

/// An operand together with the operator typed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    operand: Operand,
    operator: Operator,
}

impl Term {
    /// The operand text as typed.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// The trailing operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

/// Operands and operators preceding the number currently being typed.
///
/// Every term carries its trailing operator, so a non-empty expression
/// always ends with one and two operators can never sit side by side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `operand` followed by `operator`.
    pub fn push(&mut self, operand: Operand, operator: Operator) {
        self.terms.push(Term { operand, operator });
    }

    /// Replaces the trailing operator. Returns false when empty.
    pub fn replace_last_operator(&mut self, operator: Operator) -> bool {
        match self.terms.last_mut() {
            Some(term) => {
                term.operator = operator;
                true
            }
            None => false,
        }
    }

    /// The trailing operator, if any.
    pub fn last_operator(&self) -> Option<Operator> {
        self.terms.last().map(Term::operator)
    }

    /// The terms in typing order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// True when nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Drops every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Display form with keypad glyphs, e.g. `3 × 4 −`.
    pub fn render(&self) -> String {
        self.join(None, Operator::glyph)
    }

    /// Display form completed by the current operand, e.g. `3 × 4 − 5`.
    pub fn render_with(&self, current: Option<&Operand>) -> String {
        self.join(current, Operator::glyph)
    }

    /// Evaluator input in ASCII form, completed by the current operand.
    pub fn to_source(&self, current: Option<&Operand>) -> String {
        self.join(current, Operator::ascii)
    }

    fn join(&self, current: Option<&Operand>, symbol: fn(Operator) -> char) -> String {
        let mut parts: Vec<String> = self
            .terms
            .iter()
            .flat_map(|term| [term.operand.to_string(), symbol(term.operator).to_string()])
            .collect();
        if let Some(current) = current {
            parts.push(current.to_string());
        }
        parts.join(" ")
    }
}

//! Keypad calculator with a restricted-grammar evaluator.
//!
//! # Architecture
//!
//! - **Evaluation**: [`tokenize`] and [`parse`] turn a string into an
//!   [`Expr`] tree; [`evaluate`] rounds the result and rejects anything
//!   non-finite.
//! - **Entry**: [`Calculator`] is the keypad state machine. The display is
//!   a typed [`Operand`] and the left-hand side an [`Expression`] of terms,
//!   so a double decimal point or two adjacent operators cannot be built.
//! - **History**: successful evaluations land in a bounded [`History`]
//!   persisted through [`labs_store`].
//!
//! # Example
//!
//! ```
//! use labs_calculator::{Calculator, Command};
//! use labs_store::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
//! for key in "3*4-5=".chars() {
//!     calc.apply(Command::from_key(key).unwrap());
//! }
//! assert_eq!(calc.display_text(), "7");
//! assert_eq!(calc.history()[0].expression(), "3 × 4 − 5");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod command;
mod error;
mod eval;
mod expression;
mod history;
mod operand;
mod operator;
mod parser;
mod token;

pub use calculator::Calculator;
pub use command::Command;
pub use error::EvalError;
pub use eval::{RESULT_PRECISION, evaluate, format_number, round};
pub use expression::{Expression, Term};
pub use history::{HISTORY_CAPACITY, History, HistoryEntry};
pub use operand::{Operand, Readout};
pub use operator::Operator;
pub use parser::{Expr, MAX_DEPTH, parse};
pub use token::{Token, tokenize};

//! Screen implementations for the TUI state machine.

mod calculator;
mod menu;
mod tictactoe;

pub use calculator::CalculatorScreen;
pub use menu::MenuScreen;
pub use tictactoe::TicTacToeScreen;

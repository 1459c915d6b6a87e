//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the engine and the search share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, check_winner};

use super::{Board, GameResult};

/// Classifies a board as won, drawn, or still in progress.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((mark, line)) = check_winner(board) {
        GameResult::Won { mark, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

//! Game result type.

use super::{Player, WinLine};
use serde::{Deserialize, Serialize};

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameResult {
    /// No line completed and empty squares remain.
    #[default]
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameResult {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Won { mark, .. } => Some(*mark),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            GameResult::Won { line, .. } => Some(*line),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won { mark, .. } => write!(f, "Player {} wins", mark),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

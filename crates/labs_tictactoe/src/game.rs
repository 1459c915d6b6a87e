//! Game logic for tic-tac-toe.

use super::action::{Move, MoveError};
use super::{Board, GameResult, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Holds one board from empty to a terminal result. X always moves first
/// and marks alternate. Once the result is terminal every move is refused;
/// a new `Game` replaces this one on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    result: GameResult,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Returns the mark due to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else if self.history.len() % 2 == 0 {
            Some(Player::X)
        } else {
            Some(Player::O)
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the result after the move.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) -> Result<GameResult, MoveError> {
        let Some(player) = self.to_move() else {
            return Err(MoveError::GameOver);
        };

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.result = rules::evaluate(&self.board);

        debug!(%player, position = %pos, result = %self.result, "Mark placed");
        Ok(self.result)
    }
}

//! Exhaustive minimax opponent.
//!
//! The board has at most 9 plies, so the search runs to the end of every
//! line without pruning or a depth limit. Each recursive call works on its
//! own `Board` copy; nothing is undone.
//!
//! Scores are from the computer's point of view:
//!
//! | terminal state        | score          |
//! |-----------------------|----------------|
//! | computer has won      | `10 - depth`   |
//! | opponent has won      | `depth - 10`   |
//! | draw                  | `0`            |
//!
//! `depth` counts moves made after the candidate move, so a quicker win and
//! a slower loss both score higher.

use super::{Board, GameResult, Player, Position, rules};
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Chooses the computer's move.
///
/// Every empty square is scored by full-depth search; the first square (in
/// index order) with the strictly highest score is returned. Returns `None`
/// if the board is full or already won.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn best_move(board: &Board, ai: Player) -> Option<Position> {
    if rules::evaluate(board).is_over() {
        return None;
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in Position::valid_moves(board) {
        let score = minimax(&board.with(pos, ai), 0, false, ai);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Computer move chosen");
    }
    best.map(|(pos, _)| pos)
}

/// Scores `board` assuming both sides play perfectly from here.
///
/// `maximizing` is true when the computer is due to move.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, ai: Player) -> i32 {
    match rules::evaluate(board) {
        GameResult::Won { mark, .. } if mark == ai => return WIN_SCORE - depth,
        GameResult::Won { .. } => return depth - WIN_SCORE,
        GameResult::Draw => return 0,
        GameResult::InProgress => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let scores = Position::valid_moves(board)
        .into_iter()
        .map(|pos| minimax(&board.with(pos, mover), depth + 1, !maximizing, ai));

    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
            match c {
                'X' => board = board.with(pos, Player::X),
                'O' => board = board.with(pos, Player::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can win on the top row or block X's middle row; winning is better.
        let board = board_from("OO.XX....");
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = board_from("XX..O....");
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_wins_instead_of_blocking() {
        // X can block O at TopCenter or win outright at MiddleRight.
        let board = board_from("O.OXX..O.");
        assert_eq!(best_move(&board, Player::X), Some(Position::MiddleRight));
    }

    #[test]
    fn test_no_move_on_terminal_board() {
        assert_eq!(best_move(&board_from("XXXOO...."), Player::O), None);
        assert_eq!(best_move(&board_from("XOXOXXOXO"), Player::O), None);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        for pos in Position::ALL {
            let score = minimax(&Board::new().with(pos, Player::X), 0, false, Player::X);
            assert!(score <= 0, "{} should not be a forced win", pos);
        }
    }

    #[test]
    fn test_first_square_wins_ties_on_empty_board() {
        // Every opening draws under perfect play, so the tie goes to index 0.
        assert_eq!(best_move(&Board::new(), Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(minimax(&board_from("XXXOO...."), 2, true, Player::X), 8);
        assert_eq!(minimax(&board_from("XXXOO...."), 2, true, Player::O), -8);
        assert_eq!(minimax(&board_from("XOXOXXOXO"), 5, false, Player::X), 0);
    }
}

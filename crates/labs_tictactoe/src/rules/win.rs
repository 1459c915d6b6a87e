//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// One of the 8 winning lines.
///
/// Declaration order is the scan order: rows, then columns, then diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum WinLine {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in scan order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions forming this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in scan order together with its owner.
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    for line in WinLine::ALL {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

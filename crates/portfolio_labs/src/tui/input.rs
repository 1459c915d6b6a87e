//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use labs_tictactoe::Position;

/// Moves the board cursor one cell for an arrow key. Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps the keys `1`..=`9` onto cells in reading order.
pub fn digit_position(key: char) -> Option<Position> {
    let digit = key.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    Position::from_index(index)
}

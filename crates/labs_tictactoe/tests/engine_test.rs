//! Tests for win/draw detection and move legality.

use labs_tictactoe::{Board, Game, GameResult, MoveError, Player, Position, WinLine};

/// Plays `moves` in turn from an empty board.
fn play(moves: &[Position]) -> Game {
    let mut game = Game::new();
    for &pos in moves {
        game.place(pos).expect("Legal move");
    }
    game
}

#[test]
fn test_every_line_wins_for_its_mark() {
    for line in WinLine::ALL {
        for mark in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line.cells() {
                board = board.with(pos, mark);
            }
            assert_eq!(
                labs_tictactoe::check_winner(&board),
                Some((mark, line)),
                "{:?} for {}",
                line,
                mark
            );
        }
    }
}

#[test]
fn test_every_line_wins_in_play() {
    // O only gets two marks, so it cannot complete a line first.
    for line in WinLine::ALL {
        let cells = line.cells();
        let mut fillers = Position::ALL
            .into_iter()
            .filter(|p| !cells.contains(p))
            .collect::<Vec<_>>();
        fillers.truncate(2);

        let moves = [cells[0], fillers[0], cells[1], fillers[1], cells[2]];
        let game = play(&moves);
        assert_eq!(
            game.result(),
            GameResult::Won {
                mark: Player::X,
                line
            }
        );
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    let game = play(&moves);
    assert_eq!(game.result(), GameResult::Draw);
    assert!(game.is_over());
    assert_eq!(game.to_move(), None);
}

#[test]
fn test_winning_on_last_square_is_a_win_not_a_draw() {
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    let game = play(&moves);
    assert_eq!(
        game.result(),
        GameResult::Won {
            mark: Player::X,
            line: WinLine::LeftColumn
        }
    );
}

#[test]
fn test_placing_twice_on_same_square_changes_nothing() {
    let mut once = Game::new();
    once.place(Position::Center).expect("Valid move");

    let mut twice = Game::new();
    twice.place(Position::Center).expect("Valid move");
    assert_eq!(
        twice.place(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );

    assert_eq!(once, twice);
}

//! Tests for the interactive session: the computer opponent, scoring and
//! deferred moves.

use labs_store::{KeyValueStore, MemoryStore, SCOREBOARD_KEY, SharedStore};
use labs_tictactoe::{
    AiScheduler, FirstPlayer, GameMode, GameResult, GameSession, MoveOutcome, Player, Position,
    SharedSession, lock_session,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn vs_computer(first_player: FirstPlayer) -> GameSession {
    GameSession::new(Arc::new(MemoryStore::new()), GameMode::VsComputer, first_player)
}

/// Plays every human strategy against the computer and returns the number of
/// finished games, failing if the human ever wins.
fn explore(session: &mut GameSession, human: Player) -> usize {
    if let GameResult::Won { mark, .. } = session.result() {
        assert_ne!(mark, human, "Human beat the computer:\n{}", session.board().display());
        return 1;
    }
    if session.result() == GameResult::Draw {
        return 1;
    }

    let mut finished = 0;
    for pos in Position::valid_moves(session.board()) {
        let mut branch = session.clone();
        if let MoveOutcome::ComputerToMove(ticket) = branch.place_mark(pos.to_index()) {
            assert!(branch.apply_computer_move(ticket));
        }
        finished += explore(&mut branch, human);
    }
    finished
}

#[test]
fn test_computer_never_loses_when_human_moves_first() {
    let mut session = vs_computer(FirstPlayer::Human);
    let games = explore(&mut session, Player::X);
    assert!(games > 0);
}

#[test]
fn test_computer_never_loses_when_it_moves_first() {
    let mut session = vs_computer(FirstPlayer::Computer);
    let ticket = session
        .pending_computer_turn()
        .expect("Computer should open");
    assert!(session.apply_computer_move(ticket));
    let games = explore(&mut session, Player::O);
    assert!(games > 0);
}

#[test]
fn test_computer_punishes_a_mistake() {
    let mut session = vs_computer(FirstPlayer::Human);
    let mut play = |index: usize| {
        if let MoveOutcome::ComputerToMove(ticket) = session.place_mark(index) {
            assert!(session.apply_computer_move(ticket));
        }
    };
    // Opposite corners force the computer onto an edge, which threatens a line.
    play(0);
    play(8);

    let board = *session.board();
    let threat = Position::valid_moves(&board)
        .into_iter()
        .find(|&pos| {
            matches!(
                labs_tictactoe::check_winner(&board.with(pos, Player::O)),
                Some((Player::O, _))
            )
        })
        .expect("Computer should be threatening a line");
    let blunder = Position::valid_moves(&board)
        .into_iter()
        .find(|&pos| pos != threat)
        .expect("A free square remains");

    if let MoveOutcome::ComputerToMove(ticket) = session.place_mark(blunder.to_index()) {
        assert!(session.apply_computer_move(ticket));
    }
    assert_eq!(session.result().winner(), Some(Player::O));
}

#[test]
fn test_placing_twice_is_idempotent() {
    let mut once = GameSession::new(
        Arc::new(MemoryStore::new()),
        GameMode::TwoPlayer,
        FirstPlayer::Human,
    );
    once.place_mark(4);

    let mut twice = GameSession::new(
        Arc::new(MemoryStore::new()),
        GameMode::TwoPlayer,
        FirstPlayer::Human,
    );
    twice.place_mark(4);
    assert_eq!(twice.place_mark(4), MoveOutcome::Rejected);

    assert_eq!(once.game(), twice.game());
}

#[test]
fn test_scores_count_each_game_once_and_persist() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut session = GameSession::new(Arc::clone(&store), GameMode::TwoPlayer, FirstPlayer::Human);

    // X wins the top row.
    for index in [0, 3, 1, 4, 2] {
        session.place_mark(index);
    }
    // Further input on the finished board must not score again.
    session.place_mark(8);
    session.place_mark(8);
    assert_eq!(session.scoreboard().wins(Player::X), 1);

    // A draw.
    session.reset_board();
    for index in [0, 4, 2, 1, 7, 3, 5, 8, 6] {
        session.place_mark(index);
    }
    assert_eq!(session.result(), GameResult::Draw);

    // O wins the centre column.
    session.reset_board();
    for index in [0, 1, 2, 4, 6, 7] {
        session.place_mark(index);
    }
    assert_eq!(session.result().winner(), Some(Player::O));

    let scores = *session.scoreboard();
    assert_eq!(scores.total(), 3);
    assert_eq!(scores.wins(Player::X), 1);
    assert_eq!(scores.wins(Player::O), 1);
    assert_eq!(*scores.draws(), 1);

    // A new session over the same store sees the same counts.
    let reloaded = GameSession::new(store, GameMode::TwoPlayer, FirstPlayer::Human);
    assert_eq!(*reloaded.scoreboard(), scores);
}

#[test]
fn test_reset_scores_zeroes_store() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut session = GameSession::new(Arc::clone(&store), GameMode::TwoPlayer, FirstPlayer::Human);
    for index in [0, 3, 1, 4, 2] {
        session.place_mark(index);
    }
    session.reset_scores();

    assert_eq!(session.scoreboard().total(), 0);
    assert_eq!(
        store.get(SCOREBOARD_KEY).expect("Get failed").as_deref(),
        Some(r#"{"X":0,"O":0,"draws":0}"#)
    );
}

#[test]
fn test_corrupt_scoreboard_starts_at_zero() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    store
        .set(SCOREBOARD_KEY, "{\"X\": \"lots\"}".to_string())
        .expect("Set failed");
    let session = GameSession::new(store, GameMode::VsComputer, FirstPlayer::Human);
    assert_eq!(session.scoreboard().total(), 0);
}

#[test]
fn test_stale_ticket_is_discarded() {
    let mut session = vs_computer(FirstPlayer::Human);
    let MoveOutcome::ComputerToMove(ticket) = session.place_mark(0) else {
        panic!("Computer should be due to move");
    };

    session.reset_board();
    session.place_mark(4);

    assert!(!session.apply_computer_move(ticket));
    assert_eq!(session.board().occupied(), 1);
}

#[test]
fn test_ticket_only_applies_once() {
    let mut session = vs_computer(FirstPlayer::Human);
    let MoveOutcome::ComputerToMove(ticket) = session.place_mark(0) else {
        panic!("Computer should be due to move");
    };
    assert!(session.apply_computer_move(ticket));
    assert!(!session.apply_computer_move(ticket));
    assert_eq!(session.board().occupied(), 2);
}

#[test]
fn test_computer_opens_after_reset_when_it_moves_first() {
    let mut session = vs_computer(FirstPlayer::Computer);
    assert!(session.pending_computer_turn().is_some());
    assert_eq!(session.place_mark(4), MoveOutcome::Rejected);

    let ticket = session.reset_board().expect("Computer should open again");
    assert!(session.apply_computer_move(ticket));
    assert_eq!(session.to_move(), Some(Player::O));
}

#[test]
fn test_new_game_switches_mode() {
    let mut session = vs_computer(FirstPlayer::Human);
    assert_eq!(session.new_game(GameMode::TwoPlayer), None);
    assert_eq!(session.computer_mark(), None);
    assert_eq!(session.place_mark(0), MoveOutcome::Applied);
    assert_eq!(session.place_mark(1), MoveOutcome::Applied);
}

fn shared(first_player: FirstPlayer) -> SharedSession {
    Arc::new(Mutex::new(vs_computer(first_player)))
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_applies_move_after_delay() {
    let session = shared(FirstPlayer::Human);
    let mut scheduler = AiScheduler::new(Duration::from_millis(500));

    let MoveOutcome::ComputerToMove(ticket) = lock_session(&session).place_mark(0) else {
        panic!("Computer should be due to move");
    };
    scheduler.schedule(&session, ticket);

    assert!(scheduler.is_pending());
    assert_eq!(lock_session(&session).board().occupied(), 1);

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert_eq!(lock_session(&session).board().occupied(), 2);
    assert!(!scheduler.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_move_never_lands_on_reset_board() {
    let session = shared(FirstPlayer::Human);
    let mut scheduler = AiScheduler::new(Duration::from_millis(500));

    let MoveOutcome::ComputerToMove(ticket) = lock_session(&session).place_mark(0) else {
        panic!("Computer should be due to move");
    };
    scheduler.schedule(&session, ticket);

    // Reset without cancelling the task; the ticket check alone must hold.
    lock_session(&session).reset_board();
    tokio::time::sleep(Duration::from_millis(501)).await;

    assert_eq!(lock_session(&session).board().occupied(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_abandons_pending_move() {
    let session = shared(FirstPlayer::Human);
    let mut scheduler = AiScheduler::new(Duration::from_millis(500));

    let MoveOutcome::ComputerToMove(ticket) = lock_session(&session).place_mark(0) else {
        panic!("Computer should be due to move");
    };
    scheduler.schedule(&session, ticket);
    scheduler.cancel();
    assert!(!scheduler.is_pending());

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert_eq!(lock_session(&session).board().occupied(), 1);
}

#[test]
fn test_zero_delay_applies_synchronously() {
    let session = shared(FirstPlayer::Computer);
    let mut scheduler = AiScheduler::new(Duration::ZERO);

    let ticket = lock_session(&session)
        .pending_computer_turn()
        .expect("Computer should open");
    scheduler.schedule(&session, ticket);

    assert_eq!(lock_session(&session).board().occupied(), 1);
}

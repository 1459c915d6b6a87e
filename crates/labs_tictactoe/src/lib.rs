//! Tic-tac-toe engine with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] applies moves and classifies the board using the
//!   pure functions in [`rules`].
//! - **Search**: [`ai::best_move`] runs exhaustive minimax over the
//!   remaining game tree.
//! - **Session**: [`GameSession`] owns the live game, the seat settings
//!   and the persistent [`Scoreboard`].
//! - **Scheduling**: [`AiScheduler`] applies computer moves after a delay,
//!   guarded by [`AiTicket`]s so a reset board never receives a stale move.
//!
//! # Example
//!
//! ```
//! use labs_store::MemoryStore;
//! use labs_tictactoe::{FirstPlayer, GameMode, GameSession, MoveOutcome};
//! use std::sync::Arc;
//!
//! let mut session = GameSession::new(
//!     Arc::new(MemoryStore::new()),
//!     GameMode::VsComputer,
//!     FirstPlayer::Human,
//! );
//! if let MoveOutcome::ComputerToMove(ticket) = session.place_mark(4) {
//!     assert!(session.apply_computer_move(ticket));
//! }
//! assert_eq!(session.board().occupied(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod outcome;
mod position;
pub mod rules;
mod scheduler;
mod scoreboard;
mod session;
mod settings;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::GameResult;
pub use position::Position;
pub use rules::{WinLine, check_winner, is_full};
pub use scheduler::{AiScheduler, SharedSession, lock_session};
pub use scoreboard::Scoreboard;
pub use session::{AiTicket, GameSession, MoveOutcome};
pub use settings::{FirstPlayer, GameMode};
pub use types::{Board, Player, Square};

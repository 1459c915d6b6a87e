//! Interactive game session: the board, the seats, and the scoreboard.

use super::{
    Board, FirstPlayer, Game, GameMode, GameResult, Player, Position, Scoreboard, ai,
};
use labs_store::SharedStore;
use tracing::{debug, info, instrument};

/// Permission for the computer to move in one specific game.
///
/// Tickets are issued when the computer becomes due to move and carry the
/// id of the game they were issued for. A ticket presented after the board
/// was reset refers to a game that no longer exists and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    game_id: u64,
}

impl AiTicket {
    /// The game this ticket was issued for.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }
}

/// What happened to a requested placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: bad index, occupied square, finished game, or not
    /// the human's turn.
    Rejected,
    /// The mark was placed.
    Applied,
    /// The mark was placed and the computer is now due to move.
    ComputerToMove(AiTicket),
}

/// One interactive tic-tac-toe session.
///
/// Owns the live [`Game`], the seat settings and the [`Scoreboard`]. The
/// scoreboard is loaded from the store at construction and written back
/// every time a game finishes or the scores are reset. Clones share the
/// store handle.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    mode: GameMode,
    first_player: FirstPlayer,
    game_id: u64,
    scoreboard: Scoreboard,
    store: SharedStore,
}

impl GameSession {
    /// Creates a session with an empty board.
    ///
    /// If the computer moves first, [`GameSession::pending_computer_turn`]
    /// returns the ticket for its opening move.
    #[instrument(skip(store))]
    pub fn new(store: SharedStore, mode: GameMode, first_player: FirstPlayer) -> Self {
        let scoreboard = Scoreboard::load(store.as_ref());
        info!(?mode, ?first_player, "Creating game session");
        Self {
            game: Game::new(),
            mode,
            first_player,
            game_id: 0,
            scoreboard,
            store,
        }
    }

    /// Returns the live game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.game.result()
    }

    /// Returns the mark due to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.game.to_move()
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns who takes X against the computer.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Identity of the live game; changes on every reset.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The computer's mark, or `None` in two-player mode.
    pub fn computer_mark(&self) -> Option<Player> {
        match self.mode {
            GameMode::VsComputer => Some(self.first_player.computer_mark()),
            GameMode::TwoPlayer => None,
        }
    }

    /// Returns a ticket if the computer is due to move in the live game.
    pub fn pending_computer_turn(&self) -> Option<AiTicket> {
        let computer = self.computer_mark()?;
        (self.to_move() == Some(computer)).then_some(AiTicket {
            game_id: self.game_id,
        })
    }

    /// Places the mark due to move at board index `index` (0-8).
    ///
    /// Illegal requests are rejected without error and leave every piece of
    /// state untouched.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn place_mark(&mut self, index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(index) else {
            debug!("Index out of range, ignoring");
            return MoveOutcome::Rejected;
        };

        if self.pending_computer_turn().is_some() {
            debug!("Computer's turn, ignoring human placement");
            return MoveOutcome::Rejected;
        }

        if let Err(e) = self.apply(pos) {
            debug!(error = %e, "Placement rejected");
            return MoveOutcome::Rejected;
        }

        match self.pending_computer_turn() {
            Some(ticket) => MoveOutcome::ComputerToMove(ticket),
            None => MoveOutcome::Applied,
        }
    }

    /// Plays the computer's move if `ticket` still belongs to the live game.
    ///
    /// Returns true if a mark was placed.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn apply_computer_move(&mut self, ticket: AiTicket) -> bool {
        if ticket.game_id != self.game_id {
            debug!(ticket_game = ticket.game_id, "Discarding stale computer move");
            return false;
        }

        if self.pending_computer_turn().is_none() {
            debug!("Computer is not due to move");
            return false;
        }

        let computer = self.first_player.computer_mark();
        let Some(pos) = ai::best_move(self.game.board(), computer) else {
            return false;
        };

        match self.apply(pos) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Computer move rejected");
                false
            }
        }
    }

    /// Clears the board and starts a new game in the current mode.
    ///
    /// Returns the computer's opening ticket when it moves first.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn reset_board(&mut self) -> Option<AiTicket> {
        self.game = Game::new();
        self.game_id += 1;
        info!(game_id = self.game_id, "Board reset");
        self.pending_computer_turn()
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) -> Option<AiTicket> {
        self.mode = mode;
        self.reset_board()
    }

    /// Changes who moves first and starts a new game.
    #[instrument(skip(self))]
    pub fn set_first_player(&mut self, first_player: FirstPlayer) -> Option<AiTicket> {
        self.first_player = first_player;
        self.reset_board()
    }

    /// Zeroes the scoreboard and persists it.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        self.scoreboard.save(self.store.as_ref());
        info!("Scores reset");
    }

    // The only path that mutates the board; records the score exactly once,
    // on the move that ends the game.
    fn apply(&mut self, pos: Position) -> Result<(), crate::MoveError> {
        let result = self.game.place(pos)?;
        if result.is_over() {
            self.scoreboard.record(result);
            self.scoreboard.save(self.store.as_ref());
            info!(%result, scores = ?self.scoreboard, "Game finished");
        }
        Ok(())
    }
}

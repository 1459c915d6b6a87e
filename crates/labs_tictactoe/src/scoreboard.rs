//! Persistent win/draw counters.

use super::{GameResult, Player};
use derive_getters::Getters;
use labs_store::{KeyValueStore, SCOREBOARD_KEY, load_json, save_json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Counts of completed games.
///
/// Counters only grow, one step per completed game, until [`Scoreboard::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    #[serde(rename = "X")]
    x_wins: u32,
    /// Games won by O.
    #[serde(rename = "O")]
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Loads the scoreboard from the store, or zeros if absent or malformed.
    #[instrument(skip(store))]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let board = load_json(store, SCOREBOARD_KEY).unwrap_or_default();
        info!(?board, "Scoreboard loaded");
        board
    }

    /// Writes the scoreboard to the store.
    #[instrument(skip(store))]
    pub fn save(&self, store: &dyn KeyValueStore) {
        save_json(store, SCOREBOARD_KEY, self);
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Player) -> u32 {
        match mark {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total completed games. Summed wide so stored counters near
    /// `u32::MAX` cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
    }

    /// Counts a terminal result. Returns false (and counts nothing) for
    /// a game still in progress.
    pub fn record(&mut self, result: GameResult) -> bool {
        match result {
            GameResult::Won { mark: Player::X, .. } => {
                self.x_wins = self.x_wins.saturating_add(1)
            }
            GameResult::Won { mark: Player::O, .. } => {
                self.o_wins = self.o_wins.saturating_add(1)
            }
            GameResult::Draw => self.draws = self.draws.saturating_add(1),
            GameResult::InProgress => return false,
        }
        true
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

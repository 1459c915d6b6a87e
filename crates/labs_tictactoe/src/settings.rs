//! Game mode and seat settings.

use super::Player;
use serde::{Deserialize, Serialize};

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human against the minimax opponent.
    #[default]
    VsComputer,
    /// Two humans sharing the board.
    TwoPlayer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "vs Computer",
            Self::TwoPlayer => "Two Player",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::VsComputer => Self::TwoPlayer,
            Self::TwoPlayer => Self::VsComputer,
        }
    }
}

/// Which side takes the first move (X) against the computer.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    Human,
    /// The computer plays X.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// The mark the computer plays under this setting.
    pub fn computer_mark(self) -> Player {
        match self {
            Self::Human => Player::O,
            Self::Computer => Player::X,
        }
    }
}

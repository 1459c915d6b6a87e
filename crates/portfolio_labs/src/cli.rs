//! Command-line interface for portfolio_labs.

use clap::{Parser, Subcommand, ValueEnum};
use labs_tictactoe::{FirstPlayer, GameMode};
use std::path::PathBuf;

/// Portfolio Labs - tic-tac-toe against minimax and a keypad calculator
#[derive(Parser, Debug)]
#[command(name = "portfolio_labs")]
#[command(about = "Tic-tac-toe and calculator labs in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./portfolio_labs.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep scores and history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Override the store file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Override the computer's reply delay in milliseconds
    #[arg(long, global = true)]
    pub ai_delay_ms: Option<u64>,

    /// Subcommand to run. Opens the menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe in the terminal UI
    Tictactoe {
        /// Opponent for the first game
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Who plays X against the computer
        #[arg(long, value_enum)]
        first: Option<FirstArg>,
    },

    /// Open the calculator in the terminal UI
    Calculator,

    /// Evaluate an expression and print the result
    Eval {
        /// Expression, e.g. `3 × 4 − 5` or `(1 + 2) * 3`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        expr: Vec<String>,
    },

    /// Show the tic-tac-toe scoreboard
    Scores {
        /// Zero every counter
        #[arg(long)]
        reset: bool,
    },

    /// Show the calculator history
    History {
        /// Forget every entry
        #[arg(long)]
        clear: bool,
    },
}

/// `--mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Human against the computer
    VsComputer,
    /// Two humans on one keyboard
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::VsComputer => GameMode::VsComputer,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

/// `--first` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstArg {
    /// The human plays X
    Human,
    /// The computer plays X
    Computer,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayer::Human,
            FirstArg::Computer => FirstPlayer::Computer,
        }
    }
}

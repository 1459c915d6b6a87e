//! Terminal front end for the portfolio labs.
//!
//! Wires the [`labs_tictactoe`] and [`labs_calculator`] engines to a
//! [`labs_store`] backend and drives them from a command line or a
//! ratatui interface.
//!
//! # Layers
//!
//! - [`LabsConfig`]: defaults, then the TOML file, then `LABS_STORE_PATH`,
//!   then command-line flags.
//! - [`commands`]: one-shot `eval`, `scores` and `history` subcommands.
//! - [`tui`]: menu, board and keypad screens behind a polling event loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
pub mod commands;
mod config;
pub mod telemetry;
pub mod tui;

pub use cli::{Cli, Command, FirstArg, ModeArg};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, LabsConfig, STORE_PATH_ENV};

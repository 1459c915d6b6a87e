//! Key-value persistence for the portfolio labs.
//!
//! The labs keep their auxiliary state (the tic-tac-toe scoreboard and the
//! calculator history) in a flat string-to-string store, the same shape a
//! browser's local storage has. Components receive a [`SharedStore`] handle
//! at construction and call [`load_json`]/[`save_json`] on it; there is no
//! ambient global store.
//!
//! # Adapters
//!
//! - [`MemoryStore`]: process-local map, used by tests and ephemeral runs.
//! - [`FileStore`]: a single JSON object on disk, rewritten on every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
mod json;
mod memory;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use json::{load_json, save_json};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, SharedStore};

/// Storage key for the tic-tac-toe scoreboard.
pub const SCOREBOARD_KEY: &str = "tictactoe-scores";

/// Storage key for the calculator history.
pub const HISTORY_KEY: &str = "calculator-history";

//! Non-interactive subcommands.

use crate::LabsConfig;
use anyhow::{Context, Result};
use labs_calculator::{History, evaluate, format_number};
use labs_store::{FileStore, MemoryStore, SharedStore};
use labs_tictactoe::Scoreboard;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, instrument};

/// Opens the store named by `config`, or an in-memory one when `ephemeral`.
#[instrument(skip(config), fields(path = %config.store_path().display()))]
pub fn open_store(config: &LabsConfig, ephemeral: bool) -> Result<SharedStore> {
    if ephemeral {
        info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }
    let store = FileStore::open(config.store_path())
        .with_context(|| format!("Failed to open store {}", config.store_path().display()))?;
    Ok(Arc::new(store))
}

/// Prints the value of `expr`, or `Error`. Returns false on error.
#[instrument(skip(out))]
pub fn run_eval(expr: &str, out: &mut impl Write) -> Result<bool> {
    match evaluate(expr) {
        Ok(value) => {
            writeln!(out, "{}", format_number(value))?;
            Ok(true)
        }
        Err(e) => {
            info!(error = %e, "Expression rejected");
            writeln!(out, "Error")?;
            Ok(false)
        }
    }
}

/// Prints the scoreboard, zeroing it first when `reset` is set.
#[instrument(skip(store, out))]
pub fn run_scores(store: &SharedStore, reset: bool, out: &mut impl Write) -> Result<()> {
    let mut scores = Scoreboard::load(store.as_ref());
    if reset {
        scores.reset();
        scores.save(store.as_ref());
        writeln!(out, "Scores reset.")?;
    }

    writeln!(out, "X wins: {}", scores.x_wins())?;
    writeln!(out, "O wins: {}", scores.o_wins())?;
    writeln!(out, "Draws:  {}", scores.draws())?;
    writeln!(out, "Games:  {}", scores.total())?;
    Ok(())
}

/// Prints the history newest first, or clears it when `clear` is set.
#[instrument(skip(store, out))]
pub fn run_history(store: &SharedStore, clear: bool, out: &mut impl Write) -> Result<()> {
    let mut history = History::load(Arc::clone(store));
    if clear {
        history.clear();
        writeln!(out, "History cleared.")?;
        return Ok(());
    }

    if history.is_empty() {
        writeln!(out, "No history.")?;
        return Ok(());
    }
    for entry in history.entries() {
        writeln!(
            out,
            "#{:<4} {} = {}  ({})",
            entry.id(),
            entry.expression(),
            entry.result(),
            entry.timestamp().format("%Y-%m-%d %H:%M:%S")
        )?;
    }
    Ok(())
}

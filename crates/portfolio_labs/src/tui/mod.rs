//! Terminal UI for the labs.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

pub use controller::{AppController, POLL_INTERVAL, StartScreen};
pub use input::{digit_position, move_cursor};
pub use screen::{AppContext, Screen, ScreenTransition};
pub use screens::{CalculatorScreen, MenuScreen, TicTacToeScreen};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Takes over the terminal, runs the app until the user quits, and
/// restores the terminal even if the loop fails.
#[instrument(skip(ctx))]
pub async fn run_tui(ctx: AppContext, start: StartScreen) -> Result<()> {
    info!("Starting portfolio labs TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = AppController::new(ctx);
    let res = controller.run(&mut terminal, start).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

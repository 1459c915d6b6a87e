//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use labs_store::SharedStore;
use ratatui::Frame;

use crate::LabsConfig;

/// Shared state every screen may read.
#[derive(Debug, Clone, Getters)]
pub struct AppContext {
    config: LabsConfig,
    store: SharedStore,
}

impl AppContext {
    /// Bundles the resolved config with the open store.
    pub fn new(config: LabsConfig, store: SharedStore) -> Self {
        Self { config, store }
    }
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](crate::tui::AppController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the main menu.
    GoToMenu,
    /// Open the tic-tac-toe board.
    GoToTicTacToe,
    /// Open the calculator.
    GoToCalculator,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &AppContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &AppContext) -> ScreenTransition;
}

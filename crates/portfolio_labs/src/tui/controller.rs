//! App controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::tui::screen::{AppContext, Screen, ScreenTransition};
use crate::tui::screens::{CalculatorScreen, MenuScreen, TicTacToeScreen};

/// How long the loop waits for input before re-rendering.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Screen the app opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartScreen {
    /// The main menu.
    #[default]
    Menu,
    /// Straight into tic-tac-toe.
    TicTacToe,
    /// Straight into the calculator.
    Calculator,
}

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    TicTacToe(TicTacToeScreen),
    Calculator(CalculatorScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::TicTacToe(s) => s,
            ActiveScreen::Calculator(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::TicTacToe(s) => s,
            ActiveScreen::Calculator(s) => s,
        }
    }
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct AppController {
    ctx: AppContext,
}

impl AppController {
    /// Creates a controller over the resolved context.
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Input is polled every [`POLL_INTERVAL`]; the screen is redrawn after
    /// every key and every timeout, so deferred computer moves show up
    /// without input.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        start: StartScreen,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");

        let mut screen = self.open(start);

        loop {
            terminal.draw(|f| screen.as_screen().render(f, &self.ctx))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = screen.as_screen_mut().handle_key(key, &self.ctx);
                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("TUI quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    fn open(&self, start: StartScreen) -> ActiveScreen {
        match start {
            StartScreen::Menu => ActiveScreen::Menu(MenuScreen::new(&self.ctx)),
            StartScreen::TicTacToe => ActiveScreen::TicTacToe(TicTacToeScreen::new(
                &self.ctx,
                *self.ctx.config().default_mode(),
                *self.ctx.config().first_player(),
            )),
            StartScreen::Calculator => ActiveScreen::Calculator(CalculatorScreen::new(&self.ctx)),
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToMenu => {
                info!("Navigating to Menu");
                Some(self.open(StartScreen::Menu))
            }
            ScreenTransition::GoToTicTacToe => {
                info!("Navigating to TicTacToe");
                Some(self.open(StartScreen::TicTacToe))
            }
            ScreenTransition::GoToCalculator => {
                info!("Navigating to Calculator");
                Some(self.open(StartScreen::Calculator))
            }
            ScreenTransition::Quit => {
                debug!("Quit requested");
                None
            }
        }
    }
}

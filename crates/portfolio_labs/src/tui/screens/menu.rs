//! Main menu screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use labs_calculator::History;
use labs_tictactoe::Scoreboard;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{AppContext, Screen, ScreenTransition};
use crate::tui::ui;

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    TicTacToe,
    Calculator,
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 3] = [Self::TicTacToe, Self::Calculator, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Calculator => "Calculator",
            Self::Quit => "Quit",
        }
    }
}

/// State for the main menu.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    scoreboard: Scoreboard,
    history_len: usize,
    list_state: ListState,
}

impl MenuScreen {
    /// Creates the menu, reading the summary line from the store once.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &AppContext) -> Self {
        let scoreboard = Scoreboard::load(ctx.store().as_ref());
        let history_len = History::load(ctx.store().clone()).len();
        debug!(games = scoreboard.total(), history_len, "Initializing MenuScreen");

        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            scoreboard,
            history_len,
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::ALL[idx.min(MenuOption::ALL.len() - 1)]
    }
}

impl Screen for MenuScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(ui::title("Portfolio Labs"), chunks[0]);

        let summary = format!(
            "X: {}   O: {}   Draws: {}   |   Calculator history: {} entries",
            self.scoreboard.x_wins(),
            self.scoreboard.o_wins(),
            self.scoreboard.draws(),
            self.history_len
        );
        let summary_bar = Paragraph::new(summary)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(summary_bar, chunks[1]);

        let items: Vec<ListItem> = MenuOption::ALL
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Labs"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        frame.render_widget(
            ui::help("↑↓: Navigate | Enter: Select | t: Tic-Tac-Toe | c: Calculator | q: Quit"),
            chunks[3],
        );
    }

    #[instrument(skip(self, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::TicTacToe => ScreenTransition::GoToTicTacToe,
                    MenuOption::Calculator => ScreenTransition::GoToCalculator,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('t') => ScreenTransition::GoToTicTacToe,
            KeyCode::Char('c') => ScreenTransition::GoToCalculator,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

//! Calculator screen.

use crossterm::event::{KeyCode, KeyEvent};
use labs_calculator::{Calculator, Command};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::{debug, instrument};

use crate::tui::screen::{AppContext, Screen, ScreenTransition};
use crate::tui::ui;

const KEYPAD: [&str; 5] = [
    "C   ⌫   n(±)  p(%)",
    "7   8   9     ÷ /",
    "4   5   6     × *",
    "1   2   3     − -",
    "0   .   =     + %(mod)",
];

/// State for the calculator screen.
#[derive(Debug)]
pub struct CalculatorScreen {
    calculator: Calculator,
}

impl CalculatorScreen {
    /// Creates the screen with history loaded from the store.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            calculator: Calculator::new(ctx.store().clone()),
        }
    }

    /// The calculator behind the screen.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Maps a key event to a calculator command.
    pub fn command_for(key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Enter => Some(Command::Evaluate),
            KeyCode::Backspace => Some(Command::DeleteLast),
            KeyCode::Esc | KeyCode::Delete => Some(Command::ClearAll),
            KeyCode::Char(c) => Command::from_key(c),
            _ => None,
        }
    }
}

impl Screen for CalculatorScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _ctx: &AppContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(ui::title("Calculator"), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(7),
            ])
            .split(columns[0]);

        frame.render_widget(
            Paragraph::new(self.calculator.expression_text())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(Block::default().borders(Borders::ALL).title("Expression")),
            panel[0],
        );

        let display_style = if self.calculator.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(self.calculator.display_text())
                .style(display_style)
                .alignment(Alignment::Right)
                .block(Block::default().borders(Borders::ALL).title("Display")),
            panel[1],
        );

        let keypad: Vec<Line> = KEYPAD.iter().map(|row| Line::from(*row)).collect();
        frame.render_widget(
            Paragraph::new(keypad)
                .style(Style::default().fg(Color::Cyan))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            panel[2],
        );

        let items: Vec<ListItem> = self
            .calculator
            .history()
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} = ", entry.expression()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.result().clone(), Style::default().fg(Color::Green)),
                ]))
            })
            .collect();
        let title = format!("History ({})", self.calculator.history().len());
        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            columns[1],
        );

        frame.render_widget(
            ui::help("Type digits and operators | Enter/=: Evaluate | Esc/c: Clear | h: Clear history | q: Menu"),
            rows[2],
        );
    }

    #[instrument(skip(self, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &AppContext) -> ScreenTransition {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            return ScreenTransition::GoToMenu;
        }
        match Self::command_for(key) {
            Some(command) => {
                debug!(%command, "Calculator command");
                self.calculator.apply(command);
            }
            None => debug!(?key, "Unmapped key"),
        }
        ScreenTransition::Stay
    }
}

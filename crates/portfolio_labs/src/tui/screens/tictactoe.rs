//! Tic-tac-toe screen.

use crossterm::event::{KeyCode, KeyEvent};
use labs_tictactoe::{
    AiScheduler, AiTicket, FirstPlayer, GameMode, GameResult, GameSession, MoveOutcome, Position,
    SharedSession, lock_session,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

use crate::tui::input::{digit_position, move_cursor};
use crate::tui::screen::{AppContext, Screen, ScreenTransition};
use crate::tui::ui;

/// State for the tic-tac-toe screen.
///
/// The session sits behind a mutex so the deferred computer move can land
/// while the event loop keeps rendering.
#[derive(Debug)]
pub struct TicTacToeScreen {
    session: SharedSession,
    scheduler: AiScheduler,
    cursor: Position,
}

impl TicTacToeScreen {
    /// Starts a game with the configured mode and seat. Must be called inside
    /// a Tokio runtime when the computer opens and the delay is non-zero.
    #[instrument(skip(ctx))]
    pub fn new(ctx: &AppContext, mode: GameMode, first_player: FirstPlayer) -> Self {
        let session = GameSession::new(ctx.store().clone(), mode, first_player);
        let opening = session.pending_computer_turn();
        let mut screen = Self {
            session: Arc::new(Mutex::new(session)),
            scheduler: AiScheduler::new(ctx.config().ai_delay()),
            cursor: Position::Center,
        };
        screen.schedule(opening);
        screen
    }

    /// The shared session.
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True while a computer move is waiting on its delay.
    pub fn computer_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    fn schedule(&mut self, ticket: Option<AiTicket>) {
        match ticket {
            Some(ticket) => self.scheduler.schedule(&self.session, ticket),
            None => self.scheduler.cancel(),
        }
    }

    #[instrument(skip(self))]
    fn place(&mut self, pos: Position) {
        self.cursor = pos;
        let outcome = lock_session(&self.session).place_mark(pos.to_index());
        match outcome {
            MoveOutcome::Rejected => debug!("Move rejected"),
            MoveOutcome::Applied => {}
            MoveOutcome::ComputerToMove(ticket) => self.schedule(Some(ticket)),
        }
    }

    fn status_line(session: &GameSession) -> String {
        match session.result() {
            GameResult::Won { mark, .. } => match session.computer_mark() {
                Some(computer) if computer == mark => format!("Computer ({}) wins!", mark),
                Some(_) => format!("You ({}) win!", mark),
                None => format!("{} wins!", mark),
            },
            GameResult::Draw => "Draw!".to_string(),
            GameResult::InProgress => match session.to_move() {
                Some(mark) if session.computer_mark() == Some(mark) => {
                    format!("Computer ({}) is thinking...", mark)
                }
                Some(mark) => format!("{} to move", mark),
                None => String::new(),
            },
        }
    }
}

impl Screen for TicTacToeScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _ctx: &AppContext) {
        let (board, result, scores, mode, first, status) = {
            let session = lock_session(&self.session);
            (
                *session.board(),
                session.result(),
                *session.scoreboard(),
                session.mode(),
                session.first_player(),
                Self::status_line(&session),
            )
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(ui::title("Tic-Tac-Toe"), chunks[0]);

        let seat = match mode {
            GameMode::VsComputer => format!("   First: {}", first.label()),
            GameMode::TwoPlayer => String::new(),
        };
        let scores_text = format!(
            "Mode: {}{}   |   X: {}   O: {}   Draws: {}",
            mode.label(),
            seat,
            scores.x_wins(),
            scores.o_wins(),
            scores.draws()
        );
        frame.render_widget(
            Paragraph::new(scores_text)
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let cursor = (!result.is_over()).then_some(self.cursor);
        ui::draw_board(frame, chunks[2], &board, cursor, result.winning_line());

        frame.render_widget(
            Paragraph::new(status)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );

        frame.render_widget(
            ui::help("Arrows: Move | Enter/1-9: Place | r: New game | m: Mode | f: First | z: Reset scores | q: Menu"),
            chunks[4],
        );
    }

    #[instrument(skip(self, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if digit_position(c).is_some() => {
                if let Some(pos) = digit_position(c) {
                    self.place(pos);
                }
            }
            KeyCode::Char('r') => {
                info!("Board reset");
                let ticket = lock_session(&self.session).reset_board();
                self.schedule(ticket);
            }
            KeyCode::Char('m') => {
                let ticket = {
                    let mut session = lock_session(&self.session);
                    let mode = session.mode().toggle();
                    info!(mode = mode.label(), "Mode switched");
                    session.new_game(mode)
                };
                self.schedule(ticket);
            }
            KeyCode::Char('f') => {
                let ticket = {
                    let mut session = lock_session(&self.session);
                    let first = session.first_player().toggle();
                    info!(first = first.label(), "First player switched");
                    session.set_first_player(first)
                };
                self.schedule(ticket);
            }
            KeyCode::Char('z') => {
                lock_session(&self.session).reset_scores();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.scheduler.cancel();
                return ScreenTransition::GoToMenu;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabsConfig;
    use crossterm::event::KeyModifiers;
    use labs_store::MemoryStore;
    use labs_tictactoe::{Player, Square};
    use ratatui::{Terminal, backend::TestBackend};

    fn ctx() -> AppContext {
        let config = LabsConfig::default().with_overrides(None, Some(0), None, None);
        AppContext::new(config, Arc::new(MemoryStore::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_key_places_and_computer_replies() {
        let ctx = ctx();
        let mut screen = TicTacToeScreen::new(&ctx, GameMode::VsComputer, FirstPlayer::Human);

        screen.handle_key(key(KeyCode::Char('5')), &ctx);

        let session = lock_session(screen.session());
        assert_eq!(
            session.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(session.board().occupied(), 2);
    }

    #[test]
    fn test_computer_opens_when_first() {
        let ctx = ctx();
        let screen = TicTacToeScreen::new(&ctx, GameMode::VsComputer, FirstPlayer::Computer);
        assert_eq!(lock_session(screen.session()).board().occupied(), 1);
    }

    #[test]
    fn test_mode_toggle_starts_two_player_game() {
        let ctx = ctx();
        let mut screen = TicTacToeScreen::new(&ctx, GameMode::VsComputer, FirstPlayer::Human);
        screen.handle_key(key(KeyCode::Char('5')), &ctx);
        screen.handle_key(key(KeyCode::Char('m')), &ctx);

        screen.handle_key(key(KeyCode::Char('1')), &ctx);
        let session = lock_session(screen.session());
        assert_eq!(session.mode(), GameMode::TwoPlayer);
        assert_eq!(session.board().occupied(), 1);
        assert_eq!(session.to_move(), Some(Player::O));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let ctx = ctx();
        let mut screen = TicTacToeScreen::new(&ctx, GameMode::TwoPlayer, FirstPlayer::Human);
        screen.handle_key(key(KeyCode::Up), &ctx);
        screen.handle_key(key(KeyCode::Left), &ctx);
        screen.handle_key(key(KeyCode::Enter), &ctx);

        assert_eq!(
            lock_session(screen.session()).board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_quit_returns_to_menu() {
        let ctx = ctx();
        let mut screen = TicTacToeScreen::new(&ctx, GameMode::TwoPlayer, FirstPlayer::Human);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q')), &ctx),
            ScreenTransition::GoToMenu
        );
    }

    #[test]
    fn test_renders_without_panicking() {
        let ctx = ctx();
        let mut screen = TicTacToeScreen::new(&ctx, GameMode::TwoPlayer, FirstPlayer::Human);
        for c in ['1', '4', '2', '5', '3'] {
            screen.handle_key(key(KeyCode::Char(c)), &ctx);
        }
        assert!(lock_session(screen.session()).result().is_over());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| screen.render(f, &ctx)).unwrap();
    }
}

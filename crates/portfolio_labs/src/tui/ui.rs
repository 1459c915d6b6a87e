//! Stateless rendering helpers shared by the screens.

use labs_tictactoe::{Board, Player, Position, Square, WinLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Bold centered title in a bordered box.
pub fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Dimmed key-binding hint line.
pub fn help(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Renders the 3x3 board. The cursor cell is inverted and cells on the
/// winning line are drawn in green.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning: Option<WinLine>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cols[col * 2], board, pos, cursor, winning);
            }
            if col < 2 {
                frame.render_widget(
                    Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
                    cols[col * 2 + 1],
                );
            }
        }

        if row < 2 {
            frame.render_widget(
                Paragraph::new("─".repeat(usize::from(board_area.width)))
                    .style(Style::default().fg(Color::DarkGray)),
                rows[row * 2 + 1],
            );
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    cursor: Option<Position>,
    winning: Option<WinLine>,
) {
    let key_hint = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (key_hint, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// A `width` by `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Cell, Game, GameStatus, Player, Square, WinLine};

/// Renders the board snapshot under the cursor.
pub fn render_board(f: &mut Frame, area: Rect, game: &Game) {
    let board = game.board();
    let win = match game.status() {
        GameStatus::Won(win) => Some(win),
        _ => None,
    };

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

    render_row(f, rows[0], board, 0, win);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, win);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, win);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, win: Option<WinLine>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, start, win);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, start + 1, win);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, start + 2, win);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, pos: usize, win: Option<WinLine>) {
    let cell = Cell::from_index(pos).expect("board positions are 0-8");
    let (text, mut style) = match board.get(cell) {
        Square::Empty => (format!("{}", pos + 1), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if win.is_some_and(|w| w.contains(cell)) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("\u{2500}".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("\u{2502}")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

//! Frame layout and top-level rendering.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draws the whole frame: title, status, board, history, key help.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_status(f, chunks[1], app);
    board::render_board(f, chunks[2], app.game());
    history::render_history(f, chunks[3], app.game());

    let help = Paragraph::new("1-9 place mark | \u{2190}/\u{2192} step history | Home start | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

fn render_status(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let text = if app.celebrating() {
        format!("\u{2728} {} \u{2728}", app.status_message())
    } else {
        app.status_message().to_string()
    };

    let style = if app.celebrating() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let status = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(status, area);
}

//! History jump list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use rewind_tictactoe::Game;

/// Renders the timeline as a jump list, current snapshot highlighted.
pub fn render_history(f: &mut Frame, area: Rect, game: &Game) {
    let items: Vec<ListItem> = (0..game.history_len())
        .map(|index| {
            let label = if index == 0 {
                "Start".to_string()
            } else {
                format!("Move #{}", index)
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title("Game History"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(game.current()));
    f.render_stateful_widget(list, area, &mut state);
}

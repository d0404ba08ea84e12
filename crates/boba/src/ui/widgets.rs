//! Reusable widget builders.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// Rounded frame drawn around the content pane.
pub fn content_frame<'a>(border: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

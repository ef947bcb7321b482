//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button; the selected one is highlighted
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let (border_style, text_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(content)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

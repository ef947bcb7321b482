//! Layout components (content area and status bar)

use crate::platform::ADD_SHORTCUT;
use crate::state::{AppState, RenderMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FINISH_HINT: &str = " Esc:finish ";

/// Split the screen into the step area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = Layout::default()
        .constraints([Constraint::Min(0)])
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(chunks[0])[0];

    (content, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(msg) = &state.status_message {
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
        spans.push(Span::raw(" | "));
    }

    if state.show_help {
        spans.push(Span::styled(
            get_mode_hints(RenderMode::of(&state.history)),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let finish_width = FINISH_HINT.len() as u16;
    let finish_area = Rect {
        x: area.x + area.width.saturating_sub(finish_width),
        width: finish_width.min(area.width),
        ..area
    };
    let finish =
        Paragraph::new(FINISH_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(finish, finish_area);
}

/// Keyboard hints for the current render mode
fn get_mode_hints(mode: RenderMode) -> String {
    match mode {
        RenderMode::Selector => "←/→:choose  Enter:confirm  y/n:answer".to_string(),
        RenderMode::EmployerForms => format!(
            "Tab:next  Enter:press  {ADD_SHORTCUT}:add employer  ^T:today  ^U:clear  ^R:change answer"
        ),
        RenderMode::NotEmployed => "^R:change answer".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
        assert_eq!(content, Rect::new(2, 1, 76, 21));
    }

    #[test]
    fn test_hints_per_mode() {
        assert!(get_mode_hints(RenderMode::Selector).contains("y/n:answer"));
        assert!(get_mode_hints(RenderMode::EmployerForms).contains(ADD_SHORTCUT));
        assert_eq!(get_mode_hints(RenderMode::NotEmployed), "^R:change answer");
    }
}

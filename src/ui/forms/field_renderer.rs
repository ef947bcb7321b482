//! Field rendering utilities for forms

use crate::state::{Employed, EmployerField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a boxed input for an employer field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: EmployerField,
    value: &str,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if value.is_empty() && !is_active {
        let hint = field.placeholder().unwrap_or("(empty)");
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.kind().is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, style), cursor]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the yes/no select with its placeholder and options
pub fn draw_selector(frame: &mut Frame, area: Rect, highlight: Employed, is_active: bool) {
    let mut spans = vec![
        Span::styled(Employed::Unset.label(), Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
    ];
    for option in [Employed::Yes, Employed::No] {
        let style = if is_active && option == highlight {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(" Were you previously employed? * ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

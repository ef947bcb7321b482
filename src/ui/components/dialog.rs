//! Modal error dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;
/// Two columns of padding each side, plus borders
const HORIZONTAL_CHROME: u16 = 6;
const HINT: [&str; 5] = ["Press ", "Enter", " or ", "Esc", " to dismiss"];

/// Render an error dialog centred over `area`
pub fn render_error_dialog(frame: &mut Frame, area: Rect, message: &str) {
    let max_line = (MAX_WIDTH - HORIZONTAL_CHROME) as usize;
    let lines = wrap_text(message, max_line);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(HINT.concat().len()) as u16;
    let width = (content_width + HORIZONTAL_CHROME).min(MAX_WIDTH).min(area.width);
    // title + blank + message + blank + hint + borders
    let height = (lines.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw(HINT[0]),
        Span::styled(HINT[1], key),
        Span::raw(HINT[2]),
        Span::styled(HINT[3], key),
        Span::raw(HINT[4]),
    ]));

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap; explicit newlines start a new paragraph
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

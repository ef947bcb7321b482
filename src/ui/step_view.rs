//! Employment History step rendering
//!
//! The step is laid out as a vertical list of rows whose heights are known
//! up front. Rows are drawn from a scroll offset chosen so the focused row
//! is fully on screen; rows cut by the viewport edge are skipped.

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_selector};
use crate::state::{
    Employed, EmployerField, EmploymentHistory, FieldKind, FocusTarget, RenderMode,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Narrowest area that still shows fields two per row
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

const FIELD_HEIGHT: u16 = 3;

/// What the step view needs from the host for one frame
pub struct StepView<'a> {
    pub data: &'a EmploymentHistory,
    pub focus: Option<FocusTarget>,
    pub selector_highlight: Employed,
}

/// One horizontal band of the step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRow {
    /// Step title and mode description
    Heading(RenderMode),
    Gap,
    Selector,
    SectionTitle(&'static str),
    /// One or two single-line inputs side by side
    Fields(FocusTarget, Option<FocusTarget>),
    TextArea(FocusTarget),
    /// "Previous Employers" title with the add button
    PreviousHeader,
    /// "Previous Employer n" title with its remove button
    CardTitle(usize),
}

impl StepRow {
    pub fn height(&self) -> u16 {
        match self {
            Self::Heading(_) => 3,
            Self::Gap | Self::SectionTitle(_) => 1,
            Self::Selector | Self::Fields(..) => FIELD_HEIGHT,
            Self::TextArea(target) => match target.field().map(|f| f.kind()) {
                Some(FieldKind::TextArea { rows }) => rows + 2,
                _ => FIELD_HEIGHT,
            },
            Self::PreviousHeader | Self::CardTitle(_) => BUTTON_HEIGHT,
        }
    }

    fn holds(&self, target: FocusTarget) -> bool {
        match self {
            Self::Selector => target == FocusTarget::Selector,
            Self::Fields(left, right) => *left == target || *right == Some(target),
            Self::TextArea(t) => *t == target,
            Self::PreviousHeader => target == FocusTarget::AddPrevious,
            Self::CardTitle(index) => target == FocusTarget::RemovePrevious(*index),
            Self::Heading(_) | Self::Gap | Self::SectionTitle(_) => false,
        }
    }
}

/// Lay out grid fields one or two per row, followed by their textareas
fn push_fields(
    rows: &mut Vec<StepRow>,
    fields: &[EmployerField],
    two_columns: bool,
    target: impl Fn(EmployerField) -> FocusTarget,
) {
    let (grid, areas): (Vec<EmployerField>, Vec<EmployerField>) = fields
        .iter()
        .copied()
        .partition(|f| !f.kind().is_multiline());

    let per_row = if two_columns { 2 } else { 1 };
    for pair in grid.chunks(per_row) {
        rows.push(StepRow::Fields(target(pair[0]), pair.get(1).map(|f| target(*f))));
    }
    for field in areas {
        rows.push(StepRow::TextArea(target(field)));
    }
}

/// Rows for the current data, top to bottom
pub fn step_rows(data: &EmploymentHistory, two_columns: bool) -> Vec<StepRow> {
    let mode = RenderMode::of(data);
    let mut rows = vec![StepRow::Heading(mode)];

    match mode {
        RenderMode::NotEmployed => {}
        RenderMode::Selector => {
            rows.push(StepRow::Gap);
            rows.push(StepRow::Selector);
        }
        RenderMode::EmployerForms => {
            rows.push(StepRow::Gap);
            rows.push(StepRow::SectionTitle("Most Recent Employer"));
            push_fields(&mut rows, &EmployerField::ALL, two_columns, FocusTarget::Recent);
            rows.push(StepRow::Gap);
            rows.push(StepRow::PreviousHeader);
            for index in 0..data.previous_employers().len() {
                rows.push(StepRow::CardTitle(index));
                push_fields(&mut rows, &EmployerField::PREVIOUS, two_columns, |field| {
                    FocusTarget::Previous(index, field)
                });
            }
        }
    }

    rows
}

/// Scroll offset that keeps the focused row fully inside `viewport` lines
///
/// Offsets are line counts over the whole step, which outgrows `u16` once the
/// previous-employer list gets long.
pub fn scroll_offset(rows: &[StepRow], focus: Option<FocusTarget>, viewport: u16) -> u32 {
    let Some(target) = focus else {
        return 0;
    };

    let mut top = 0u32;
    for row in rows {
        let bottom = top + u32::from(row.height());
        if row.holds(target) {
            return bottom.saturating_sub(u32::from(viewport));
        }
        top = bottom;
    }
    0
}

/// Draw the step into `area`
pub fn draw(frame: &mut Frame, area: Rect, view: &StepView) {
    let rows = step_rows(view.data, area.width >= TWO_COLUMN_MIN_WIDTH);
    let offset = scroll_offset(&rows, view.focus, area.height);

    let mut top = 0u32;
    for row in &rows {
        let height = row.height();
        let row_top = top;
        top += u32::from(height);

        if row_top < offset || row_top - offset + u32::from(height) > u32::from(area.height) {
            continue;
        }
        // Fits in the viewport, so the offset within it fits in u16
        let Ok(y) = u16::try_from(row_top - offset) else {
            continue;
        };
        let row_area = Rect {
            x: area.x,
            y: area.y + y,
            width: area.width,
            height,
        };
        draw_row(frame, row_area, row, view);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: &StepRow, view: &StepView) {
    let is_focused = |target: FocusTarget| view.focus == Some(target);

    match row {
        StepRow::Heading(mode) => draw_heading(frame, area, *mode),
        StepRow::Gap => {}
        StepRow::Selector => draw_selector(
            frame,
            area,
            view.selector_highlight,
            is_focused(FocusTarget::Selector),
        ),
        StepRow::SectionTitle(title) => {
            let title = Paragraph::new(Line::from(Span::styled(
                *title,
                Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            frame.render_widget(title, area);
        }
        StepRow::Fields(left, right) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let (left_area, right_area) = if right.is_some() {
                (chunks[0], Some(chunks[1]))
            } else {
                (area, None)
            };
            draw_target(frame, left_area, *left, view);
            if let (Some(target), Some(right_area)) = (right, right_area) {
                draw_target(frame, right_area, *target, view);
            }
        }
        StepRow::TextArea(target) => draw_target(frame, area, *target, view),
        StepRow::PreviousHeader => draw_title_with_button(
            frame,
            area,
            "Previous Employers (from most recent)",
            "+ Add Previous Employer",
            is_focused(FocusTarget::AddPrevious),
        ),
        StepRow::CardTitle(index) => draw_title_with_button(
            frame,
            area,
            &format!("Previous Employer {}", index + 1),
            "−",
            is_focused(FocusTarget::RemovePrevious(*index)),
        ),
    }
}

fn draw_heading(frame: &mut Frame, area: Rect, mode: RenderMode) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Employment History",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            mode.description(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(heading, area);
}

/// Draw the input for a field target with its current value
fn draw_target(frame: &mut Frame, area: Rect, target: FocusTarget, view: &StepView) {
    let value = match target {
        FocusTarget::Recent(field) => view.data.recent_value(field),
        FocusTarget::Previous(index, field) => view
            .data
            .previous_employers()
            .get(index)
            .map(|r| r.get(field))
            .unwrap_or(""),
        _ => return,
    };
    if let Some(field) = target.field() {
        draw_field(frame, area, field, value, view.focus == Some(target));
    }
}

fn draw_title_with_button(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    button: &str,
    is_selected: bool,
) {
    let button_width = button.chars().count() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width)])
        .split(area);

    // Vertically centre the title against the bordered button
    let title_area = Rect {
        y: chunks[0].y + chunks[0].height / 2,
        height: 1u16.min(chunks[0].height),
        ..chunks[0]
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    render_button(frame, chunks[1], button, is_selected);
}

//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod step_view;

use crate::app::App;
use ratatui::Frame;
use step_view::StepView;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let view = StepView {
        data: &app.state.history,
        focus: app.state.focused(),
        selector_highlight: app.state.selector_highlight,
    };
    step_view::draw(frame, content_area, &view);

    layout::draw_status_bar(frame, status_area, &app.state);

    // Errors are modal and drawn last
    if let Some(message) = app.state.current_error() {
        let area = frame.area();
        components::render_error_dialog(frame, area, message);
    }
}

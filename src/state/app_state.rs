//! Wizard-side state: the data the step edits plus host UI state

use super::employment::{Employed, EmploymentHistory};
use super::forms::{FocusTarget, StepFocus};
use super::update::StepUpdate;
use std::collections::VecDeque;

/// State owned by the host wizard
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical step data; changed only through `apply_updates`
    pub history: EmploymentHistory,
    /// Keyboard focus within the step
    pub focus: StepFocus,
    /// Option highlighted in the yes/no selector
    pub selector_highlight: Employed,
    /// One-line message for the status bar
    pub status_message: Option<String>,
    /// Show key hints in the status bar
    pub show_help: bool,
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EmploymentHistory::default(), true)
    }
}

impl AppState {
    pub fn new(history: EmploymentHistory, show_help: bool) -> Self {
        Self {
            history,
            focus: StepFocus::default(),
            selector_highlight: Employed::Yes,
            status_message: None,
            show_help,
            errors: VecDeque::new(),
        }
    }

    /// Merge queued step updates into the canonical data
    pub fn apply_updates(&mut self, updates: Vec<StepUpdate>) {
        for update in updates {
            let mode_changed = matches!(update, StepUpdate::SetPreviouslyEmployed(_));
            self.history.apply(update);
            if mode_changed {
                self.focus.reset();
            }
        }
        self.focus.clamp(&self.history);
    }

    /// The parent clearing the answer; the step itself never goes back
    pub fn reset_answer(&mut self) {
        self.apply_updates(vec![StepUpdate::SetPreviouslyEmployed(Employed::Unset)]);
        self.selector_highlight = Employed::Yes;
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.current(&self.history)
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

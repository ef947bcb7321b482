//! Application state and core logic
//!
//! `App` plays the wizard that owns the employment history. Key presses are
//! turned into step operations; the step reports changes into a queue which
//! is then applied to the canonical state.

use crate::state::{
    AppState, Employed, EmployerField, EmploymentHistory, EmploymentHistoryStep, FieldKind,
    FocusTarget, RenderMode, StepUpdate,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The collected data, for handing on to the rest of the wizard
    pub fn history(&self) -> &EmploymentHistory {
        &self.state.history
    }

    /// Run a step operation and apply whatever it reported
    fn with_step<R>(
        &mut self,
        f: impl FnOnce(&mut EmploymentHistoryStep<'_, Vec<StepUpdate>>) -> R,
    ) -> R {
        let mut updates = Vec::new();
        let result = {
            let mut step = EmploymentHistoryStep::new(&self.state.history, &mut updates);
            f(&mut step)
        };
        self.state.apply_updates(updates);
        result
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        self.state.status_message = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                tracing::info!("Answer cleared by host");
                self.state.reset_answer();
                return;
            }
            _ => {}
        }

        match RenderMode::of(&self.state.history) {
            RenderMode::Selector => self.handle_selector_key(key),
            RenderMode::EmployerForms => self.handle_form_key(key),
            RenderMode::NotEmployed => {}
        }
    }

    /// Keys while the yes/no selector is shown
    fn handle_selector_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }
        match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab => {
                self.state.selector_highlight = self.state.selector_highlight.toggle();
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer(Employed::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => self.answer(Employed::No),
            KeyCode::Enter => self.answer(self.state.selector_highlight),
            _ => {}
        }
    }

    fn answer(&mut self, answer: Employed) {
        tracing::info!(answer = answer.label(), "Previously employed answered");
        self.with_step(|step| step.select_previously_employed(answer));
    }

    /// Keys while the employer forms are shown
    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('n') && key.modifiers.contains(crate::platform::ADD_MODIFIER) {
            self.add_previous_employer();
            return;
        }

        let Some(target) = self.state.focused() else {
            return;
        };
        let multiline = target.is_multiline();

        match key.code {
            KeyCode::Tab => self.state.focus.next(&self.state.history),
            KeyCode::BackTab => self.state.focus.prev(&self.state.history),
            KeyCode::Down if !multiline => self.state.focus.next(&self.state.history),
            KeyCode::Up if !multiline => self.state.focus.prev(&self.state.history),
            KeyCode::Enter => match target {
                FocusTarget::AddPrevious => self.add_previous_employer(),
                FocusTarget::RemovePrevious(index) => self.remove_previous_employer(index),
                _ if multiline => self.push_char(target, '\n'),
                _ => self.state.focus.next(&self.state.history),
            },
            _ => self.handle_field_key(target, key),
        }
    }

    /// Editing keys on a focused input
    fn handle_field_key(&mut self, target: FocusTarget, key: KeyEvent) {
        let Some(field) = target.field() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('t') if ctrl && field.kind() == FieldKind::Date => {
                let today = chrono::Local::now().format("%Y-%m-%d").to_string();
                self.set_field(target, today);
            }
            KeyCode::Char('u') if ctrl => self.set_field(target, String::new()),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.push_char(target, c);
            }
            KeyCode::Backspace => {
                let value = field.kind().pop_char(self.field_value(target));
                self.set_field(target, value);
            }
            _ => {}
        }
    }

    fn push_char(&mut self, target: FocusTarget, c: char) {
        let Some(field) = target.field() else {
            return;
        };
        if let Some(value) = field.kind().push_char(self.field_value(target), c) {
            self.set_field(target, value);
        }
    }

    /// Current value behind an input target
    fn field_value(&self, target: FocusTarget) -> &str {
        let history = &self.state.history;
        match target {
            FocusTarget::Recent(field) => history.recent_value(field),
            FocusTarget::Previous(index, field) => history
                .previous_employers()
                .get(index)
                .map(|r| r.get(field))
                .unwrap_or(""),
            FocusTarget::Selector | FocusTarget::AddPrevious | FocusTarget::RemovePrevious(_) => {
                ""
            }
        }
    }

    fn set_field(&mut self, target: FocusTarget, value: String) {
        match target {
            FocusTarget::Recent(field) => {
                self.with_step(|step| step.update_recent_employer(field, value));
            }
            FocusTarget::Previous(index, field) => {
                let result =
                    self.with_step(|step| step.update_previous_employer(index, field, value));
                if let Err(err) = result {
                    self.state.push_error(err.to_string());
                }
            }
            FocusTarget::Selector | FocusTarget::AddPrevious | FocusTarget::RemovePrevious(_) => {}
        }
    }

    fn add_previous_employer(&mut self) {
        self.with_step(|step| step.add_previous_employer());
        let index = self.state.history.previous_employers().len().saturating_sub(1);
        let first_field = FocusTarget::Previous(index, EmployerField::Company);
        self.state.focus.focus_on(first_field, &self.state.history);
        self.state.status_message = Some(format!("Added previous employer {}", index + 1));
    }

    fn remove_previous_employer(&mut self, index: usize) {
        self.with_step(|step| step.remove_previous_employer(index));
        self.state.status_message = Some(format!("Removed previous employer {}", index + 1));
    }
}

//! Keyboard focus over the step's inputs
//!
//! Focus is UI state owned by the host, not by the step. The list of
//! focusable targets is derived from the data on every use, so it always
//! matches what is drawn.

use super::field::EmployerField;
use crate::state::employment::EmploymentHistory;
use crate::state::step::RenderMode;

/// Something on screen that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The yes/no selector
    Selector,
    /// A field of the most recent employer
    Recent(EmployerField),
    /// "Add Previous Employer" button
    AddPrevious,
    /// Remove button on a previous-employer card
    RemovePrevious(usize),
    /// A field of a previous-employer card
    Previous(usize, EmployerField),
}

impl FocusTarget {
    /// The employer field behind this target, if it is an input
    pub fn field(&self) -> Option<EmployerField> {
        match self {
            Self::Recent(field) | Self::Previous(_, field) => Some(*field),
            Self::Selector | Self::AddPrevious | Self::RemovePrevious(_) => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.field().is_some_and(|f| f.kind().is_multiline())
    }
}

/// Focusable targets in tab order for the current data
pub fn focus_targets(data: &EmploymentHistory) -> Vec<FocusTarget> {
    match RenderMode::of(data) {
        RenderMode::Selector => vec![FocusTarget::Selector],
        RenderMode::NotEmployed => Vec::new(),
        RenderMode::EmployerForms => {
            let mut targets: Vec<FocusTarget> = EmployerField::ALL
                .into_iter()
                .map(FocusTarget::Recent)
                .collect();
            targets.push(FocusTarget::AddPrevious);
            for index in 0..data.previous_employers().len() {
                targets.push(FocusTarget::RemovePrevious(index));
                targets.extend(
                    EmployerField::PREVIOUS
                        .into_iter()
                        .map(|field| FocusTarget::Previous(index, field)),
                );
            }
            targets
        }
    }
}

/// Position of the focus within `focus_targets`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepFocus {
    index: usize,
}

impl StepFocus {
    /// Currently focused target, if the mode has any
    pub fn current(&self, data: &EmploymentHistory) -> Option<FocusTarget> {
        let targets = focus_targets(data);
        targets
            .get(self.index.min(targets.len().saturating_sub(1)))
            .copied()
    }

    /// Move to the next target, wrapping to the first
    pub fn next(&mut self, data: &EmploymentHistory) {
        let count = focus_targets(data).len();
        if count > 0 {
            self.index = (self.index.min(count - 1) + 1) % count;
        }
    }

    /// Move to the previous target, wrapping to the last
    pub fn prev(&mut self, data: &EmploymentHistory) {
        let count = focus_targets(data).len();
        if count == 0 {
            return;
        }
        let current = self.index.min(count - 1);
        self.index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Keep the index inside the target list after the data changed
    pub fn clamp(&mut self, data: &EmploymentHistory) {
        let count = focus_targets(data).len();
        self.index = self.index.min(count.saturating_sub(1));
    }

    /// Jump to `target` if it exists for this data
    pub fn focus_on(&mut self, target: FocusTarget, data: &EmploymentHistory) -> bool {
        match focus_targets(data).iter().position(|t| *t == target) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

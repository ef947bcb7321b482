//! The Employment History step
//!
//! [`EmploymentHistoryStep`] borrows the wizard's data read-only and reports
//! every edit through an [`UpdateSink`]. It keeps no state of its own.

use super::employment::{Employed, EmployerRecord, EmploymentHistory};
use super::forms::EmployerField;
use super::update::{StepUpdate, UpdateSink};
use thiserror::Error;

/// Errors reported by step operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("previous employer {index} no longer exists (list has {len} entries)")]
    StaleIndex { index: usize, len: usize },
}

/// Which of the three mutually exclusive layouts the step shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// No answer yet: only the yes/no selector
    Selector,
    /// Answered yes: recent employer form and previous employers list
    EmployerForms,
    /// Answered no: explanatory message only
    NotEmployed,
}

impl RenderMode {
    pub fn of(data: &EmploymentHistory) -> Self {
        match data.previously_employed {
            Employed::Unset => Self::Selector,
            Employed::Yes => Self::EmployerForms,
            Employed::No => Self::NotEmployed,
        }
    }

    /// Description shown under the step heading
    pub fn description(&self) -> &'static str {
        match self {
            Self::Selector => "Please tell us about your employment history.",
            Self::EmployerForms => {
                "Please provide details of your employment history, starting with your most recent employer."
            }
            Self::NotEmployed => {
                "Since you haven't been previously employed, we'll move to character references."
            }
        }
    }
}

/// Step operations over wizard-owned data
pub struct EmploymentHistoryStep<'a, S: UpdateSink + ?Sized> {
    data: &'a EmploymentHistory,
    sink: &'a mut S,
}

impl<'a, S: UpdateSink + ?Sized> EmploymentHistoryStep<'a, S> {
    pub fn new(data: &'a EmploymentHistory, sink: &'a mut S) -> Self {
        Self { data, sink }
    }

    fn emit(&mut self, update: StepUpdate) {
        tracing::debug!(field = update.field().key(), "step update");
        self.sink.update_data(update);
    }

    /// Answer the "previously employed" question
    pub fn select_previously_employed(&mut self, answer: Employed) {
        self.emit(StepUpdate::SetPreviouslyEmployed(answer));
    }

    /// Overwrite one field of the recent employer, keeping the rest
    pub fn update_recent_employer(&mut self, field: EmployerField, value: impl Into<String>) {
        tracing::trace!(field = field.key(), "recent employer edit");
        let record = self
            .data
            .recent_employer
            .clone()
            .unwrap_or_default()
            .with(field, value);
        self.emit(StepUpdate::SetRecentEmployer(record));
    }

    /// Append a blank previous employer at the end of the list
    pub fn add_previous_employer(&mut self) {
        let mut employers = self.data.previous_employers().to_vec();
        employers.push(EmployerRecord::default());
        self.emit(StepUpdate::SetPreviousEmployers(employers));
    }

    /// Drop the previous employer at `index`. An index past the end removes nothing.
    pub fn remove_previous_employer(&mut self, index: usize) {
        let employers: Vec<EmployerRecord> = self
            .data
            .previous_employers()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, employer)| employer.clone())
            .collect();
        self.emit(StepUpdate::SetPreviousEmployers(employers));
    }

    /// Overwrite one field of the previous employer at `index`
    pub fn update_previous_employer(
        &mut self,
        index: usize,
        field: EmployerField,
        value: impl Into<String>,
    ) -> Result<(), StepError> {
        let current = self.data.previous_employers();
        if index >= current.len() {
            tracing::warn!(
                index,
                len = current.len(),
                field = field.key(),
                "stale previous employer index"
            );
            return Err(StepError::StaleIndex {
                index,
                len: current.len(),
            });
        }

        let value = value.into();
        let employers = current
            .iter()
            .enumerate()
            .map(|(i, employer)| {
                if i == index {
                    employer.with(field, value.as_str())
                } else {
                    employer.clone()
                }
            })
            .collect();
        self.emit(StepUpdate::SetPreviousEmployers(employers));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::update::MockUpdateSink;
    use mockall::predicate::eq;

    fn employer(company: &str) -> EmployerRecord {
        EmployerRecord {
            company: company.to_string(),
            ..Default::default()
        }
    }

    fn with_previous(employers: Vec<EmployerRecord>) -> EmploymentHistory {
        EmploymentHistory {
            previously_employed: Employed::Yes,
            previous_employers: Some(employers),
            ..Default::default()
        }
    }

    /// Run `f` against a queue sink and return what it emitted
    fn collect(
        data: &EmploymentHistory,
        f: impl FnOnce(&mut EmploymentHistoryStep<'_, Vec<StepUpdate>>),
    ) -> Vec<StepUpdate> {
        let mut queue = Vec::new();
        let mut step = EmploymentHistoryStep::new(data, &mut queue);
        f(&mut step);
        queue
    }

    fn only_previous(updates: Vec<StepUpdate>) -> Vec<EmployerRecord> {
        match updates.as_slice() {
            [StepUpdate::SetPreviousEmployers(list)] => list.clone(),
            other => panic!("expected one SetPreviousEmployers, got {other:?}"),
        }
    }

    mod render_mode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_one_mode_per_answer() {
            let cases = [
                (Employed::Unset, RenderMode::Selector),
                (Employed::Yes, RenderMode::EmployerForms),
                (Employed::No, RenderMode::NotEmployed),
            ];
            for (answer, expected) in cases {
                let data = EmploymentHistory {
                    previously_employed: answer,
                    ..Default::default()
                };
                assert_eq!(RenderMode::of(&data), expected);
            }
        }

        #[test]
        fn test_records_do_not_affect_mode() {
            let data = EmploymentHistory {
                previously_employed: Employed::No,
                recent_employer: Some(employer("Acme")),
                previous_employers: Some(vec![employer("Initech")]),
            };
            assert_eq!(RenderMode::of(&data), RenderMode::NotEmployed);
        }
    }

    mod select {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selecting_no_reports_answer() {
            let data = EmploymentHistory::default();
            let mut sink = MockUpdateSink::new();
            sink.expect_update_data()
                .with(eq(StepUpdate::SetPreviouslyEmployed(Employed::No)))
                .times(1)
                .return_const(());

            assert_eq!(RenderMode::of(&data), RenderMode::Selector);
            EmploymentHistoryStep::new(&data, &mut sink).select_previously_employed(Employed::No);
        }
    }

    mod recent_employer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_merges_into_existing_record() {
            let data = EmploymentHistory {
                previously_employed: Employed::Yes,
                recent_employer: Some(employer("Acme")),
                ..Default::default()
            };
            let mut sink = MockUpdateSink::new();
            sink.expect_update_data()
                .with(eq(StepUpdate::SetRecentEmployer(EmployerRecord {
                    company: "Acme".to_string(),
                    position: "Engineer".to_string(),
                    ..Default::default()
                })))
                .times(1)
                .return_const(());

            EmploymentHistoryStep::new(&data, &mut sink)
                .update_recent_employer(EmployerField::Position, "Engineer");
        }

        #[test]
        fn test_absent_record_starts_empty() {
            let data = EmploymentHistory {
                previously_employed: Employed::Yes,
                ..Default::default()
            };
            let updates = collect(&data, |step| {
                step.update_recent_employer(EmployerField::Town, "Leeds")
            });
            assert_eq!(
                updates,
                vec![StepUpdate::SetRecentEmployer(EmployerRecord {
                    town: "Leeds".to_string(),
                    ..Default::default()
                })]
            );
        }

        #[test]
        fn test_does_not_touch_callers_record() {
            let data = EmploymentHistory {
                recent_employer: Some(employer("Acme")),
                ..Default::default()
            };
            collect(&data, |step| {
                step.update_recent_employer(EmployerField::Company, "Initech")
            });
            assert_eq!(data.recent_employer, Some(employer("Acme")));
        }
    }

    mod add_previous {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_appends_blank_record_last() {
            let data = with_previous(vec![employer("A"), employer("B")]);
            let list = only_previous(collect(&data, |step| step.add_previous_employer()));
            assert_eq!(
                list,
                vec![employer("A"), employer("B"), EmployerRecord::default()]
            );
        }

        #[test]
        fn test_absent_list_treated_as_empty() {
            let data = EmploymentHistory {
                previously_employed: Employed::Yes,
                ..Default::default()
            };
            let list = only_previous(collect(&data, |step| step.add_previous_employer()));
            assert_eq!(list, vec![EmployerRecord::default()]);
        }
    }

    mod remove_previous {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_removes_first() {
            let data = with_previous(vec![employer("A"), employer("B")]);
            let mut sink = MockUpdateSink::new();
            sink.expect_update_data()
                .with(eq(StepUpdate::SetPreviousEmployers(vec![employer("B")])))
                .times(1)
                .return_const(());

            EmploymentHistoryStep::new(&data, &mut sink).remove_previous_employer(0);
        }

        #[test]
        fn test_keeps_relative_order() {
            let data = with_previous(vec![employer("A"), employer("B"), employer("C")]);
            let list = only_previous(collect(&data, |step| step.remove_previous_employer(1)));
            assert_eq!(list, vec![employer("A"), employer("C")]);
        }

        #[test]
        fn test_out_of_range_removes_nothing() {
            let data = with_previous(vec![employer("A"), employer("B")]);
            let list = only_previous(collect(&data, |step| step.remove_previous_employer(5)));
            assert_eq!(list, vec![employer("A"), employer("B")]);
        }

        #[test]
        fn test_absent_list_yields_empty() {
            let data = EmploymentHistory::default();
            let list = only_previous(collect(&data, |step| step.remove_previous_employer(0)));
            assert!(list.is_empty());
        }
    }

    mod update_previous {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_changes_only_target_field() {
            let data = with_previous(vec![employer("A"), employer("B")]);
            let mut result = Ok(());
            let list = only_previous(collect(&data, |step| {
                result = step.update_previous_employer(1, EmployerField::To, "2023-06-30");
            }));

            assert_eq!(result, Ok(()));
            assert_eq!(
                list,
                vec![
                    employer("A"),
                    EmployerRecord {
                        company: "B".to_string(),
                        to: "2023-06-30".to_string(),
                        ..Default::default()
                    },
                ]
            );
        }

        #[test]
        fn test_stale_index_is_reported_and_emits_nothing() {
            let data = with_previous(vec![employer("A")]);
            let mut sink = MockUpdateSink::new();
            sink.expect_update_data().times(0);

            let result = EmploymentHistoryStep::new(&data, &mut sink).update_previous_employer(
                3,
                EmployerField::Company,
                "X",
            );
            assert_eq!(result, Err(StepError::StaleIndex { index: 3, len: 1 }));
        }

        #[test]
        fn test_stale_index_message() {
            let err = StepError::StaleIndex { index: 2, len: 1 };
            assert_eq!(
                err.to_string(),
                "previous employer 2 no longer exists (list has 1 entries)"
            );
        }
    }
}

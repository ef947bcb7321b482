//! Update channel between the step and the wizard that owns its data
//!
//! The step never mutates `EmploymentHistory`. It describes each change as a
//! [`StepUpdate`] carrying the complete new value of one top-level field and
//! hands it to an [`UpdateSink`]. The owner merges it with
//! [`EmploymentHistory::apply`].

use super::employment::{Employed, EmployerRecord, EmploymentHistory};

/// Top-level fields of `EmploymentHistory` that can be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryField {
    PreviouslyEmployed,
    RecentEmployer,
    PreviousEmployers,
}

impl HistoryField {
    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::PreviouslyEmployed => "previouslyEmployed",
            Self::RecentEmployer => "recentEmployer",
            Self::PreviousEmployers => "previousEmployers",
        }
    }
}

/// Whole-field replacement for one `EmploymentHistory` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepUpdate {
    SetPreviouslyEmployed(Employed),
    SetRecentEmployer(EmployerRecord),
    SetPreviousEmployers(Vec<EmployerRecord>),
}

impl StepUpdate {
    /// The field this update replaces
    pub fn field(&self) -> HistoryField {
        match self {
            Self::SetPreviouslyEmployed(_) => HistoryField::PreviouslyEmployed,
            Self::SetRecentEmployer(_) => HistoryField::RecentEmployer,
            Self::SetPreviousEmployers(_) => HistoryField::PreviousEmployers,
        }
    }
}

/// Receiver of step updates (the wizard's `updateData`)
#[cfg_attr(test, mockall::automock)]
pub trait UpdateSink {
    fn update_data(&mut self, update: StepUpdate);
}

/// Queue updates for the caller to apply once the step is dropped
impl UpdateSink for Vec<StepUpdate> {
    fn update_data(&mut self, update: StepUpdate) {
        self.push(update);
    }
}

impl UpdateSink for EmploymentHistory {
    fn update_data(&mut self, update: StepUpdate) {
        self.apply(update);
    }
}

impl EmploymentHistory {
    /// Replace the field named by `update` with its value
    pub fn apply(&mut self, update: StepUpdate) {
        tracing::debug!(field = update.field().key(), "applying step update");
        match update {
            StepUpdate::SetPreviouslyEmployed(answer) => self.previously_employed = answer,
            StepUpdate::SetRecentEmployer(record) => self.recent_employer = Some(record),
            StepUpdate::SetPreviousEmployers(records) => self.previous_employers = Some(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> EmployerRecord {
        EmployerRecord {
            company: "Acme".to_string(),
            ..Default::default()
        }
    }

    mod history_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keys() {
            assert_eq!(HistoryField::PreviouslyEmployed.key(), "previouslyEmployed");
            assert_eq!(HistoryField::RecentEmployer.key(), "recentEmployer");
            assert_eq!(HistoryField::PreviousEmployers.key(), "previousEmployers");
        }

        #[test]
        fn test_update_names_its_field() {
            assert_eq!(
                StepUpdate::SetPreviouslyEmployed(Employed::Yes).field(),
                HistoryField::PreviouslyEmployed
            );
            assert_eq!(
                StepUpdate::SetRecentEmployer(acme()).field(),
                HistoryField::RecentEmployer
            );
            assert_eq!(
                StepUpdate::SetPreviousEmployers(vec![]).field(),
                HistoryField::PreviousEmployers
            );
        }
    }

    mod apply {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sets_answer() {
            let mut history = EmploymentHistory::default();
            history.apply(StepUpdate::SetPreviouslyEmployed(Employed::No));
            assert_eq!(history.previously_employed, Employed::No);
        }

        #[test]
        fn test_replaces_recent_employer_whole() {
            let mut history = EmploymentHistory {
                recent_employer: Some(EmployerRecord {
                    town: "Leeds".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            };
            history.apply(StepUpdate::SetRecentEmployer(acme()));
            assert_eq!(history.recent_employer, Some(acme()));
        }

        #[test]
        fn test_replaces_previous_employers_whole() {
            let mut history = EmploymentHistory {
                previous_employers: Some(vec![acme(), acme()]),
                ..Default::default()
            };
            history.apply(StepUpdate::SetPreviousEmployers(vec![]));
            assert_eq!(history.previous_employers, Some(vec![]));
        }

        #[test]
        fn test_leaves_other_fields_alone() {
            let mut history = EmploymentHistory {
                previously_employed: Employed::Yes,
                recent_employer: Some(acme()),
                previous_employers: None,
            };
            history.apply(StepUpdate::SetPreviousEmployers(vec![acme()]));
            assert_eq!(history.previously_employed, Employed::Yes);
            assert_eq!(history.recent_employer, Some(acme()));
        }
    }

    mod sinks {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_vec_sink_queues_in_order() {
            let mut queue: Vec<StepUpdate> = Vec::new();
            queue.update_data(StepUpdate::SetPreviouslyEmployed(Employed::Yes));
            queue.update_data(StepUpdate::SetRecentEmployer(acme()));
            assert_eq!(
                queue,
                vec![
                    StepUpdate::SetPreviouslyEmployed(Employed::Yes),
                    StepUpdate::SetRecentEmployer(acme()),
                ]
            );
        }

        #[test]
        fn test_history_sink_applies_directly() {
            let mut history = EmploymentHistory::default();
            history.update_data(StepUpdate::SetPreviouslyEmployed(Employed::Yes));
            assert_eq!(history.previously_employed, Employed::Yes);
        }
    }
}

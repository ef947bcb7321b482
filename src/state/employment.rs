//! Employment history data model

use super::forms::EmployerField;
use serde::{Deserialize, Serialize};

/// Answer to "Were you previously employed?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Employed {
    /// No answer given yet
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
}

impl Employed {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Cycle between the two selectable answers
    pub fn toggle(&self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::Unset | Self::No => Self::Yes,
        }
    }
}

/// One employment stint. Every field is free text; dates are ISO strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployerRecord {
    pub company: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub address: String,
    pub address2: String,
    pub town: String,
    pub postcode: String,
    pub telephone: String,
    pub from: String,
    pub to: String,
    pub leaving_date: String,
    pub key_tasks: String,
    pub reason_for_leaving: String,
}

impl EmployerRecord {
    /// Read a field by name
    pub fn get(&self, field: EmployerField) -> &str {
        match field {
            EmployerField::Company => &self.company,
            EmployerField::Name => &self.name,
            EmployerField::Email => &self.email,
            EmployerField::Position => &self.position,
            EmployerField::Address => &self.address,
            EmployerField::Address2 => &self.address2,
            EmployerField::Town => &self.town,
            EmployerField::Postcode => &self.postcode,
            EmployerField::Telephone => &self.telephone,
            EmployerField::From => &self.from,
            EmployerField::To => &self.to,
            EmployerField::LeavingDate => &self.leaving_date,
            EmployerField::KeyTasks => &self.key_tasks,
            EmployerField::ReasonForLeaving => &self.reason_for_leaving,
        }
    }

    fn slot_mut(&mut self, field: EmployerField) -> &mut String {
        match field {
            EmployerField::Company => &mut self.company,
            EmployerField::Name => &mut self.name,
            EmployerField::Email => &mut self.email,
            EmployerField::Position => &mut self.position,
            EmployerField::Address => &mut self.address,
            EmployerField::Address2 => &mut self.address2,
            EmployerField::Town => &mut self.town,
            EmployerField::Postcode => &mut self.postcode,
            EmployerField::Telephone => &mut self.telephone,
            EmployerField::From => &mut self.from,
            EmployerField::To => &mut self.to,
            EmployerField::LeavingDate => &mut self.leaving_date,
            EmployerField::KeyTasks => &mut self.key_tasks,
            EmployerField::ReasonForLeaving => &mut self.reason_for_leaving,
        }
    }

    /// Copy of this record with one field overwritten
    pub fn with(&self, field: EmployerField, value: impl Into<String>) -> Self {
        let mut record = self.clone();
        *record.slot_mut(field) = value.into();
        record
    }
}

/// Employment history section of an application, owned by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentHistory {
    #[serde(default)]
    pub previously_employed: Employed,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_employer: Option<EmployerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_employers: Option<Vec<EmployerRecord>>,
}

impl EmploymentHistory {
    /// Previous employers, treating absence as an empty list
    pub fn previous_employers(&self) -> &[EmployerRecord] {
        self.previous_employers.as_deref().unwrap_or(&[])
    }

    /// Value of a recent-employer field, empty when there is no record yet
    pub fn recent_value(&self, field: EmployerField) -> &str {
        self.recent_employer
            .as_ref()
            .map(|r| r.get(field))
            .unwrap_or("")
    }
}

//! Employer form field descriptors

/// Longest accepted date input (`YYYY-MM-DD`)
const DATE_LEN: usize = 10;

/// How a field is entered and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// ISO date string, only digits and `-` are accepted
    Date,
    /// Multi-line text with a visible row count
    TextArea { rows: u16 },
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::TextArea { .. })
    }

    /// Value after typing `c`, or `None` if the widget rejects the character
    pub fn push_char(&self, value: &str, c: char) -> Option<String> {
        if let FieldKind::Date = self {
            if !(c.is_ascii_digit() || c == '-') || value.chars().count() >= DATE_LEN {
                return None;
            }
        }
        let mut next = value.to_string();
        next.push(c);
        Some(next)
    }

    /// Value after a backspace
    pub fn pop_char(&self, value: &str) -> String {
        let mut next = value.to_string();
        next.pop();
        next
    }
}

/// A field of an employer record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployerField {
    Company,
    Name,
    Email,
    Position,
    Address,
    Address2,
    Town,
    Postcode,
    Telephone,
    From,
    To,
    LeavingDate,
    KeyTasks,
    ReasonForLeaving,
}

impl EmployerField {
    /// All fields, in the order the recent-employer form shows them
    pub const ALL: [EmployerField; 14] = [
        Self::Company,
        Self::Name,
        Self::Email,
        Self::Position,
        Self::Address,
        Self::Address2,
        Self::Town,
        Self::Postcode,
        Self::Telephone,
        Self::From,
        Self::To,
        Self::LeavingDate,
        Self::KeyTasks,
        Self::ReasonForLeaving,
    ];

    /// Fields shown on each previous-employer card
    pub const PREVIOUS: [EmployerField; 5] = [
        Self::Company,
        Self::Name,
        Self::From,
        Self::To,
        Self::ReasonForLeaving,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Name => "name",
            Self::Email => "email",
            Self::Position => "position",
            Self::Address => "address",
            Self::Address2 => "address2",
            Self::Town => "town",
            Self::Postcode => "postcode",
            Self::Telephone => "telephone",
            Self::From => "from",
            Self::To => "to",
            Self::LeavingDate => "leavingDate",
            Self::KeyTasks => "keyTasks",
            Self::ReasonForLeaving => "reasonForLeaving",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Position => "Position Held",
            Self::Address => "Address",
            Self::Address2 => "Address 2",
            Self::Town => "Town",
            Self::Postcode => "Postcode",
            Self::Telephone => "Telephone Number",
            Self::From => "From",
            Self::To => "To",
            Self::LeavingDate => "Leaving date or notice (if relevant)",
            Self::KeyTasks => "Key Tasks/Responsibilities",
            Self::ReasonForLeaving => "Reason for leaving",
        }
    }

    /// Whether the label carries the required marker. Nothing enforces it.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Address2 | Self::LeavingDate | Self::KeyTasks)
    }

    /// Label with the required marker appended
    pub fn display_label(&self) -> String {
        if self.is_required() {
            format!("{} *", self.label())
        } else {
            self.label().to_string()
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::From | Self::To | Self::LeavingDate => FieldKind::Date,
            Self::KeyTasks => FieldKind::TextArea { rows: 3 },
            Self::ReasonForLeaving => FieldKind::TextArea { rows: 2 },
            _ => FieldKind::Text,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Company => Some("Employer Name"),
            Self::Name => Some("Name"),
            Self::Email => Some("Email"),
            Self::Position => Some("Position"),
            Self::Address => Some("Address"),
            Self::Address2 => Some("Address 2"),
            Self::Town => Some("Town"),
            Self::Postcode => Some("Postcode"),
            Self::Telephone => Some("Contact Number"),
            Self::From
            | Self::To
            | Self::LeavingDate
            | Self::KeyTasks
            | Self::ReasonForLeaving => None,
        }
    }
}

//! Form domain layer
//!
//! Field descriptors for employer records and keyboard focus over the
//! step's inputs.

mod field;
mod focus;

pub use field::{EmployerField, FieldKind};
pub use focus::{FocusTarget, StepFocus};

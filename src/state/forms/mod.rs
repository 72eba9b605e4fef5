//! Form domain layer
//!
//! Type-safe handling of the application form:
//! - `field`: field names, control kinds, and sections
//! - `draft`: the in-progress values
//! - `error_set`: per-field validation messages
//! - `validation`: submit-time rules
//! - `form_state`: focus, change handling, and the submission phase

mod draft;
mod error_set;
mod field;
mod form_state;
mod validation;

pub use draft::ApplicationDraft;
pub use error_set::ErrorSet;
pub use field::{FieldKind, FieldName, Section};
pub use form_state::{ApplicationForm, Form, SubmissionPhase};

#[cfg(test)]
pub(crate) use validation::tests::valid_draft;

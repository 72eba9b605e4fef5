//! Application form state: draft values, errors, focus, and lifecycle phase

use super::draft::ApplicationDraft;
use super::error_set::ErrorSet;
use super::field::FieldName;
use super::validation::validate;
use crate::submission::{SubmissionReceipt, SubmissionRequest};
use uuid::Uuid;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Submission lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Waiting on the submitter
    Submitting,
    /// Confirmation window after a successful submit
    Submitted,
}

/// The application intake form
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub draft: ApplicationDraft,
    pub errors: ErrorSet,
    pub phase: SubmissionPhase,
    /// Index into the visible fields; one past the last field is the submit button
    pub active_field_index: usize,
    /// Receipt of the last accepted submission, shown during confirmation
    pub receipt: Option<SubmissionReceipt>,
    /// Idempotency key of the current draft, kept until a value changes
    pending_reference: Option<Uuid>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Fields currently shown, in display order
    pub fn visible_fields(&self) -> Vec<FieldName> {
        self.draft.visible_fields()
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.visible_fields().len()
    }

    /// Field under focus, or None on the submit button
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    /// Move focus to a specific field if it is visible
    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = self.visible_fields().iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    /// Change handler: overwrite one field and drop its error message.
    /// No validation happens here.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        let slot = self.draft.get_mut(field);
        if *slot != value {
            *slot = value;
            self.pending_reference = None;
        }
        self.errors.remove(field);
        // Hiding the description can shrink the field list under the cursor
        let max = self.field_count() - 1;
        if self.active_field_index > max {
            self.active_field_index = max;
        }
    }

    /// Apply a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        let kind = field.kind();
        if kind.is_choice() {
            if let Some(value) = kind.option_for_key(c) {
                self.set_value(field, value);
            }
        } else if let Some(value) = kind.append_char(self.draft.get(field), c) {
            self.set_value(field, value);
        }
    }

    /// Insert a line break into the focused multi-line field
    pub fn newline(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if field.kind().is_multiline() {
            let mut value = self.draft.get(field).to_string();
            value.push('\n');
            self.set_value(field, value);
        }
    }

    /// Delete the last character, or clear a choice
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if field.kind().is_choice() {
            if !self.draft.get(field).is_empty() {
                self.set_value(field, String::new());
            }
            return;
        }
        let mut value = self.draft.get(field).to_string();
        if value.pop().is_some() {
            self.set_value(field, value);
        }
    }

    /// Step the focused choice field to its next or previous option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        let kind = field.kind();
        if kind.is_choice() {
            let next = kind.cycle(self.draft.get(field), forward);
            self.set_value(field, next);
        }
    }

    /// Replace the error set with a fresh validation pass.
    /// Returns true when the draft is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft);
        self.errors.is_empty()
    }

    /// Validate and, if valid, enter the submitting phase.
    ///
    /// Returns the draft to hand to the submitter, or None when the form is
    /// not idle or validation failed (errors are left populated). On failure
    /// focus moves to the first invalid field.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if self.phase != SubmissionPhase::Idle {
            return None;
        }
        if !self.validate() {
            if let Some(first) = self.errors.first_field() {
                self.focus_field(first);
            }
            for (field, message) in self.errors.iter() {
                tracing::debug!(field = field.key(), reason = message, "invalid field");
            }
            tracing::info!(
                invalid = ?self.errors.fields().iter().map(|f| f.key()).collect::<Vec<_>>(),
                "submission blocked by validation"
            );
            return None;
        }
        self.phase = SubmissionPhase::Submitting;
        let reference = *self.pending_reference.get_or_insert_with(Uuid::new_v4);
        tracing::info!(%reference, "submitting application");
        Some(SubmissionRequest {
            reference,
            draft: self.draft.clone(),
        })
    }

    /// Submitter accepted the draft: enter the confirmation window
    pub fn mark_submitted(&mut self, receipt: SubmissionReceipt) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Submitted;
            self.receipt = Some(receipt);
        }
    }

    /// Submitter refused the draft: back to editing with values and reference kept
    pub fn mark_failed(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// End of the confirmation window: empty every field and clear errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form for ApplicationForm {
    fn field_count(&self) -> usize {
        // Visible fields plus the submit button
        self.visible_fields().len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

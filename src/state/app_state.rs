//! Application state definitions

use super::confirmation_state::ConfirmationState;
use super::forms::{ApplicationForm, SubmissionPhase};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Editable application form (also shown while submitting)
    #[default]
    Form,
    /// Success confirmation window
    Confirmation,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ApplicationForm,

    /// Check mark animation, present only during confirmation
    pub confirmation: Option<ConfirmationState>,

    /// Modal error messages, shown one at a time
    error_queue: VecDeque<String>,
}

impl AppState {
    /// View derived from the submission phase
    pub fn current_view(&self) -> View {
        match self.form.phase {
            SubmissionPhase::Submitted => View::Confirmation,
            SubmissionPhase::Idle | SubmissionPhase::Submitting => View::Form,
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the displayed error, revealing the next one if any
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_view_is_form() {
            assert_eq!(AppState::default().current_view(), View::Form);
        }

        #[test]
        fn test_submitting_still_shows_form() {
            let mut state = AppState::default();
            state.form.phase = SubmissionPhase::Submitting;
            assert_eq!(state.current_view(), View::Form);
        }

        #[test]
        fn test_submitted_shows_confirmation() {
            let mut state = AppState::default();
            state.form.phase = SubmissionPhase::Submitted;
            assert_eq!(state.current_view(), View::Confirmation);
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_errors_are_shown_in_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());

            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));

            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));

            state.dismiss_error();
            assert!(!state.has_errors());
            assert_eq!(state.current_error(), None);
        }

        #[test]
        fn test_dismiss_on_empty_is_noop() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}

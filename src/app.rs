//! Application state and core logic

use crate::config::IntakeConfig;
use crate::state::{AppState, ConfirmationState, Form, SubmissionPhase};
use crate::submission::{SimulatedSubmitter, SubmissionEvent, SubmissionSimulator, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: IntakeConfig,
    /// Timed submission lifecycle
    simulator: SubmissionSimulator,
    /// Whether the app should quit
    quit: bool,
    /// Esc was pressed once over unsaved input; a second Esc quits
    quit_armed: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App backed by the simulated submitter
    pub fn new(config: IntakeConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: IntakeConfig, submitter: Arc<dyn Submitter>) -> Self {
        let simulator = SubmissionSimulator::new(submitter, config.reset_delay());
        Self {
            state: AppState::default(),
            config,
            simulator,
            quit: false,
            quit_armed: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the screen needs frequent redraws
    pub fn is_animating(&self) -> bool {
        self.state.confirmation.is_some()
    }

    /// Advance the confirmation animation
    pub fn update_confirmation(&mut self) {
        if let Some(ref mut confirmation) = self.state.confirmation {
            confirmation.update();
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Validate and hand the draft to the submitter
    pub fn submit(&mut self) {
        if self.state.form.phase != SubmissionPhase::Idle {
            return;
        }
        match self.state.form.begin_submit() {
            Some(request) => {
                self.status_message = None;
                self.simulator.start(request);
            }
            None => {
                let count = self.state.form.errors.len();
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status_message = Some(format!("{count} {noun} attention"));
            }
        }
    }

    /// Apply every transition the submission run has reported so far
    pub fn poll_submission(&mut self) {
        while let Some(event) = self.simulator.try_next_event() {
            self.apply_submission_event(event);
        }
    }

    fn apply_submission_event(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::Completed(receipt) => {
                tracing::info!(reference = %receipt.reference, "application submitted");
                self.state.form.mark_submitted(receipt);
                self.state.confirmation = Some(ConfirmationState::new());
            }
            SubmissionEvent::Failed(err) => {
                self.state.form.mark_failed();
                self.push_error(err.to_string());
            }
            SubmissionEvent::ResetDue => {
                tracing::debug!("confirmation window elapsed, resetting form");
                self.state.form.reset();
                self.state.confirmation = None;
            }
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let quit_armed = std::mem::take(&mut self.quit_armed);

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Esc {
            self.request_quit(quit_armed);
            return Ok(());
        }

        // The confirmation window only listens for quit
        if self.state.form.is_submitted() {
            return Ok(());
        }

        self.handle_form_key(key);
        Ok(())
    }

    /// Quit, asking for a second Esc first if typed input would be lost
    fn request_quit(&mut self, armed: bool) {
        let form = &self.state.form;
        let unsaved = !form.is_submitted() && !form.draft.is_blank();
        if unsaved && !armed {
            self.quit_armed = true;
            self.status_message =
                Some("Press Esc again to discard the application and quit".to_string());
            return;
        }
        if self.simulator.is_running() {
            tracing::info!("quitting with a submission in flight");
        } else if unsaved {
            tracing::info!("discarding an unsubmitted application");
        }
        self.quit = true;
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let command = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::COMMAND_MODIFIER);
        let on_submit = self.state.form.is_submit_row_active();

        let wants_submit = match key.code {
            KeyCode::Char('s') => command,
            KeyCode::Enter => on_submit,
            _ => false,
        };
        if wants_submit {
            self.submit();
            return;
        }

        let form = &mut self.state.form;
        let active_kind = form.active_field_name().map(|f| f.kind());
        let on_choice = active_kind.is_some_and(|k| k.is_choice());
        let on_multiline = active_kind.is_some_and(|k| k.is_multiline());

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if on_choice => form.cycle_option(false),
            KeyCode::Right if on_choice => form.cycle_option(true),
            KeyCode::Char(' ') if on_choice => form.cycle_option(true),
            KeyCode::Enter if on_multiline => form.newline(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !command => form.input_char(c),
            _ => {}
        }
    }

    /// Handle mouse input: the wheel moves focus through the form
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || self.state.form.is_submitted() {
            return Ok(());
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.form.next_field(),
            MouseEventKind::ScrollUp => self.state.form.prev_field(),
            _ => {}
        }
        Ok(())
    }
}

//! Timed submission lifecycle
//!
//! A spawned task performs the submit call and then waits out the
//! confirmation window. It never touches form state: transitions are sent
//! as [`SubmissionEvent`]s and applied by whoever owns the form. Every run is
//! tied to a [`CancellationToken`] that is cancelled on [`SubmissionSimulator::cancel`],
//! on a new run, and on drop.

use super::traits::{SubmissionError, SubmissionReceipt, SubmissionRequest, Submitter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

/// Default length of the confirmation window before the form resets
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Transition reported by a running submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The submitter accepted the application; enter the confirmation window
    Completed(SubmissionReceipt),
    /// The submitter refused the application
    Failed(SubmissionError),
    /// The confirmation window is over; reset the form
    ResetDue,
}

pub struct SubmissionSimulator {
    submitter: Arc<dyn Submitter>,
    reset_delay: Duration,
    event_tx: UnboundedSender<SubmissionEvent>,
    event_rx: UnboundedReceiver<SubmissionEvent>,
    cancel: Option<CancellationToken>,
}

impl SubmissionSimulator {
    pub fn new(submitter: Arc<dyn Submitter>, reset_delay: Duration) -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        Self {
            submitter,
            reset_delay,
            event_tx,
            event_rx,
            cancel: None,
        }
    }

    /// Start a submission run for `request`, cancelling any run in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, request: SubmissionRequest) {
        self.cancel();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let submitter = Arc::clone(&self.submitter);
        let event_tx = self.event_tx.clone();
        let reset_delay = self.reset_delay;

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = submitter.submit(request) => outcome,
            };

            let receipt = match outcome {
                Ok(receipt) => receipt,
                Err(err) => {
                    tracing::warn!("submission failed: {err}");
                    let _ = event_tx.send(SubmissionEvent::Failed(err));
                    return;
                }
            };

            if token.is_cancelled()
                || event_tx
                    .send(SubmissionEvent::Completed(receipt))
                    .is_err()
            {
                return;
            }

            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(reset_delay) => {
                    let _ = event_tx.send(SubmissionEvent::ResetDue);
                }
            }
        });

        self.cancel = Some(cancel);
    }

    /// Cancel the run in flight and discard any transitions not yet applied
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
            tracing::debug!("submission run cancelled");
        }
        while self.event_rx.try_recv().is_ok() {}
    }

    /// Whether a run has been started and not cancelled or finished
    pub fn is_running(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| !c.is_cancelled())
    }

    /// Take the next pending transition without waiting
    pub fn try_next_event(&mut self) -> Option<SubmissionEvent> {
        let event = self.event_rx.try_recv().ok()?;
        self.note_finished(&event);
        Some(event)
    }

    /// Wait for the next transition
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        let event = self.event_rx.recv().await?;
        self.note_finished(&event);
        Some(event)
    }

    fn note_finished(&mut self, event: &SubmissionEvent) {
        if matches!(event, SubmissionEvent::Failed(_) | SubmissionEvent::ResetDue) {
            self.cancel = None;
        }
    }
}

impl Drop for SubmissionSimulator {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApplicationDraft;
    use crate::submission::{MockSubmitter, SimulatedSubmitter};
    use tokio::time::Instant;
    use uuid::Uuid;

    fn request(draft: ApplicationDraft) -> SubmissionRequest {
        SubmissionRequest {
            reference: Uuid::new_v4(),
            draft,
        }
    }

    /// Paused-clock timers may land a tick past their deadline
    fn assert_elapsed(start: Instant, expected_ms: u64) {
        let elapsed = start.elapsed();
        let expected = Duration::from_millis(expected_ms);
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(10),
            "elapsed {elapsed:?}, expected {expected:?}"
        );
    }

    fn simulated(submit_ms: u64, reset_ms: u64) -> SubmissionSimulator {
        SubmissionSimulator::new(
            Arc::new(SimulatedSubmitter::new(Duration::from_millis(submit_ms))),
            Duration::from_millis(reset_ms),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_then_resets_on_schedule() {
        let mut simulator = simulated(1500, 3000);
        let start = Instant::now();
        simulator.start(request(ApplicationDraft::default()));
        assert!(simulator.is_running());

        let first = simulator.next_event().await;
        assert!(matches!(first, Some(SubmissionEvent::Completed(_))));
        assert_elapsed(start, 1500);

        let second = simulator.next_event().await;
        assert_eq!(second, Some(SubmissionEvent::ResetDue));
        assert_elapsed(start, 4500);
        assert!(!simulator.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_event_before_submit_delay() {
        let mut simulator = simulated(1500, 3000);
        simulator.start(request(ApplicationDraft::default()));

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(simulator.try_next_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_expiry_suppresses_events() {
        let mut simulator = simulated(1500, 3000);
        simulator.start(request(ApplicationDraft::default()));
        tokio::time::sleep(Duration::from_millis(500)).await;

        simulator.cancel();
        assert!(!simulator.is_running());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(simulator.try_next_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_completion() {
        let mut simulator = simulated(100, 3000);
        simulator.start(request(ApplicationDraft::default()));
        tokio::time::sleep(Duration::from_millis(200)).await;

        simulator.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(simulator.try_next_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_run() {
        let token = {
            let mut simulator = simulated(1500, 3000);
            simulator.start(request(ApplicationDraft::default()));
            simulator.cancel.clone().unwrap()
        };
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_run() {
        let mut simulator = simulated(1000, 3000);
        simulator.start(request(ApplicationDraft::default()));
        tokio::time::sleep(Duration::from_millis(600)).await;
        let start = Instant::now();
        simulator.start(request(ApplicationDraft::default()));

        let first = simulator.next_event().await;
        assert!(matches!(first, Some(SubmissionEvent::Completed(_))));
        assert_elapsed(start, 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_reported_without_reset() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(SubmissionError::Rejected("offline".into())));
        let mut simulator = SubmissionSimulator::new(Arc::new(mock), Duration::from_millis(3000));

        simulator.start(request(ApplicationDraft::default()));

        let event = simulator.next_event().await;
        assert_eq!(
            event,
            Some(SubmissionEvent::Failed(SubmissionError::Rejected(
                "offline".into()
            )))
        );
        assert!(!simulator.is_running());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(simulator.try_next_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitter_receives_draft() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit()
            .withf(|request| request.draft.full_name == "Asha")
            .times(1)
            .returning(|request| Ok(SubmissionReceipt::new(request.reference)));
        let mut simulator = SubmissionSimulator::new(Arc::new(mock), Duration::from_millis(10));

        let request = request(ApplicationDraft {
            full_name: "Asha".to_string(),
            ..Default::default()
        });
        let reference = request.reference;
        simulator.start(request);

        match simulator.next_event().await {
            Some(SubmissionEvent::Completed(receipt)) => assert_eq!(receipt.reference, reference),
            other => panic!("expected completion, got {other:?}"),
        }
    }
}

//! Local stand-in for a remote submission endpoint
//!
//! Nothing leaves the process: the submitter waits a fixed delay to mimic a
//! round trip and then accepts the application.

use super::traits::{SubmissionError, SubmissionReceipt, SubmissionRequest, Submitter};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round-trip time
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Submitter that always succeeds after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let payload_bytes = serde_json::to_vec(&request.draft)
            .map(|b| b.len())
            .unwrap_or(0);
        tracing::debug!(
            reference = %request.reference,
            payload_bytes,
            delay_ms = self.delay.as_millis() as u64,
            "simulating submission"
        );

        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt::new(request.reference);
        tracing::info!(reference = %receipt.reference, "application accepted");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApplicationDraft;
    use std::time::Duration;
    use uuid::Uuid;

    fn request() -> SubmissionRequest {
        SubmissionRequest {
            reference: Uuid::new_v4(),
            draft: ApplicationDraft::default(),
        }
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedSubmitter::default().delay, Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();

        let receipt = submitter.submit(request()).await;

        assert!(receipt.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_receipt_echoes_request_reference() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
        let request = request();
        let reference = request.reference;

        let receipt = submitter.submit(request).await.unwrap();

        assert_eq!(receipt.reference, reference);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_is_not_done_before_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let outcome = tokio::time::timeout(
            Duration::from_millis(1000),
            submitter.submit(request()),
        )
        .await;
        assert!(outcome.is_err());
    }
}

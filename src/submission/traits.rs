//! Trait abstraction for submitting an application, enabling mocking in tests

use crate::state::ApplicationDraft;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// A validated draft together with its idempotency reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Client-generated key, reused when an unchanged draft is resubmitted
    pub reference: Uuid,
    pub draft: ApplicationDraft,
}

/// Proof of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Reference of the request that was accepted
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(reference: Uuid) -> Self {
        Self {
            reference,
            submitted_at: Utc::now(),
        }
    }

    /// First block of the reference, for display
    pub fn short_reference(&self) -> String {
        self.reference
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new(Uuid::new_v4())
    }
}

/// Reasons a submission can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Destination for validated applications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit a validated draft. The receipt must echo `request.reference`.
    async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

//! Application submission
//!
//! The form hands a validated draft to a [`Submitter`]; the
//! [`SubmissionSimulator`] drives the timed lifecycle around it and reports
//! transitions back to the event loop as [`SubmissionEvent`]s.

mod simulated;
mod simulator;
mod traits;

pub use simulated::{SimulatedSubmitter, DEFAULT_SUBMIT_DELAY};
pub use simulator::{SubmissionEvent, SubmissionSimulator, DEFAULT_RESET_DELAY};
pub use traits::{SubmissionError, SubmissionReceipt, SubmissionRequest, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;

//! Submission Lifecycle
//!
//! Tracks one form's trip through idle, loading, and settled states.
//! At most one request is in flight at a time; `begin` is the guard.

use serde::{Deserialize, Serialize};

/// Where a submission currently stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or cleared for a fresh attempt
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last request returned a parseable 2xx response
    Succeeded,
    /// Last request ended in a transport, status, or parse error
    Failed,
}

impl SubmissionStatus {
    /// Start a submission. Returns `false` (and leaves the state alone)
    /// when a request is already in flight.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = SubmissionStatus::Loading;
        true
    }

    /// Settle the in-flight submission as successful
    pub fn succeed(&mut self) {
        if self.is_loading() {
            *self = SubmissionStatus::Succeeded;
        }
    }

    /// Settle the in-flight submission as failed
    pub fn fail(&mut self) {
        if self.is_loading() {
            *self = SubmissionStatus::Failed;
        }
    }

    /// A request is currently outstanding
    pub const fn is_loading(self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    /// The last submission settled (either way)
    pub const fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Loading => write!(f, "loading"),
            SubmissionStatus::Succeeded => write!(f, "succeeded"),
            SubmissionStatus::Failed => write!(f, "failed"),
        }
    }
}

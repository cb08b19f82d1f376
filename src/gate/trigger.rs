use std::fmt::{Display, Formatter};

use crate::gate::GateError;

/// Events that are allowed to trigger the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A pull request was opened or updated.
    PullRequest,
    /// A review was submitted on a pull request.
    PullRequestReview,
}

impl TriggerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TriggerEvent::PullRequest => "pull_request",
            TriggerEvent::PullRequestReview => "pull_request_review",
        }
    }
}

impl Display for TriggerEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Makes sure that we run in the context of a pull request or a pull request review.
pub fn ensure_pull_request_or_review(event_name: &str) -> Result<TriggerEvent, GateError> {
    tracing::info!("Ensuring we are in the context of a pull request or pull request review...");

    match event_name {
        "pull_request" => Ok(TriggerEvent::PullRequest),
        "pull_request_review" => Ok(TriggerEvent::PullRequestReview),
        other => Err(GateError::UnsupportedEvent(other.to_string())),
    }
}

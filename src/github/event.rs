use std::path::Path;

use anyhow::Context;

use crate::gate::PullRequestRef;
use crate::github::PullRequestNumber;

#[derive(serde::Deserialize, Debug)]
struct PayloadUser {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct PayloadPullRequest {
    number: u64,
    user: Option<PayloadUser>,
}

/// The part of a workflow event payload we care about.
/// Both `pull_request` and `pull_request_review` payloads carry the pull request under the
/// same key; other events (e.g. `push`) don't have it at all.
#[derive(serde::Deserialize, Debug)]
struct EventPayload {
    pull_request: Option<PayloadPullRequest>,
}

/// Extracts the pull request from the JSON payload of a workflow event.
pub fn parse_event_payload(body: &[u8]) -> anyhow::Result<Option<PullRequestRef>> {
    let payload: EventPayload =
        serde_json::from_slice(body).context("Cannot parse event payload")?;
    Ok(payload.pull_request.map(|pr| PullRequestRef {
        number: PullRequestNumber(pr.number),
        author: pr.user.map(|user| user.login),
    }))
}

/// Loads the event payload stored by the runner at `GITHUB_EVENT_PATH`.
pub fn load_event_payload(path: &Path) -> anyhow::Result<Option<PullRequestRef>> {
    let body = std::fs::read(path)
        .with_context(|| format!("Cannot read event payload from {}", path.display()))?;
    parse_event_payload(&body)
}

//! The approval gate: checks that at least one member of the required reviewers team (other
//! than the pull request author) has approved the pull request.
use async_trait::async_trait;

use crate::github::{GithubRepoName, PullRequestNumber, Review, TeamSlug};

mod decision;
mod error;
mod outcome;
mod reviewers;
mod reviews;
mod trigger;

pub use decision::has_required_approval;
pub use error::GateError;
pub use outcome::GateOutcome;
pub use reviewers::{resolve_required_reviewers, RequiredReviewers};
pub use reviews::load_reviews;
pub use trigger::{ensure_pull_request_or_review, TriggerEvent};

/// Provides access to the members of organization teams.
/// It is behind a trait to allow easier mocking in tests.
#[async_trait]
pub trait TeamClient: Send + Sync {
    /// Return logins of all members of `team` in `org`.
    async fn list_team_members(&self, org: &str, team: &TeamSlug) -> anyhow::Result<Vec<String>>;
}

/// Provides access to the reviews of pull requests.
#[async_trait]
pub trait ReviewClient: Send + Sync {
    /// Return all reviews submitted on the pull request, oldest first.
    async fn list_reviews(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
    ) -> anyhow::Result<Vec<Review>>;
}

/// The pull request that triggered the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullRequestRef {
    pub number: PullRequestNumber,
    pub author: Option<String>,
}

/// Everything the gate needs to know about the invocation.
#[derive(Clone, Debug)]
pub struct GateContext {
    /// Name of the event that triggered the run (e.g. `pull_request`).
    pub event_name: String,
    pub repository: GithubRepoName,
    pub pull_request: Option<PullRequestRef>,
    pub team: Option<TeamSlug>,
}

/// Result of the approval check.
#[derive(Debug, PartialEq, Eq)]
pub struct ApprovalCheck {
    pub required_reviewers: RequiredReviewers,
    pub approved: bool,
}

/// Checks whether the pull request described by `ctx` has a required approval.
///
/// Team members are loaded with `teams` (which needs to be able to read the organization),
/// reviews with `reviews`. Nothing is fetched if the context is not valid.
pub async fn check_required_approval<T, R>(
    ctx: &GateContext,
    teams: &T,
    reviews: &R,
) -> anyhow::Result<ApprovalCheck>
where
    T: TeamClient + ?Sized,
    R: ReviewClient + ?Sized,
{
    let event = ensure_pull_request_or_review(&ctx.event_name)?;
    let pr = ctx
        .pull_request
        .as_ref()
        .ok_or_else(|| GateError::MissingPullRequest(event.to_string()))?;
    let team = ctx.team.as_ref().ok_or(GateError::MissingTeam)?;

    let required_reviewers = resolve_required_reviewers(
        teams,
        ctx.repository.owner(),
        team,
        pr.author.as_deref(),
    )
    .await?;
    let reviews = load_reviews(reviews, &ctx.repository, pr.number).await?;
    let approved = has_required_approval(&required_reviewers, &reviews);

    Ok(ApprovalCheck {
        required_reviewers,
        approved,
    })
}

/// Runs the whole gate and turns any failure into a [`GateOutcome::Failed`].
pub async fn run_gate<T, R>(ctx: &GateContext, teams: &T, reviews: &R) -> GateOutcome
where
    T: TeamClient + ?Sized,
    R: ReviewClient + ?Sized,
{
    GateOutcome::from_check(check_required_approval(ctx, teams, reviews).await)
}

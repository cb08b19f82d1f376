use std::fmt::{Display, Formatter};

use crate::gate::TeamClient;
use crate::github::TeamSlug;

/// Logins of team members whose approval satisfies the gate, in the order returned by GitHub.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredReviewers(Vec<String>);

impl RequiredReviewers {
    pub fn new(logins: Vec<String>) -> Self {
        Self(logins)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|login| login.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for RequiredReviewers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Loads the members of `team` in `org`, leaving out `exclude` (the pull request author).
pub async fn resolve_required_reviewers<C: TeamClient + ?Sized>(
    client: &C,
    org: &str,
    team: &TeamSlug,
    exclude: Option<&str>,
) -> anyhow::Result<RequiredReviewers> {
    tracing::info!("Getting the team members for the {team} team...");
    let mut logins = client.list_team_members(org, team).await?;

    if let Some(exclude) = exclude.filter(|login| !login.is_empty()) {
        tracing::info!("Filtering out the pull request author {exclude} from the team members...");
        logins.retain(|login| login != exclude);
    }

    let reviewers = RequiredReviewers::new(logins);
    tracing::info!("The following logins were found for the team: {reviewers}");
    Ok(reviewers)
}

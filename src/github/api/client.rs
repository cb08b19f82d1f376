use anyhow::Context;
use async_trait::async_trait;
use octocrab::{Octocrab, Page};

use crate::gate::{ReviewClient, TeamClient};
use crate::github::api::PAGE_SIZE;
use crate::github::{GithubRepoName, PullRequestNumber, Review, ReviewState, TeamSlug};

/// Provides read access to pull request reviews and team memberships using the GitHub API.
pub struct GithubClient {
    client: Octocrab,
}

impl GithubClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Loads all pages of a paginated list endpoint.
    async fn get_all<T>(&self, route: &str) -> octocrab::Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        #[derive(serde::Serialize)]
        struct PageParams {
            per_page: u8,
        }

        let first_page: Page<T> = self
            .client
            .get(route, Some(&PageParams { per_page: PAGE_SIZE }))
            .await?;
        self.client.all_pages(first_page).await
    }
}

#[derive(serde::Deserialize, Debug)]
struct UserPayload {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct ReviewPayload {
    user: Option<UserPayload>,
    state: String,
}

#[async_trait]
impl TeamClient for GithubClient {
    async fn list_team_members(&self, org: &str, team: &TeamSlug) -> anyhow::Result<Vec<String>> {
        // https://docs.github.com/en/rest/teams/members?apiVersion=2022-11-28#list-team-members
        let members: Vec<UserPayload> = self
            .get_all(&format!("/orgs/{org}/teams/{team}/members"))
            .await
            .with_context(|| format!("Cannot load members of team {org}/{team}"))?;
        Ok(members.into_iter().map(|member| member.login).collect())
    }
}

#[async_trait]
impl ReviewClient for GithubClient {
    async fn list_reviews(
        &self,
        repo: &GithubRepoName,
        pr: PullRequestNumber,
    ) -> anyhow::Result<Vec<Review>> {
        // https://docs.github.com/en/rest/pulls/reviews?apiVersion=2022-11-28#list-reviews-for-a-pull-request
        let reviews: Vec<ReviewPayload> = self
            .get_all(&format!(
                "/repos/{}/{}/pulls/{pr}/reviews",
                repo.owner(),
                repo.name()
            ))
            .await
            .with_context(|| format!("Cannot load reviews of {repo}#{pr}"))?;
        Ok(reviews
            .into_iter()
            .map(|review| Review {
                author: review.user.map(|user| user.login),
                state: ReviewState(review.state),
            })
            .collect())
    }
}

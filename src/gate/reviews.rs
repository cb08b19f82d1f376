use crate::gate::ReviewClient;
use crate::github::{GithubRepoName, PullRequestNumber, Review};

/// Loads every review submitted on the pull request, oldest first.
pub async fn load_reviews<C: ReviewClient + ?Sized>(
    client: &C,
    repo: &GithubRepoName,
    pr: PullRequestNumber,
) -> anyhow::Result<Vec<Review>> {
    tracing::info!("Getting the reviews of {repo}#{pr}...");
    let reviews = client.list_reviews(repo, pr).await?;
    tracing::debug!("Found {} review(s) on {repo}#{pr}", reviews.len());
    Ok(reviews)
}

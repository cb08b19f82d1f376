use anyhow::Context;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

pub mod client;

pub fn base_github_url() -> &'static str {
    "https://api.github.com"
}

/// Number of items requested per page from paginated endpoints.
pub(crate) const PAGE_SIZE: u8 = 100;

/// Creates an API client authenticated with a personal access token (or the workflow's
/// `GITHUB_TOKEN`).
pub fn create_github_client(token: &SecretString, base_url: &str) -> anyhow::Result<Octocrab> {
    Octocrab::builder()
        .base_uri(base_url)
        .with_context(|| format!("Invalid GitHub API URL {base_url}"))?
        .personal_token(token.expose_secret().clone())
        .build()
        .context("Could not create octocrab client")
}

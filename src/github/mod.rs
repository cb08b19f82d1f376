//! Contains definitions of common types (repository name, pull request, review, team) needed
//! for working with GitHub repositories.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::gate::GateError;

pub mod api;
pub mod event;

pub use api::client::GithubClient;
pub use api::create_github_client;

/// Unique identifier of a GitHub repository
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GithubRepoName {
    owner: String,
    name: String,
}

impl GithubRepoName {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    /// The owner of the repository. For organization repositories, this is the organization
    /// whose teams are queried.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for GithubRepoName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.owner, self.name))
    }
}

/// Parses the `<owner>/<name>` format used by `GITHUB_REPOSITORY`.
impl FromStr for GithubRepoName {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name))
            }
            _ => Err(GateError::InvalidRepository(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullRequestNumber(pub u64);

impl Display for PullRequestNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}

/// Slug of a team inside an organization (e.g. `core-reviewers`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamSlug(pub String);

impl From<&str> for TeamSlug {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for TeamSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// State of a submitted review, as reported by GitHub (`APPROVED`, `CHANGES_REQUESTED`,
/// `COMMENTED`, ...). The set of states is open-ended, only approvals are significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewState(pub String);

impl ReviewState {
    pub fn is_approval(&self) -> bool {
        self.0.eq_ignore_ascii_case("approved")
    }
}

impl From<&str> for ReviewState {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ReviewState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A single review submitted on a pull request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    /// Login of the review author. `None` if the account no longer exists.
    pub author: Option<String>,
    pub state: ReviewState,
}

impl Review {
    pub fn new(author: &str, state: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            state: state.into(),
        }
    }

    pub fn is_authored_by(&self, login: &str) -> bool {
        self.author.as_deref() == Some(login)
    }
}

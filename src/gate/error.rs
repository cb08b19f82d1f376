use thiserror::Error;

/// Precondition violations detected before any data is fetched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error(
        "This action should only be used on pull requests and pull request reviews! \
         The current event is: {0}"
    )]
    UnsupportedEvent(String),
    #[error("The payload of the {0} event does not contain a pull request")]
    MissingPullRequest(String),
    #[error("No required reviewers team is configured")]
    MissingTeam,
    #[error("Invalid repository name `{0}`, expected `<owner>/<name>`")]
    InvalidRepository(String),
}

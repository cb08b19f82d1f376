use serde::Serialize;

/// A user as returned by the GitHub API (e.g. as a team member or a review author).
#[derive(Clone, Serialize)]
pub(crate) struct GitHubUser {
    login: String,
    id: u64,
    node_id: String,
    avatar_url: String,
    gravatar_id: String,
    url: String,
    html_url: String,
    r#type: String,
    site_admin: bool,
}

impl GitHubUser {
    pub(crate) fn new(login: &str, id: u64) -> Self {
        Self {
            login: login.to_string(),
            id,
            node_id: format!("MDQ6VXNlcj{id}"),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{id}?v=4"),
            gravatar_id: "".to_string(),
            url: format!("https://api.github.com/users/{login}"),
            html_url: format!("https://github.com/{login}"),
            r#type: "User".to_string(),
            site_admin: false,
        }
    }
}

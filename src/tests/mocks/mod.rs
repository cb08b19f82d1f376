use secrecy::SecretString;
use serde::Serialize;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::github::api::PAGE_SIZE;
use crate::github::{create_github_client, GithubClient, GithubRepoName};

use user::GitHubUser;

mod user;

struct Team {
    org: String,
    slug: String,
    members: Vec<String>,
}

struct PullRequestReviews {
    repo: GithubRepoName,
    number: u64,
    reviews: Vec<(Option<String>, String)>,
}

/// Describes the state of the simulated GitHub organization.
#[derive(Default)]
pub struct World {
    teams: Vec<Team>,
    reviews: Vec<PullRequestReviews>,
}

impl World {
    pub fn team(mut self, org: &str, slug: &str, members: &[&str]) -> Self {
        self.teams.push(Team {
            org: org.to_string(),
            slug: slug.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        });
        self
    }

    /// Reviews of a pull request as `(author, state)` pairs, oldest first.
    /// An author of `None` represents a deleted account.
    pub fn reviews(
        mut self,
        repo: GithubRepoName,
        number: u64,
        reviews: &[(Option<&str>, &str)],
    ) -> Self {
        self.reviews.push(PullRequestReviews {
            repo,
            number,
            reviews: reviews
                .iter()
                .map(|(author, state)| (author.map(|a| a.to_string()), state.to_string()))
                .collect(),
        });
        self
    }

    pub async fn build(self) -> GitHubMockServer {
        GitHubMockServer::start(&self).await
    }
}

#[derive(Serialize)]
struct GitHubReview {
    id: u64,
    user: Option<GitHubUser>,
    body: String,
    state: String,
    commit_id: String,
    author_association: String,
}

pub struct GitHubMockServer {
    mock_server: MockServer,
}

impl GitHubMockServer {
    pub async fn start(world: &World) -> Self {
        let mock_server = MockServer::start().await;

        for team in &world.teams {
            mount_team_members(team, &mock_server).await;
        }
        for pr in &world.reviews {
            mount_reviews(pr, &mock_server).await;
        }

        Self { mock_server }
    }

    pub fn client(&self) -> GithubClient {
        let token = SecretString::new("test-token".to_string());
        GithubClient::new(create_github_client(&token, &self.mock_server.uri()).unwrap())
    }
}

async fn mount_team_members(team: &Team, mock_server: &MockServer) {
    let users: Vec<GitHubUser> = team
        .members
        .iter()
        .enumerate()
        .map(|(index, login)| GitHubUser::new(login, 1000 + index as u64))
        .collect();
    let route = format!("/orgs/{}/teams/{}/members", team.org, team.slug);
    mount_paginated(&route, &users, mock_server).await;
}

async fn mount_reviews(pr: &PullRequestReviews, mock_server: &MockServer) {
    let reviews: Vec<GitHubReview> = pr
        .reviews
        .iter()
        .enumerate()
        .map(|(index, (author, state))| GitHubReview {
            id: 5000 + index as u64,
            user: author.as_deref().map(|login| GitHubUser::new(login, 2000 + index as u64)),
            body: "".to_string(),
            state: state.clone(),
            commit_id: "c9abcadf285659684c0975cead8bf982fa84e123".to_string(),
            author_association: "MEMBER".to_string(),
        })
        .collect();
    let route = format!(
        "/repos/{}/{}/pulls/{}/reviews",
        pr.repo.owner(),
        pr.repo.name(),
        pr.number
    );
    mount_paginated(&route, &reviews, mock_server).await;
}

/// Serves `items` at `route` in pages of [`PAGE_SIZE`] items, linked with a `Link` header.
async fn mount_paginated<T: Serialize>(route: &str, items: &[T], mock_server: &MockServer) {
    let mut pages: Vec<&[T]> = items.chunks(PAGE_SIZE as usize).collect();
    if pages.is_empty() {
        pages.push(&[]);
    }

    let page_count = pages.len();
    for (index, page) in pages.into_iter().enumerate() {
        let page_number = index + 1;
        let mut response = ResponseTemplate::new(200).set_body_json(page);
        if page_number < page_count {
            let next = format!(
                "{}{route}?per_page={PAGE_SIZE}&page={}",
                mock_server.uri(),
                page_number + 1
            );
            response = response.insert_header("Link", format!("<{next}>; rel=\"next\""));
        }

        // Follow-up pages take precedence over the first page, which matches any query.
        let mock = if page_number == 1 {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
        } else {
            Mock::given(method("GET"))
                .and(path(route))
                .and(query_param("page", page_number.to_string()))
                .respond_with(response)
                .with_priority(1)
        };
        mock.mount(mock_server).await;
    }
}

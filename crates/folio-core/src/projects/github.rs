//! GitHub repository source

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{GithubRepo, Project};
use crate::constants::http::{CONNECT_TIMEOUT, REQUEST_TIMEOUT, USER_AGENT};
use crate::constants::projects::{GITHUB_API_BASE, PER_PAGE};
use crate::error::{FolioError, Result};

/// Anything that can produce the project listing
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Project>>;
}

/// Lists a user's public repositories, newest first
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GithubClient {
    pub fn new(user: &str) -> Result<Self> {
        Self::with_base(GITHUB_API_BASE, user)
    }

    /// Use a different API root (GitHub Enterprise, tests)
    pub fn with_base(base: &str, user: &str) -> Result<Self> {
        let mut endpoint = Url::parse(base)?;
        endpoint
            .path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["users", user, "repos"]);
        endpoint
            .query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("sort", "created")
            .append_pair("direction", "desc");

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn fetch(&self) -> Result<Vec<Project>> {
        debug!("Fetching: {}", self.endpoint);
        let response = self
            .http
            .get(self.endpoint.clone())
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status {
                status: status.as_u16(),
                endpoint: self.endpoint.to_string(),
            });
        }

        let repos: Vec<GithubRepo> = serde_json::from_slice(&response.bytes().await?)?;
        debug!(count = repos.len(), "Repositories received");
        Ok(repos.into_iter().map(Project::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_shape() {
        let client = GithubClient::new("someone").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.github.com/users/someone/repos?per_page=100&sort=created&direction=desc"
        );
    }

    #[test]
    fn test_custom_base_with_trailing_slash() {
        let client = GithubClient::with_base("http://127.0.0.1:8080/api/v3/", "me").unwrap();
        assert_eq!(client.endpoint().path(), "/api/v3/users/me/repos");
        assert!(GithubClient::with_base("not a url", "me").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let client = GithubClient::with_base("http://127.0.0.1:9", "me").unwrap();
        assert!(client.fetch().await.is_err());
    }
}

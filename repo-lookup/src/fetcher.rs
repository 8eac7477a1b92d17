//! Repository list fetcher
//!
//! [`RepoSource`] is the seam the pipeline fetches through; [`GitHubClient`]
//! is the HTTP implementation against the GitHub REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use repo_lookup::{GitHubClient, RepoSource, Username};
//!
//! let client = GitHubClient::new(&Default::default())?;
//! let repos = client.list_repos(&Username::parse("octocat")?).await?;
//! ```

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::GitHubConfig;
use crate::error::{LookupError, QueryResult};
use crate::models::{RepositoryRecord, Username};

/// Anything that can list a user's repositories
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch the repository list for `username`
    ///
    /// Issues exactly one request; failures are classified, never retried.
    async fn list_repos(&self, username: &Username) -> QueryResult;
}

/// Build `{api_url}/users/{username}/repos`
///
/// The username goes into the path as-is.
pub fn endpoint_url(api_url: &str, username: &Username) -> String {
    format!(
        "{}/users/{}/repos",
        api_url.trim_end_matches('/'),
        username.as_str()
    )
}

/// GitHub REST API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client with the configured user agent and timeout
    pub fn new(config: &GitHubConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Endpoint this client requests for `username`
    pub fn endpoint(&self, username: &Username) -> String {
        endpoint_url(&self.api_url, username)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    #[instrument(skip(self), fields(user = %username))]
    async fn list_repos(&self, username: &Username) -> QueryResult {
        let url = self.endpoint(username);
        debug!(%url, "requesting repository list");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "request failed before a response arrived");
            LookupError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "repository list request rejected");
            return Err(LookupError::UserNotFound {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<RepositoryRecord> = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "repository list did not match the expected shape");
            LookupError::from(e)
        })?;

        debug!(count = records.len(), "decoded repository list");
        Ok(records)
    }
}

mod issue;

pub use issue::{Issue, User};

use crate::config::Config;
use crate::error::ClientError;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument, warn};
use url::Url;

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// The slice of an issue-tracking API that scenario steps rely on.
pub trait IssueApi {
    /// Lists the issues of `user/repo`.
    fn list_issues(&mut self, user: &str, repo: &str) -> Result<Vec<Issue>, ClientError>;

    /// Status code of the most recently completed request, if any.
    fn last_status(&self) -> Option<StatusCode>;
}

/// Anonymous blocking client for the GitHub REST API.
pub struct GitHubClient {
    client: Client,
    api_base: Url,
    last_status: Option<StatusCode>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            last_status: None,
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn issues_url(&self, user: &str, repo: &str) -> Result<Url, ClientError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBase(self.api_base.clone()))?
            .pop_if_empty()
            .extend(["repos", user, repo, "issues"]);
        Ok(url)
    }
}

impl IssueApi for GitHubClient {
    #[instrument(level = "debug", skip(self))]
    fn list_issues(&mut self, user: &str, repo: &str) -> Result<Vec<Issue>, ClientError> {
        if user.is_empty() {
            return Err(ClientError::EmptyIdentifier("user"));
        }
        if repo.is_empty() {
            return Err(ClientError::EmptyIdentifier("repository"));
        }

        let url = self.issues_url(user, repo)?;
        debug!(%url, "listing issues");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()?;

        let status = response.status();
        self.last_status = Some(status);

        if status != StatusCode::OK {
            // Only the status matters to callers unless the listing came back as 200.
            warn!(%status, user, repo, "issue listing did not return 200");
            return Ok(Vec::new());
        }

        let issues: Vec<Issue> = response.json()?;
        debug!(count = issues.len(), "received issues");
        Ok(issues)
    }

    fn last_status(&self) -> Option<StatusCode> {
        self.last_status
    }
}

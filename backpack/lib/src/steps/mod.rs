//! Scenario steps for checking that a repository lists its issues.
//!
//! A [`Session`] lives for exactly one scenario. The runner calls the steps in
//! order: [`Session::mark_anonymous`], [`Session::fetch_issues`], then
//! [`Session::assert_minimum_count`].

use crate::error::StepError;
use crate::github::{Issue, IssueApi};
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

pub const ANONYMOUS_STEP: &str = "I am an anonymous user";
pub const FETCH_STEP: &str = r#"I request a list of issues from user "{user}" for the repository "{repo}""#;
pub const MINIMUM_STEP: &str = "I should get at least {minimum} result";

/// Renders the fetch step line for a concrete user/repository pair.
pub fn fetch_step(user: &str, repo: &str) -> String {
    FETCH_STEP.replace("{user}", user).replace("{repo}", repo)
}

/// Renders the minimum-count step line for a concrete threshold.
pub fn minimum_step(minimum: usize) -> String {
    MINIMUM_STEP.replace("{minimum}", &minimum.to_string())
}

pub struct Session<C> {
    client: C,
    last_results: Option<Vec<Issue>>,
}

impl<C: IssueApi> Session<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            last_results: None,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issues stored by the last successful fetch.
    pub fn last_results(&self) -> Option<&[Issue]> {
        self.last_results.as_deref()
    }

    pub fn result_count(&self) -> Option<usize> {
        self.last_results.as_ref().map(Vec::len)
    }

    /// No credentials are ever configured, so there is nothing to do.
    pub fn mark_anonymous(&self) {
        debug!("running as an anonymous user");
    }

    #[instrument(level = "debug", skip(self))]
    pub fn fetch_issues(&mut self, user: &str, repo: &str) -> Result<(), StepError> {
        let issues = self.client.list_issues(user, repo)?;

        match self.client.last_status() {
            Some(StatusCode::OK) => {
                info!(user, repo, count = issues.len(), "fetched issues");
                self.last_results = Some(issues);
                Ok(())
            }
            Some(status) => Err(StepError::UnexpectedStatus {
                code: status.as_u16(),
            }),
            None => Err(StepError::MissingResponse),
        }
    }

    pub fn assert_minimum_count(&self, expected: usize) -> Result<(), StepError> {
        let actual = self.result_count().ok_or(StepError::NoResultsAvailable)?;
        if actual < expected {
            return Err(StepError::InsufficientResults { expected, actual });
        }
        Ok(())
    }
}

/// Runs the whole scenario and returns how many issues were seen.
pub fn run_scenario<C: IssueApi>(
    session: &mut Session<C>,
    user: &str,
    repo: &str,
    minimum: usize,
) -> Result<usize, StepError> {
    session.mark_anonymous();
    session.fetch_issues(user, repo)?;
    session.assert_minimum_count(minimum)?;
    session.result_count().ok_or(StepError::NoResultsAvailable)
}

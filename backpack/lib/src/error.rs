use thiserror::Error;
use url::Url;

/// Failures raised by the HTTP client before a step can judge the response.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),

    #[error("API base URL '{0}' cannot carry path segments")]
    InvalidBase(Url),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failures of a scenario step. Each one fails the current scenario.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("Expected a 200 status code but got {code} instead!")]
    UnexpectedStatus { code: u16 },

    #[error("Expected at least {expected} result but got back {actual}")]
    InsufficientResults { expected: usize, actual: usize },

    #[error("No issues have been fetched in this scenario")]
    NoResultsAvailable,

    #[error("The client completed a request without reporting a status code")]
    MissingResponse,

    #[error(transparent)]
    Client(#[from] ClientError),
}

//! Error types for repository lookups
//!
//! Every failure a submission can hit maps to exactly one variant, and every
//! variant carries the notification shown to the user.

use thiserror::Error;

use crate::models::RepositoryRecord;

/// Errors that end a single submission
#[derive(Error, Debug)]
pub enum LookupError {
    /// The username was empty after trimming
    #[error("username is empty")]
    EmptyInput,

    /// The API answered with a non-success status
    #[error("GitHub returned status {status}")]
    UserNotFound {
        /// HTTP status code from the API
        status: u16,
    },

    /// No response could be obtained (DNS, connect, timeout, body read)
    #[error("transport failure: {0}")]
    Network(String),

    /// A success response whose body is not a list of repository records
    #[error("malformed repository list: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl LookupError {
    /// Message surfaced to the user for this failure
    pub fn notification(&self) -> &'static str {
        match self {
            LookupError::EmptyInput => "Please enter a GitHub username",
            LookupError::UserNotFound { .. } => "Error: GitHub User Not Found",
            LookupError::Network(_) => "Unable to connect to Github",
            LookupError::MalformedResponse(_) => "Error: Unexpected response from GitHub",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Network(e.to_string())
    }
}

/// Result type alias for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Outcome of one fetch: the record list, or why there is none
pub type QueryResult = LookupResult<Vec<RepositoryRecord>>;

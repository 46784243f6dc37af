//! The search provider seam and its error type.

use async_trait::async_trait;
use candidate_model::Candidate;
use thiserror::Error;

/// Errors that can occur when querying a search provider
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Invalid response from API: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base URL cannot carry a path
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("API token contains characters not allowed in a header")]
    InvalidToken,
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Source of raw candidate records.
///
/// A login that does not exist is a normal outcome (`Ok(None)`), not an
/// error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetch a batch of arbitrary accounts.
    async fn search_random(&self) -> Result<Vec<Candidate>>;

    /// Look up one account by its login.
    async fn search_by_login(&self, login: &str) -> Result<Option<Candidate>>;
}

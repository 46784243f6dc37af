//! GitHub REST client implementing `SearchProvider`.
//!
//! Endpoints used:
//! - `GET /users?since=<n>`: a page of accounts with ids above `n`
//! - `GET /users/<login>`: one account, 404 when the login is unknown
//!
//! Each call is a single attempt; there is no retry and no pagination.

use crate::provider::{Result, SearchError, SearchProvider};
use async_trait::async_trait;
use candidate_model::Candidate;
use rand::Rng;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound of the random `since` offset for random batches.
pub const MAX_RANDOM_SINCE: u64 = 100_000_000;

/// Connection settings for the GitHub API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `https://api.github.com`
    pub api_base: String,
    /// Sent as a bearer token when present
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: None,
            timeout: Duration::from_secs(10),
            user_agent: concat!("candidate-search/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Client for the GitHub user endpoints.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: Url,
}

impl GithubClient {
    /// Build a client from its configuration.
    ///
    /// Fails if the base URL does not parse or the token cannot be sent as
    /// a header.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{}: {}", config.api_base, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(SearchError::InvalidBaseUrl(config.api_base));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| SearchError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        info!("GitHub client ready for {}", api_base);
        Ok(Self { http, api_base })
    }

    /// The base URL requests are sent to.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Fetch the page of accounts whose ids follow `since`.
    pub async fn search_since(&self, since: u64) -> Result<Vec<Candidate>> {
        let mut url = self.endpoint(&["users"])?;
        url.query_pairs_mut().append_pair("since", &since.to_string());

        debug!("Fetching users since {}", since);
        let body = match self.fetch(url).await? {
            Some(body) => body,
            None => {
                return Err(SearchError::Api {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    body: String::new(),
                });
            }
        };

        let candidates: Vec<Candidate> = serde_json::from_str(&body)?;
        info!("Fetched {} candidates (since {})", candidates.len(), since);
        Ok(candidates)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SearchError::InvalidBaseUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url`; `Ok(None)` on 404, the body on success.
    async fn fetch(&self, url: Url) -> Result<Option<String>> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("{} returned 404", url);
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(Some(body))
    }
}

#[async_trait]
impl SearchProvider for GithubClient {
    async fn search_random(&self) -> Result<Vec<Candidate>> {
        let since = rand::rng().random_range(1..=MAX_RANDOM_SINCE);
        self.search_since(since).await
    }

    async fn search_by_login(&self, login: &str) -> Result<Option<Candidate>> {
        let url = self.endpoint(&["users", login])?;

        match self.fetch(url).await? {
            Some(body) => {
                let candidate: Candidate = serde_json::from_str(&body)?;
                info!("Found candidate {} ({})", candidate.login, candidate.id);
                Ok(Some(candidate))
            }
            None => {
                info!("No user found for login {:?}", login);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GithubClient {
        GithubClient::new(ClientConfig {
            api_base: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client("https://api.github.com");
        let url = client.endpoint(&["users", "octocat"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://ghe.example.com/api/v3/");
        let url = client.endpoint(&["users"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users");
    }

    #[test]
    fn test_endpoint_escapes_login() {
        let client = client("https://api.github.com");
        let url = client.endpoint(&["users", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GithubClient::new(ClientConfig {
            api_base: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(SearchError::InvalidBaseUrl(_))));

        let result = GithubClient::new(ClientConfig {
            api_base: "mailto:someone@example.com".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(SearchError::InvalidBaseUrl(_))));
    }
}

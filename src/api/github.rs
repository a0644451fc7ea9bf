//! GitHub repository search over reqwest

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use super::{ApiError, SEARCH_PAGE_SIZE, SearchRepositories, error_from_response};
use crate::model::{Repository, SearchResponse};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for `GET /search/repositories`
#[derive(Clone)]
pub struct GitHubSearch {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl std::fmt::Debug for GitHubSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSearch")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GitHubSearch {
    /// Create a client for the API at `api_base` (e.g. `https://api.github.com`)
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl SearchRepositories for GitHubSearch {
    async fn search(&self, query: &str) -> Result<Vec<Repository>, ApiError> {
        let url = format!("{}/search/repositories", self.api_base);
        let per_page = SEARCH_PAGE_SIZE.to_string();

        let mut request = self
            .client
            .get(&url)
            .query(&[("q", query), ("per_page", per_page.as_str())])
            .header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        debug!(query, results = body.items.len(), "search completed");
        Ok(body.items)
    }
}

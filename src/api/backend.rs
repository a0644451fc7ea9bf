//! Changelog backend client over reqwest
//!
//! Endpoints:
//! - `POST /generate-changelog` with `{ repo, hash, days }`
//! - `GET /changes/{hash}` returning `{ changelog: [...] }`

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{ApiError, FetchChangelog, GenerateChangelog, GenerateRequest, error_from_response};
use crate::model::{Changelog, RepoHash};

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:5000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl GenerateChangelog for BackendClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/generate-changelog"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        debug!(repo = %request.repo, "generation request accepted");
        Ok(())
    }
}

#[async_trait]
impl FetchChangelog for BackendClient {
    async fn fetch(&self, hash: &RepoHash) -> Result<Changelog, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/changes/{}", hash)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let changelog: Changelog = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        debug!(%hash, entries = changelog.changelog.len(), "changelog fetched");
        Ok(changelog)
    }
}

//! External HTTP collaborators
//!
//! The UI reaches the outside world through three capabilities:
//! - [`SearchRepositories`]: GitHub repository search
//! - [`GenerateChangelog`]: ask the backend to build a changelog
//! - [`FetchChangelog`]: read a stored changelog back
//!
//! Real implementations live in [`github`] and [`backend`]; [`mock`] provides
//! in-memory versions for tests.

pub mod backend;
pub mod github;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Changelog, RepoHash, Repository};

pub use backend::BackendClient;
pub use github::GitHubSearch;

/// Number of results requested from the search API
pub const SEARCH_PAGE_SIZE: usize = 10;

/// Errors from the external APIs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The resource does not exist (e.g. no changelog stored yet).
    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited")]
    RateLimited,

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Connection, DNS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Body of `POST /generate-changelog`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    /// Repository full name
    pub repo: String,
    /// Encoded repository name, the backend's storage key
    pub hash: String,
    pub days: u32,
}

impl GenerateRequest {
    pub fn new(full_name: &str, days: u32) -> Self {
        Self {
            repo: full_name.to_string(),
            hash: RepoHash::encode(full_name).as_str().to_string(),
            days,
        }
    }

    pub fn repo_hash(&self) -> RepoHash {
        RepoHash::from_encoded(self.hash.clone())
    }
}

/// Repository search
#[async_trait]
pub trait SearchRepositories: Send + Sync {
    /// Search for repositories matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Repository>, ApiError>;
}

/// Changelog generation on the backend
#[async_trait]
pub trait GenerateChangelog: Send + Sync {
    /// Request generation; any success status is `Ok`, the body is ignored.
    async fn generate(&self, request: &GenerateRequest) -> Result<(), ApiError>;
}

/// Stored changelog lookup on the backend
#[async_trait]
pub trait FetchChangelog: Send + Sync {
    async fn fetch(&self, hash: &RepoHash) -> Result<Changelog, ApiError>;
}

/// The capabilities the application needs, bundled for hand-off to workers
#[derive(Clone)]
pub struct Clients {
    pub search: Arc<dyn SearchRepositories>,
    pub generate: Arc<dyn GenerateChangelog>,
    pub fetch: Arc<dyn FetchChangelog>,
}

impl Clients {
    /// Wire a search client and a backend client that serves both backend capabilities
    pub fn new<S, B>(search: S, backend: B) -> Self
    where
        S: SearchRepositories + 'static,
        B: GenerateChangelog + FetchChangelog + 'static,
    {
        let backend = Arc::new(backend);
        Self {
            search: Arc::new(search),
            generate: backend.clone(),
            fetch: backend,
        }
    }
}

impl std::fmt::Debug for Clients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clients").finish_non_exhaustive()
    }
}

/// Error payload shape shared by GitHub (`message`) and the backend (`error`)
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Map a non-success response to an [`ApiError`]
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    let message = body
        .message
        .or(body.error)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        StatusCode::FORBIDDEN if message.to_lowercase().contains("rate limit") => {
            ApiError::RateLimited
        }
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

//! In-memory API implementations for deterministic testing
//!
//! Both mocks record every call so tests can assert on exactly which
//! requests the UI issued. They are cheap to clone and share state across
//! clones, so a test can keep a handle while the application owns another.
//!
//! ```
//! use changelog_tui::api::mock::MockSearch;
//! use changelog_tui::api::SearchRepositories;
//! use changelog_tui::model::Repository;
//!
//! # tokio_test_block_on(async {
//! let search = MockSearch::new();
//! search.set_results(vec![Repository {
//!     id: 1,
//!     full_name: "tokio-rs/tokio".to_string(),
//!     description: None,
//! }]);
//!
//! let repos = search.search("tokio").await.unwrap();
//! assert_eq!(repos[0].full_name, "tokio-rs/tokio");
//! assert_eq!(search.queries(), vec!["tokio".to_string()]);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{ApiError, FetchChangelog, GenerateChangelog, GenerateRequest, SearchRepositories};
use crate::model::{Changelog, RepoHash, Repository};

/// Mock repository search
#[derive(Debug, Clone, Default)]
pub struct MockSearch {
    inner: Arc<Mutex<MockSearchInner>>,
}

#[derive(Debug, Default)]
struct MockSearchInner {
    results: Vec<Repository>,
    failure: Option<ApiError>,
    queries: Vec<String>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockSearchInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Results returned for every query
    pub fn set_results(&self, results: Vec<Repository>) {
        self.lock().results = results;
    }

    /// Make every subsequent search fail
    pub fn fail_with(&self, error: ApiError) {
        self.lock().failure = Some(error);
    }

    /// Queries received, in order
    pub fn queries(&self) -> Vec<String> {
        self.lock().queries.clone()
    }
}

#[async_trait]
impl SearchRepositories for MockSearch {
    async fn search(&self, query: &str) -> Result<Vec<Repository>, ApiError> {
        let mut inner = self.lock();
        inner.queries.push(query.to_string());
        match &inner.failure {
            Some(err) => Err(err.clone()),
            None => Ok(inner.results.clone()),
        }
    }
}

/// Mock changelog backend
///
/// Successful generation stores nothing by itself; seed stored changelogs
/// with [`MockBackend::store`].
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockBackendInner>>,
}

#[derive(Debug, Default)]
struct MockBackendInner {
    changelogs: HashMap<String, Changelog>,
    generate_failure: Option<ApiError>,
    generate_requests: Vec<GenerateRequest>,
    fetches: Vec<RepoHash>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockBackendInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store a changelog under `hash`
    pub fn store(&self, hash: &RepoHash, changelog: Changelog) {
        self.lock()
            .changelogs
            .insert(hash.as_str().to_string(), changelog);
    }

    /// Make every subsequent generation request fail
    pub fn fail_generate_with(&self, error: ApiError) {
        self.lock().generate_failure = Some(error);
    }

    pub fn generate_requests(&self) -> Vec<GenerateRequest> {
        self.lock().generate_requests.clone()
    }

    pub fn fetches(&self) -> Vec<RepoHash> {
        self.lock().fetches.clone()
    }
}

#[async_trait]
impl GenerateChangelog for MockBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.generate_requests.push(request.clone());
        match &inner.generate_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FetchChangelog for MockBackend {
    async fn fetch(&self, hash: &RepoHash) -> Result<Changelog, ApiError> {
        let mut inner = self.lock();
        inner.fetches.push(hash.clone());
        inner
            .changelogs
            .get(hash.as_str())
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Changelog not found".to_string()))
    }
}

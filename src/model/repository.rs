//! Repository model (GitHub search results)

use serde::Deserialize;

/// A repository as returned by the GitHub search API
///
/// Only the fields the search page displays are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// GitHub's numeric repository id
    pub id: u64,
    /// `owner/name`
    pub full_name: String,
    /// Free-text description (GitHub sends `null` when unset)
    #[serde(default)]
    pub description: Option<String>,
}

impl Repository {
    /// Description text, or `None` when missing or blank
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Body of `GET /search/repositories`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching repositories, best match first (absent means none)
    #[serde(default)]
    pub items: Vec<Repository>,
}

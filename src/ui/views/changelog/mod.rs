//! Changelog View - displays a generated changelog
//!
//! Opened by navigating to `/changes/{hash}`. The view starts in the loading
//! state; App fetches the changelog and hands the result to `set_result`.

mod input;
mod render;


use std::cell::Cell;

use tracing::{error, info};

use crate::api::ApiError;
use crate::model::{Changelog, ChangelogEntry, RepoHash};

/// Actions that ChangelogView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogAction {
    /// No action needed
    None,
    /// Return to the search page
    Back,
    /// Fetch the changelog again
    Reload,
}

/// Changelog View state
#[derive(Debug)]
pub struct ChangelogView {
    /// Route parameter this view was opened with
    pub hash: RepoHash,
    /// Repository name shown in the title
    repository: String,
    loading: bool,
    entries: Vec<ChangelogEntry>,
    /// First rendered line shown
    pub scroll_offset: usize,
    /// Columns available for entry text, updated on every render
    wrap_width: Cell<usize>,
}

/// Wrap width assumed before the first render
const DEFAULT_WRAP_WIDTH: usize = 78;

pub mod empty_text {
    pub const TITLE: &str = "No changelog entries.";
    pub const HINT: &str = "Generate one from the search page (q to go back)";
    pub const LOADING: &str = "Loading changelog...";
}

impl ChangelogView {
    /// Create a view in the loading state
    pub fn new(hash: RepoHash) -> Self {
        // An undecodable identifier still gets a page; the title shows it raw
        let repository = hash.decode().unwrap_or_else(|_| hash.to_string());
        Self {
            hash,
            repository,
            loading: true,
            entries: Vec::new(),
            scroll_offset: 0,
            wrap_width: Cell::new(DEFAULT_WRAP_WIDTH),
        }
    }

    /// Apply the fetch result
    ///
    /// Failures degrade to an empty page; the error only goes to the log.
    pub fn set_result(&mut self, result: Result<Changelog, ApiError>) {
        self.loading = false;
        self.scroll_offset = 0;
        match result {
            Ok(changelog) => {
                if let Some(repository) = changelog.repository.filter(|r| !r.is_empty()) {
                    self.repository = repository;
                }
                info!(
                    repository = %self.repository,
                    entries = changelog.changelog.len(),
                    "changelog loaded"
                );
                self.entries = changelog.changelog;
            }
            Err(e) => {
                error!(hash = %self.hash, "Error fetching changelog: {}", e);
                self.entries.clear();
            }
        }
    }

    /// Return to the loading state before a reload
    pub fn start_reload(&mut self) {
        self.loading = true;
        self.entries.clear();
        self.scroll_offset = 0;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Number of rendered rows at the current wrap width
    ///
    /// Each entry is its wrapped lines plus one separator row.
    pub fn line_count(&self) -> usize {
        let width = self.wrap_width.get();
        self.entries
            .iter()
            .map(|entry| render::build_entry_lines(entry, width).len() + 1)
            .sum()
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.line_count().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.line_count().saturating_sub(1);
    }
}

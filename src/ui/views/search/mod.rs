//! Search View - repository search and changelog generation
//!
//! The entry page. Typing a query (3+ characters) triggers a debounced
//! GitHub search; picking a suggestion selects a repository, after which a
//! changelog can be requested for a day window and the resulting link
//! followed to the changelog page.

mod debounce;
mod input;
mod render;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::api::{ApiError, GenerateRequest};
use crate::model::Repository;

pub use debounce::{Debouncer, SearchQuery};

/// Queries shorter than this never reach the network
pub const MIN_QUERY_LEN: usize = 3;

/// Suggestions shown in the dropdown (the search may return more)
pub const SUGGESTION_LIMIT: usize = 5;

/// Quiet period before a query is sent
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Which field receives typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    Days,
}

/// Actions that SearchView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// No action needed
    None,
    /// Send a generation request to the backend
    Generate(GenerateRequest),
    /// Navigate to a changelog link
    OpenLink(String),
    Quit,
}

/// Search View state
#[derive(Debug)]
pub struct SearchView {
    /// Raw text of the repository field
    pub input: String,
    /// Latest search results (up to the API page size)
    suggestions: Vec<Repository>,
    /// Highlighted suggestion in the dropdown
    pub cursor: usize,
    dropdown_open: bool,
    selected: Option<Repository>,
    default_days: u32,
    /// Day field text; empty until the user edits it
    days_input: String,
    pub focus: Focus,
    generating: bool,
    link: Option<String>,
    /// A search request is in flight
    searching: bool,
    debouncer: Debouncer,
}

impl SearchView {
    pub fn new(default_days: u32) -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            cursor: 0,
            dropdown_open: false,
            selected: None,
            default_days,
            days_input: String::new(),
            focus: Focus::Query,
            generating: false,
            link: None,
            searching: false,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query input and debounced search
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the query text, as typing does
    ///
    /// Any selection (and its link) is dropped; the text itself is kept.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.selected = None;
        self.link = None;
        if self.focus == Focus::Days {
            self.focus = Focus::Query;
        }
        self.on_query_changed(now);
    }

    fn on_query_changed(&mut self, now: Instant) {
        if self.input.chars().count() < MIN_QUERY_LEN {
            self.suggestions.clear();
            self.dropdown_open = false;
            self.cursor = 0;
            self.searching = false;
            self.debouncer.cancel();
        } else {
            self.debouncer.schedule(self.input.clone(), now);
        }
    }

    /// Take the query whose quiet period has elapsed, if any
    pub fn poll_search(&mut self, now: Instant) -> Option<SearchQuery> {
        let query = self.debouncer.fire(now)?;
        self.searching = true;
        Some(query)
    }

    /// Apply a search response; returns false when it was stale and ignored
    pub fn apply_search_results(
        &mut self,
        seq: u64,
        result: Result<Vec<Repository>, ApiError>,
    ) -> bool {
        if !self.debouncer.is_current(seq) {
            debug!(seq, "discarding stale search response");
            return false;
        }
        self.searching = false;
        self.cursor = 0;

        match result {
            Ok(repos) => {
                self.suggestions = repos;
            }
            Err(e) => {
                error!("Error fetching GitHub data: {}", e);
                self.suggestions.clear();
            }
        }
        self.dropdown_open = !self.suggestions.is_empty() && self.selected.is_none();
        true
    }

    /// All results of the last search
    pub fn suggestions(&self) -> &[Repository] {
        &self.suggestions
    }

    /// Results shown in the dropdown
    pub fn visible_suggestions(&self) -> &[Repository] {
        let end = self.suggestions.len().min(SUGGESTION_LIMIT);
        &self.suggestions[..end]
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open && self.selected.is_none() && !self.visible_suggestions().is_empty()
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.visible_suggestions().len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the visible suggestion at `index`
    ///
    /// The query text becomes the repository's full name and the dropdown
    /// closes. No new search is issued for the replaced text.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(repo) = self.visible_suggestions().get(index).cloned() else {
            return false;
        };
        self.input = repo.full_name.clone();
        self.selected = Some(repo);
        self.link = None;
        self.dropdown_open = false;
        self.searching = false;
        self.debouncer.cancel();
        true
    }

    pub fn selected(&self) -> Option<&Repository> {
        self.selected.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Day window
    // ─────────────────────────────────────────────────────────────────────────

    /// Day count sent with a generation request
    ///
    /// Falls back to the default while the field is empty or zero.
    pub fn days(&self) -> u32 {
        match self.days_input.parse::<u32>() {
            Ok(days) if days > 0 => days,
            _ => self.default_days,
        }
    }

    pub fn days_input(&self) -> &str {
        &self.days_input
    }

    pub fn default_days(&self) -> u32 {
        self.default_days
    }

    pub fn push_day_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.days_input.len() < crate::keys::MAX_DAYS_DIGITS {
            self.days_input.push(digit);
        }
    }

    pub fn pop_day_digit(&mut self) {
        self.days_input.pop();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a generation request for the selected repository
    ///
    /// Returns `None` (and logs) when nothing is selected, or while a request
    /// is already running.
    pub fn start_generation(&mut self) -> Option<GenerateRequest> {
        if self.generating {
            debug!("generation already in progress");
            return None;
        }
        let Some(repo) = self.selected.as_ref() else {
            error!("No repository selected");
            return None;
        };

        let request = GenerateRequest::new(&repo.full_name, self.days());
        self.generating = true;
        self.link = None;
        Some(request)
    }

    /// Record the end of a generation request
    ///
    /// The link is only attached if the request's repository is still the
    /// selected one. Returns whether a link was attached.
    pub fn finish_generation(&mut self, request: &GenerateRequest, link: Option<String>) -> bool {
        self.generating = false;
        let still_selected = self
            .selected
            .as_ref()
            .is_some_and(|repo| repo.full_name == request.repo);

        match link {
            Some(link) if still_selected => {
                self.link = Some(link);
                true
            }
            _ => false,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

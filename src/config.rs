//! Command-line and environment configuration
//!
//! Every setting can be passed as a flag or through its environment variable.
//! `Cli::into_settings` validates the raw arguments into [`Settings`].

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::model::RepoHash;
use crate::route::{Route, RouteError};

/// Backend that generates and stores changelogs
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Public GitHub REST API
pub const DEFAULT_SEARCH_API_URL: &str = "https://api.github.com";

/// Host used when building viewer links
pub const DEFAULT_VIEWER_HOST: &str = "localhost";

/// Port used when building viewer links.
///
/// This is the front-end's port, not the backend's: links point at
/// `:3000` while requests go to the backend URL (`:5000` by default).
pub const DEFAULT_VIEWER_PORT: u16 = 3000;

/// Day window used when the day field is never edited
pub const DEFAULT_DAYS: u32 = 3;

const LOG_FILE_NAME: &str = "changelog-tui.log";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid start route: {0}")]
    Route(#[from] RouteError),

    #[error("day count must be at least 1")]
    ZeroDays,

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Changelog Generator - search GitHub repositories and browse generated changelogs
#[derive(Parser, Debug)]
#[command(name = "changelog-tui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open: `/developer`, `/changes/<hash>` or a full viewer link
    #[arg(value_name = "ROUTE")]
    pub route: Option<String>,

    /// Base URL of the changelog backend
    #[arg(long, env = "CHANGELOG_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Base URL of the GitHub REST API used for repository search
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_SEARCH_API_URL)]
    pub search_api_url: String,

    /// Token for the search API (raises GitHub's rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Host name written into viewer links
    #[arg(long, env = "CHANGELOG_VIEWER_HOST", default_value = DEFAULT_VIEWER_HOST)]
    pub viewer_host: String,

    /// Port written into viewer links
    #[arg(long, env = "CHANGELOG_VIEWER_PORT", default_value_t = DEFAULT_VIEWER_PORT)]
    pub viewer_port: u16,

    /// Default day window for generation
    #[arg(long, env = "CHANGELOG_DAYS", default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, env = "CHANGELOG_TUI_LOG")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Validate arguments into settings
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let initial_route = match self.route.as_deref() {
            Some(route) => Route::parse(route)?,
            None => Route::Search,
        };
        if self.days == 0 {
            return Err(ConfigError::ZeroDays);
        }

        Ok(Settings {
            backend_url: validate_url("backend URL", self.backend_url)?,
            search_api_url: validate_url("search API URL", self.search_api_url)?,
            github_token: self.github_token.filter(|t| !t.trim().is_empty()),
            viewer_host: self.viewer_host,
            viewer_port: self.viewer_port,
            default_days: self.days,
            log_file: self
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME)),
            debug: self.debug,
            initial_route,
        })
    }
}

/// Validated runtime settings
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Backend base URL, without trailing slash
    pub backend_url: String,
    /// Search API base URL, without trailing slash
    pub search_api_url: String,
    pub github_token: Option<String>,
    pub viewer_host: String,
    pub viewer_port: u16,
    pub default_days: u32,
    pub log_file: PathBuf,
    pub debug: bool,
    pub initial_route: Route,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("backend_url", &self.backend_url)
            .field("search_api_url", &self.search_api_url)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("viewer_host", &self.viewer_host)
            .field("viewer_port", &self.viewer_port)
            .field("default_days", &self.default_days)
            .field("log_file", &self.log_file)
            .field("debug", &self.debug)
            .field("initial_route", &self.initial_route)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            github_token: None,
            viewer_host: DEFAULT_VIEWER_HOST.to_string(),
            viewer_port: DEFAULT_VIEWER_PORT,
            default_days: DEFAULT_DAYS,
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
            debug: false,
            initial_route: Route::Search,
        }
    }
}

impl Settings {
    /// Link to the viewer page for a changelog
    ///
    /// Built from the viewer host and port, independent of the backend URL.
    pub fn viewer_link(&self, hash: &RepoHash) -> String {
        format!(
            "http://{}:{}{}",
            self.viewer_host,
            self.viewer_port,
            Route::Changelog(hash.clone()).path()
        )
    }
}

fn validate_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { name, value })
    }
}

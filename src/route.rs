//! Routing surface
//!
//! Two pages are reachable:
//! - `/developer`: repository search and changelog generation
//! - `/changes/{hash}`: changelog viewer for an encoded repository name
//!
//! Routes can be given as a bare path or as a full `http(s)://host[:port]/...`
//! link, which is how the search page hands a generated changelog to the viewer.

use std::fmt;

use thiserror::Error;

use crate::model::RepoHash;

/// Path of the search page
pub const SEARCH_PATH: &str = "/developer";

/// Path prefix of the changelog viewer
pub const CHANGES_PREFIX: &str = "/changes/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),

    #[error("changelog route is missing the repository identifier")]
    MissingIdentifier,
}

/// A page of the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Search,
    Changelog(RepoHash),
}

impl Route {
    /// Parse a path or a full link
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let path = strip_origin(input.trim());
        // Query and fragment carry nothing for either page
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == "/" || path.trim_end_matches('/') == SEARCH_PATH {
            return Ok(Route::Search);
        }

        if let Some(hash) = path.strip_prefix(CHANGES_PREFIX) {
            // Standard base64 may contain '/', so the identifier is the whole remainder
            if hash.is_empty() {
                return Err(RouteError::MissingIdentifier);
            }
            return Ok(Route::Changelog(RepoHash::from_encoded(hash)));
        }

        if path.trim_end_matches('/') == CHANGES_PREFIX.trim_end_matches('/') {
            return Err(RouteError::MissingIdentifier);
        }

        Err(RouteError::Unknown(path.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Search => SEARCH_PATH.to_string(),
            Route::Changelog(hash) => format!("{}{}", CHANGES_PREFIX, hash),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Drop `scheme://authority` from a link, leaving the path
fn strip_origin(input: &str) -> &str {
    let Some((_, rest)) = input.split_once("://") else {
        return input;
    };
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "",
    }
}

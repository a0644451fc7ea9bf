//! Data models for the changelog front-end
//!
//! UI-independent data structures: repositories returned by the search API,
//! changelog entries returned by the backend, and the encoded identifier
//! that links the two.

mod changelog;
mod notification;
mod repo_hash;
mod repository;

pub use changelog::{Changelog, ChangelogEntry, ContentLine, HEADING_MARKER, render_content};
pub use notification::{Notification, NotificationKind};
pub use repo_hash::{HashError, RepoHash};
pub use repository::{Repository, SearchResponse};

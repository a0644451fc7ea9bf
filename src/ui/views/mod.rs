//! View components
//!
//! - `search`: repository search and changelog generation (`/developer`)
//! - `changelog`: generated changelog viewer (`/changes/{hash}`)

mod changelog;
mod search;

pub use changelog::{ChangelogAction, ChangelogView};
pub use search::{
    Debouncer, Focus, MIN_QUERY_LEN, SEARCH_DEBOUNCE, SUGGESTION_LIMIT, SearchAction, SearchQuery,
    SearchView,
};

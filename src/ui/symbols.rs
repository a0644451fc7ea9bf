//! UI symbols (markers, separators, etc.)

/// Marker in front of the highlighted suggestion
pub const CURSOR: &str = "> ";
/// Padding in front of other suggestions
pub const NO_CURSOR: &str = "  ";

/// Shown in the search field title while a request is in flight
pub const SEARCHING: &str = "searching…";

/// Repeated to draw the line between changelog entries
pub const SEPARATOR: &str = "─";

/// Indentation before a changelog bullet
pub const BULLET_INDENT: &str = "  ";

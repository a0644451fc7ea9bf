//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Border of the focused input field
pub const FOCUSED_BORDER: Color = Color::Cyan;
/// Border of other input fields
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;

/// Colors for Search View
pub mod search_view {
    use super::*;

    /// "searching…" indicator
    pub const SEARCHING: Color = Color::Yellow;
    /// Placeholder and default values
    pub const PLACEHOLDER: Color = Color::DarkGray;
    /// Highlighted suggestion
    pub const CURSOR: Color = Color::Cyan;
    pub const REPO_NAME: Color = Color::White;
    pub const DESCRIPTION: Color = Color::Gray;
    /// Button while a request runs
    pub const GENERATING: Color = Color::DarkGray;
    pub const GENERATE: Color = Color::Green;
    /// Repository name badge on the card
    pub const BADGE_FG: Color = Color::Black;
    pub const BADGE_BG: Color = Color::Cyan;
    /// Day field background while editing
    pub const FIELD_FOCUS_BG: Color = Color::DarkGray;
    pub const LINK: Color = Color::Blue;
}

/// Colors for Changelog View
pub mod changelog_view {
    use super::*;

    /// Date badge
    pub const DATE_FG: Color = Color::Black;
    pub const DATE_BG: Color = Color::Yellow;
    pub const TITLE: Color = Color::White;
    pub const HEADING: Color = Color::Cyan;
    pub const BULLET: Color = Color::Reset;
    pub const SEPARATOR: Color = Color::DarkGray;
}

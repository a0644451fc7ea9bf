//! Changelog model (backend payload) and content rendering rule

use serde::Deserialize;

/// Prefix marking a sub-heading line in entry content
pub const HEADING_MARKER: &str = "##";

/// Glyph substituted for the first hyphen of a bullet line
pub const BULLET_GLYPH: &str = "•";

/// Body of `GET /changes/{hash}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Changelog {
    /// Repository full name, when the backend includes it
    #[serde(default)]
    pub repository: Option<String>,
    /// Entries in the order the backend returned them (newest first)
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

/// One dated changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangelogEntry {
    pub date: String,
    pub title: String,
    pub content: String,
}

impl ChangelogEntry {
    /// Rendered content lines
    pub fn lines(&self) -> Vec<ContentLine> {
        render_content(&self.content)
    }
}

/// A single rendered line of entry content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    /// Sub-heading, marker removed and trimmed
    Heading(String),
    /// Bullet item, first `-` replaced by the bullet glyph
    Bullet(String),
}

impl ContentLine {
    pub fn text(&self) -> &str {
        match self {
            ContentLine::Heading(text) | ContentLine::Bullet(text) => text,
        }
    }
}

/// Split entry content into heading and bullet lines
///
/// Only the first marker / first hyphen of a line is touched, so
/// `"- a-b"` becomes `"• a-b"`.
pub fn render_content(content: &str) -> Vec<ContentLine> {
    content
        .split('\n')
        .map(|line| {
            if line.starts_with(HEADING_MARKER) {
                ContentLine::Heading(line.replacen(HEADING_MARKER, "", 1).trim().to_string())
            } else {
                ContentLine::Bullet(line.replacen('-', BULLET_GLYPH, 1))
            }
        })
        .collect()
}

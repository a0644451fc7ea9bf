//! Rendering for ChangelogView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{ChangelogEntry, ContentLine, Notification};
use crate::ui::{components, symbols, theme};

use super::{ChangelogView, empty_text};

impl ChangelogView {
    /// Render the view with optional notification in title bar
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(format!(" Changelog: {} ", self.repository()))
            .bold()
            .cyan()
            .centered();
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        // Loading indicator is shown on its own
        if self.is_loading() {
            let paragraph = components::loading_state(empty_text::LOADING).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        if self.entries().is_empty() {
            let paragraph =
                components::empty_state(empty_text::TITLE, Some(empty_text::HINT)).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        self.wrap_width.set(inner_width);
        let paragraph = Paragraph::new(self.build_lines(inner_width))
            .block(block)
            .scroll((self.scroll_offset.min(u16::MAX as usize) as u16, 0));
        frame.render_widget(paragraph, area);
    }

    /// All entry rows wrapped to `width`, each entry followed by a separator
    pub fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in self.entries() {
            lines.extend(build_entry_lines(entry, width));
            lines.push(
                Line::from(symbols::SEPARATOR.repeat(width)).fg(theme::changelog_view::SEPARATOR),
            );
        }
        lines
    }
}

/// Rows for one entry: date badge, title, then content, wrapped to `width`
pub fn build_entry_lines(entry: &ChangelogEntry, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {} ", entry.date),
        Style::default()
            .fg(theme::changelog_view::DATE_FG)
            .bg(theme::changelog_view::DATE_BG),
    ))];

    let title_style = Style::default()
        .fg(theme::changelog_view::TITLE)
        .add_modifier(Modifier::BOLD);
    lines.extend(
        wrap_text(&entry.title, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, title_style))),
    );

    let heading_style = Style::default()
        .fg(theme::changelog_view::HEADING)
        .add_modifier(Modifier::BOLD);
    let bullet_style = Style::default().fg(theme::changelog_view::BULLET);
    let bullet_width = width.saturating_sub(text_width(symbols::BULLET_INDENT));

    for line in entry.lines() {
        match line {
            ContentLine::Heading(text) => lines.extend(
                wrap_text(&text, width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, heading_style))),
            ),
            ContentLine::Bullet(text) => {
                lines.extend(wrap_text(&text, bullet_width).into_iter().map(|row| {
                    Line::from(vec![
                        Span::raw(symbols::BULLET_INDENT),
                        Span::styled(row, bullet_style),
                    ])
                }))
            }
        }
    }

    lines
}

fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Greedy word wrap to `width` columns
///
/// Breaks at spaces; a word wider than a whole row is split between
/// characters. Always returns at least one row.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    let mut started = false;

    for word in text.split(' ') {
        let word_width = text_width(word);

        if started && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }
        if started {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        started = true;

        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            continue;
        }

        let mut buf = [0u8; 4];
        for c in word.chars() {
            let char_width = text_width(c.encode_utf8(&mut buf));
            if row_width + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }
    }

    rows.push(row);
    rows
}

//! Rendering for SearchView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::Notification;
use crate::ui::{APP_TITLE, components, symbols, theme};

use super::{Focus, SearchView};

pub mod text {
    pub const HEADING: &str = "Search GitHub Repositories";
    pub const PLACEHOLDER: &str = "Enter repository name";
    pub const NO_DESCRIPTION: &str = "No description";
    pub const NO_DESCRIPTION_AVAILABLE: &str = "No description available";
    pub const GENERATE: &str = "[ Generate Changelog ]";
    pub const GENERATING: &str = "[ Changelog Generating... ]";
    pub const DAYS_LABEL: &str = "Days: ";
    pub const DAYS_UNIT: &str = " (days)";
}

/// Height of the selected-repository card, borders included
const CARD_HEIGHT: u16 = 9;

impl SearchView {
    /// Render the view with optional notification in title bar
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(format!(" {} ", APP_TITLE)).bold().cyan().centered();
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dropdown_height = if self.is_dropdown_open() {
            self.visible_suggestions().len() as u16 * 2 + 2
        } else {
            0
        };
        let card_height = if self.selected().is_some() {
            CARD_HEIGHT
        } else {
            0
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(dropdown_height),
            Constraint::Length(card_height),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(text::HEADING).bold().centered()),
            chunks[0],
        );
        self.render_input(frame, chunks[1]);
        if dropdown_height > 0 {
            self.render_dropdown(frame, chunks[2]);
        }
        if card_height > 0 {
            self.render_card(frame, chunks[3]);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Query;
        let mut block = components::focused_block(Line::from(" Repository "), focused);
        if self.is_searching() {
            block = block.title(
                Line::from(format!(" {} ", symbols::SEARCHING))
                    .fg(theme::search_view::SEARCHING)
                    .right_aligned(),
            );
        }

        // One column is kept free for the cursor
        let field_width = area.width.saturating_sub(3) as usize;
        let visible = input_tail(&self.input, field_width);
        let content = if self.input.is_empty() {
            Line::from(text::PLACEHOLDER).fg(theme::search_view::PLACEHOLDER)
        } else {
            Line::from(visible.to_string())
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused && area.width > 2 && area.height > 2 {
            let offset = Span::raw(visible).width() as u16;
            frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
        }
    }

    fn render_dropdown(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" Suggestions ").dark_gray());

        let mut lines = Vec::new();
        for (i, repo) in self.visible_suggestions().iter().enumerate() {
            let is_cursor = i == self.cursor;
            let marker = if is_cursor {
                symbols::CURSOR
            } else {
                symbols::NO_CURSOR
            };
            let name_style = if is_cursor {
                Style::default()
                    .fg(theme::search_view::CURSOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::search_view::REPO_NAME)
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(repo.full_name.clone(), name_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw(symbols::NO_CURSOR),
                Span::styled(
                    repo.description_text()
                        .unwrap_or(text::NO_DESCRIPTION)
                        .to_string(),
                    Style::default().fg(theme::search_view::DESCRIPTION),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) {
        let Some(repo) = self.selected() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" Selected Repository ").bold());

        let button = if self.is_generating() {
            Line::from(text::GENERATING)
                .fg(theme::search_view::GENERATING)
                .centered()
        } else {
            Line::from(text::GENERATE)
                .fg(theme::search_view::GENERATE)
                .bold()
                .centered()
        };

        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", repo.full_name),
                Style::default()
                    .fg(theme::search_view::BADGE_FG)
                    .bg(theme::search_view::BADGE_BG),
            ))
            .centered(),
            Line::from(
                repo.description_text()
                    .unwrap_or(text::NO_DESCRIPTION_AVAILABLE)
                    .to_string(),
            )
            .fg(theme::search_view::DESCRIPTION)
            .centered(),
            Line::from(""),
            button,
            self.build_days_line(),
            Line::from(""),
            self.build_link_line(&repo.full_name),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_days_line(&self) -> Line<'static> {
        let editing = self.focus == Focus::Days;
        let (value, value_style) = if self.days_input().is_empty() {
            (
                self.default_days().to_string(),
                Style::default().fg(theme::search_view::PLACEHOLDER),
            )
        } else {
            (self.days_input().to_string(), Style::default())
        };
        let value_style = if editing {
            value_style.bg(theme::search_view::FIELD_FOCUS_BG)
        } else {
            value_style
        };

        Line::from(vec![
            Span::raw(text::DAYS_LABEL),
            Span::raw("["),
            Span::styled(format!("{:>4}", value), value_style),
            Span::raw("]"),
            Span::raw(text::DAYS_UNIT),
        ])
        .centered()
    }

    fn build_link_line(&self, full_name: &str) -> Line<'static> {
        match self.link() {
            Some(link) => Line::from(vec![
                Span::raw(format!("View Changelog for {}: ", full_name)),
                Span::styled(
                    link.to_string(),
                    Style::default()
                        .fg(theme::search_view::LINK)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ])
            .centered(),
            None => Line::from(""),
        }
    }
}

/// Longest suffix of `input` that fits in `width` columns
pub(crate) fn input_tail(input: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = input.len();
    for (idx, c) in input.char_indices().rev() {
        let mut buf = [0u8; 4];
        let char_width = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if used + char_width > width {
            break;
        }
        used += char_width;
        start = idx;
    }
    &input[start..]
}

//! Rendering logic for the application

use ratatui::{Frame, layout::Rect};

use super::state::App;
use crate::keys::{self, KeyHint, SearchHintContext};
use crate::route::Route;
use crate::ui::views::Focus;
use crate::ui::widgets::render_status_bar;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        // Last line is the status bar
        let main = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        match (&self.route, &self.changelog_view) {
            (Route::Changelog(_), Some(view)) => view.render(frame, main, notification),
            _ => self.search_view.render(frame, main, notification),
        }

        render_status_bar(frame, &self.current_hints());
    }

    /// Key hints for the current page
    pub fn current_hints(&self) -> Vec<KeyHint> {
        match self.route {
            Route::Search => keys::search_hints(&SearchHintContext {
                dropdown_open: self.search_view.is_dropdown_open(),
                has_selection: self.search_view.selected().is_some(),
                editing_days: self.search_view.focus == Focus::Days,
                has_link: self.search_view.link().is_some(),
            }),
            Route::Changelog(_) => keys::CHANGELOG_VIEW_HINTS.to_vec(),
        }
    }
}

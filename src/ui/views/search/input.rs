//! Input handling for SearchView

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::keys;

use super::{Focus, SearchAction, SearchView};

impl SearchView {
    /// Handle key event and return action
    ///
    /// `now` drives the search debounce.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> SearchAction {
        if keys::is_open_link_key(&key) {
            return match self.link() {
                Some(link) => SearchAction::OpenLink(link.to_string()),
                None => SearchAction::None,
            };
        }

        match key.code {
            keys::NEXT_FIELD | keys::PREV_FIELD => {
                self.toggle_focus();
                return SearchAction::None;
            }
            keys::ESC => return self.handle_escape(now),
            _ => {}
        }

        match self.focus {
            Focus::Query => self.handle_query_key(key, now),
            Focus::Days => self.handle_days_key(key),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Query if self.selected().is_some() => Focus::Days,
            _ => Focus::Query,
        };
    }

    /// Esc backs out one step: dropdown, day field, query text, then the app
    fn handle_escape(&mut self, now: Instant) -> SearchAction {
        if self.is_dropdown_open() {
            self.close_dropdown();
            SearchAction::None
        } else if self.focus == Focus::Days {
            self.focus = Focus::Query;
            SearchAction::None
        } else if !self.input.is_empty() {
            self.set_input(String::new(), now);
            SearchAction::None
        } else {
            SearchAction::Quit
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent, now: Instant) -> SearchAction {
        match key.code {
            keys::SUGGESTION_DOWN if self.is_dropdown_open() => {
                self.move_cursor_down();
                SearchAction::None
            }
            keys::SUGGESTION_UP if self.is_dropdown_open() => {
                self.move_cursor_up();
                SearchAction::None
            }
            keys::SUBMIT if self.is_dropdown_open() => {
                self.select(self.cursor);
                SearchAction::None
            }
            keys::SUBMIT => self.generate_action(),
            keys::DELETE_CHAR => {
                if !self.input.is_empty() {
                    let mut text = self.input.clone();
                    text.pop();
                    self.set_input(text, now);
                }
                SearchAction::None
            }
            _ => {
                if let Some(c) = keys::is_text_input(&key) {
                    let mut text = self.input.clone();
                    text.push(c);
                    self.set_input(text, now);
                }
                SearchAction::None
            }
        }
    }

    fn handle_days_key(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            keys::SUBMIT => self.generate_action(),
            keys::DELETE_CHAR => {
                self.pop_day_digit();
                SearchAction::None
            }
            _ => {
                if let Some(c) = keys::is_text_input(&key) {
                    self.push_day_digit(c);
                }
                SearchAction::None
            }
        }
    }

    fn generate_action(&mut self) -> SearchAction {
        match self.start_generation() {
            Some(request) => SearchAction::Generate(request),
            None => SearchAction::None,
        }
    }
}

//! Input handling for the application

use std::time::Instant;

use crossterm::event::KeyEvent;
use tracing::{error, info};

use super::state::App;
use super::worker::Request;
use crate::keys;
use crate::model::Notification;
use crate::route::Route;
use crate::ui::views::{ChangelogAction, SearchAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        self.on_key_event_at(key, Instant::now());
    }

    /// Handle a key event that happened at `now`
    pub fn on_key_event_at(&mut self, key: KeyEvent, now: Instant) {
        // Handle Ctrl+C globally
        if keys::is_quit_key(&key) {
            self.quit();
            return;
        }

        if matches!(self.route, Route::Search) {
            let action = self.search_view.handle_key(key, now);
            self.handle_search_action(action);
        } else if let Some(view) = self.changelog_view.as_mut() {
            let action = view.handle_key(key);
            self.handle_changelog_action(action);
        }
    }

    fn handle_search_action(&mut self, action: SearchAction) {
        match action {
            SearchAction::None => {}
            SearchAction::Generate(request) => {
                info!(repo = %request.repo, days = request.days, "requesting changelog");
                self.worker.dispatch(Request::Generate(request));
            }
            SearchAction::OpenLink(link) => match Route::parse(&link) {
                Ok(route) => self.navigate(route),
                Err(e) => error!(%link, "cannot open link: {}", e),
            },
            SearchAction::Quit => self.quit(),
        }
    }

    fn handle_changelog_action(&mut self, action: ChangelogAction) {
        match action {
            ChangelogAction::None => {}
            ChangelogAction::Back => self.go_back(),
            ChangelogAction::Reload => self.reload_changelog(),
        }
    }

    fn reload_changelog(&mut self) {
        let Some(view) = self.changelog_view.as_mut() else {
            return;
        };
        view.start_reload();
        let hash = view.hash.clone();
        self.worker.dispatch(Request::FetchChangelog(hash));
        self.notification = Some(Notification::info("Reloading changelog"));
    }
}

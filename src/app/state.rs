//! Application state and page navigation

use std::sync::mpsc::Receiver;
use std::time::Instant;

use tracing::info;

use crate::config::Settings;
use crate::model::Notification;
use crate::route::Route;
use crate::ui::views::{ChangelogView, SearchView};

use super::worker::{Request, Response, Worker};

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current page
    pub route: Route,
    /// Search page state (kept while the changelog page is open)
    pub search_view: SearchView,
    /// Changelog page state (created on navigation)
    pub changelog_view: Option<ChangelogView>,
    /// Notification to display (success/info messages)
    pub notification: Option<Notification>,
    pub settings: Settings,
    pub(crate) worker: Worker,
    pub(crate) responses: Receiver<Response>,
}

impl App {
    /// Construct a new instance of [`App`] opened at `settings.initial_route`
    pub fn new(settings: Settings, worker: Worker, responses: Receiver<Response>) -> Self {
        let initial_route = settings.initial_route.clone();
        let mut app = Self {
            running: true,
            route: Route::Search,
            search_view: SearchView::new(settings.default_days),
            changelog_view: None,
            notification: None,
            settings,
            worker,
            responses,
        };
        app.navigate(initial_route);
        app
    }

    /// Switch to `route`
    ///
    /// Opening a changelog page always starts a fresh fetch.
    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "navigate");
        match &route {
            Route::Search => {
                self.changelog_view = None;
            }
            Route::Changelog(hash) => {
                self.changelog_view = Some(ChangelogView::new(hash.clone()));
                self.worker.dispatch(Request::FetchChangelog(hash.clone()));
            }
        }
        self.route = route;
    }

    /// Return to the search page
    pub fn go_back(&mut self) {
        self.navigate(Route::Search);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Idle processing: fire due searches, apply responses, expire notifications
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(query) = self.search_view.poll_search(now) {
            self.worker.dispatch(Request::Search {
                seq: query.seq,
                query: query.query,
            });
        }

        self.process_responses();

        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }
}

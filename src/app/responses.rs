//! Applying finished requests to page state

use tracing::{debug, error, info};

use crate::api::{ApiError, GenerateRequest};
use crate::model::{Changelog, Notification, RepoHash};

use super::state::App;
use super::worker::Response;

impl App {
    /// Apply every response that has arrived; returns how many were applied
    pub fn process_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(response) = self.responses.try_recv() {
            self.apply_response(response);
            applied += 1;
        }
        applied
    }

    pub(crate) fn apply_response(&mut self, response: Response) {
        match response {
            Response::Search { seq, result } => {
                self.search_view.apply_search_results(seq, result);
            }
            Response::Generate { request, result } => self.on_generate_finished(request, result),
            Response::Changelog { hash, result } => self.on_changelog_fetched(hash, result),
        }
    }

    fn on_generate_finished(&mut self, request: GenerateRequest, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                let link = self.settings.viewer_link(&request.repo_hash());
                info!(repo = %request.repo, days = request.days, %link, "changelog generated");
                if self.search_view.finish_generation(&request, Some(link)) {
                    self.notification = Some(Notification::success(format!(
                        "Changelog ready for {}",
                        request.repo
                    )));
                } else {
                    debug!(repo = %request.repo, "selection changed; link not shown");
                }
            }
            Err(e) => {
                error!(repo = %request.repo, "Error generating changelog: {}", e);
                self.search_view.finish_generation(&request, None);
            }
        }
    }

    fn on_changelog_fetched(&mut self, hash: RepoHash, result: Result<Changelog, ApiError>) {
        match self.changelog_view.as_mut() {
            Some(view) if view.hash == hash && view.is_loading() => view.set_result(result),
            _ => debug!(%hash, "discarding changelog response for inactive page"),
        }
    }
}

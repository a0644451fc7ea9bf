//! Whole-screen rendering through App (page plus status bar)

use std::time::{Duration, Instant};

use ratatui::{Terminal, backend::TestBackend};

use changelog_tui::api::Clients;
use changelog_tui::api::mock::{MockBackend, MockSearch};
use changelog_tui::app::{App, Worker};
use changelog_tui::config::Settings;
use changelog_tui::model::RepoHash;
use changelog_tui::route::Route;

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_app_search_page_with_status_bar() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (worker, rx) = Worker::new(
        runtime.handle().clone(),
        Clients::new(MockSearch::new(), MockBackend::new()),
    );
    let app = App::new(Settings::default(), worker, rx);

    let screen = draw(&app);
    assert!(screen.contains("Search GitHub Repositories"));
    assert!(screen.contains("[^C] Quit"));
}

#[test]
fn test_app_changelog_page_with_status_bar() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (worker, rx) = Worker::new(
        runtime.handle().clone(),
        Clients::new(MockSearch::new(), MockBackend::new()),
    );
    let mut app = App::new(
        Settings {
            initial_route: Route::Changelog(RepoHash::encode("a/b")),
            ..Settings::default()
        },
        worker,
        rx,
    );
    for _ in 0..200 {
        app.on_tick(Instant::now());
        if app.changelog_view.as_ref().is_some_and(|v| !v.is_loading()) {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let screen = draw(&app);
    assert!(screen.contains("Changelog: a/b"));
    assert!(screen.contains("No changelog entries."));
    assert!(screen.contains("[q] Back"));
    assert!(screen.contains("[^L] Reload"));
}

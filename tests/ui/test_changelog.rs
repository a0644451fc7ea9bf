//! Rendering tests for the changelog page

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use changelog_tui::api::ApiError;
use changelog_tui::model::{Changelog, ChangelogEntry, RepoHash};
use changelog_tui::ui::views::ChangelogView;

fn draw(view: &ChangelogView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    terminal.backend().to_string()
}

fn entry(date: &str, title: &str, content: &str) -> ChangelogEntry {
    ChangelogEntry {
        date: date.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn test_loading_state() {
    let view = ChangelogView::new(RepoHash::encode("octocat/Hello-World"));
    let screen = draw(&view);
    assert!(screen.contains("Changelog: octocat/Hello-World"));
    assert!(screen.contains("Loading changelog..."));
}

#[test]
fn test_entries_rendered() {
    let mut view = ChangelogView::new(RepoHash::encode("octocat/Hello-World"));
    view.set_result(Ok(Changelog {
        repository: Some("octocat/Hello-World".to_string()),
        changelog: vec![
            entry("2025-01-16", "Faster builds", "## Performance\n- cache deps"),
            entry("2025-01-15", "Docs", "- fix typo"),
        ],
    }));
    let screen = draw(&view);

    assert!(screen.contains("2025-01-16"));
    assert!(screen.contains("Faster builds"));
    assert!(screen.contains("Performance"));
    assert!(!screen.contains("##"));
    assert!(screen.contains("• cache deps"));
    assert!(screen.contains("2025-01-15"));
    assert!(screen.contains("• fix typo"));
}

#[test]
fn test_empty_changelog_renders_no_entries() {
    let mut view = ChangelogView::new(RepoHash::encode("a/b"));
    view.set_result(Ok(Changelog {
        repository: None,
        changelog: vec![],
    }));
    let screen = draw(&view);
    assert!(screen.contains("No changelog entries."));
    assert!(!screen.contains("•"));
}

#[test]
fn test_fetch_failure_renders_empty_page() {
    let mut view = ChangelogView::new(RepoHash::encode("a/b"));
    view.set_result(Err(ApiError::NotFound("Changelog not found".to_string())));
    let screen = draw(&view);
    assert!(screen.contains("Changelog: a/b"));
    assert!(screen.contains("No changelog entries."));
    assert!(!screen.contains("Changelog not found"));
}

#[test]
fn test_scrolled_view_hides_first_entry() {
    let mut view = ChangelogView::new(RepoHash::encode("a/b"));
    view.set_result(Ok(Changelog {
        repository: None,
        changelog: vec![
            entry("2025-01-16", "First", "- one"),
            entry("2025-01-15", "Second", "- two"),
        ],
    }));
    // date, title, bullet, separator
    view.scroll_down(4);
    let screen = draw(&view);
    assert!(!screen.contains("First"));
    assert!(screen.contains("Second"));
}

#[test]
fn test_long_bullet_wraps_inside_page() {
    let mut view = ChangelogView::new(RepoHash::encode("a/b"));
    view.set_result(Ok(Changelog {
        repository: None,
        changelog: vec![entry(
            "2025-01-16",
            "Release",
            "- Reworked the connection pool so idle sockets are reclaimed before the limit TAILWORD",
        )],
    }));

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let screen = terminal.backend().to_string();

    assert!(screen.contains("• Reworked the connection pool"));
    assert!(screen.contains("TAILWORD"));
}

#[test]
fn test_loaded_changelog_snapshot() {
    let mut view = ChangelogView::new(RepoHash::encode("a/b"));
    view.set_result(Ok(Changelog {
        repository: None,
        changelog: vec![entry(
            "2025-01-16",
            "Faster builds",
            "## Performance\n- cache deps",
        )],
    }));

    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌─────────── Changelog: a/b ───────────┐"
    "│ 2025-01-16                           │"
    "│Faster builds                         │"
    "│Performance                           │"
    "│  • cache deps                        │"
    "│──────────────────────────────────────│"
    "│                                      │"
    "│                                      │"
    "│                                      │"
    "└──────────────────────────────────────┘"
    "#);
}

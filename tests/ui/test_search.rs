//! Rendering tests for the search page

use std::time::Instant;

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use changelog_tui::model::{Notification, Repository};
use changelog_tui::ui::views::{SEARCH_DEBOUNCE, SearchView};

fn repo(id: u64, full_name: &str, description: Option<&str>) -> Repository {
    Repository {
        id,
        full_name: full_name.to_string(),
        description: description.map(String::from),
    }
}

fn draw(view: &SearchView, notification: Option<&Notification>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), notification))
        .unwrap();
    terminal.backend().to_string()
}

/// View with `results` delivered for the query "hello"
fn view_with_results(results: Vec<Repository>) -> SearchView {
    let mut view = SearchView::new(3);
    let now = Instant::now();
    view.set_input("hello", now);
    let query = view.poll_search(now + SEARCH_DEBOUNCE).unwrap();
    view.apply_search_results(query.seq, Ok(results));
    view
}

#[test]
fn test_search_page_empty() {
    let screen = draw(&SearchView::new(3), None);
    assert!(screen.contains("Changelog Generator"));
    assert!(screen.contains("Search GitHub Repositories"));
    assert!(screen.contains("Enter repository name"));
    assert!(!screen.contains("Suggestions"));
}

#[test]
fn test_search_page_dropdown() {
    let view = view_with_results(vec![
        repo(1, "octocat/Hello-World", Some("My first repository")),
        repo(2, "octocat/hello-rust", None),
    ]);
    let screen = draw(&view, None);
    assert!(screen.contains("Suggestions"));
    assert!(screen.contains("> octocat/Hello-World"));
    assert!(screen.contains("My first repository"));
    assert!(screen.contains("octocat/hello-rust"));
    assert!(screen.contains("No description"));
}

#[test]
fn test_search_page_dropdown_shows_at_most_five() {
    let results = (0..8)
        .map(|i| repo(i, &format!("owner/repo-{}", i), None))
        .collect();
    let screen = draw(&view_with_results(results), None);
    assert!(screen.contains("owner/repo-4"));
    assert!(!screen.contains("owner/repo-5"));
}

#[test]
fn test_selected_repository_card() {
    let mut view = view_with_results(vec![repo(1, "octocat/Hello-World", None)]);
    assert!(view.select(0));
    let screen = draw(&view, None);
    assert!(screen.contains("Selected Repository"));
    assert!(screen.contains("No description available"));
    assert!(screen.contains("[ Generate Changelog ]"));
    assert!(screen.contains("Days: ["));
    assert!(!screen.contains("Suggestions"));
}

#[test]
fn test_generating_button_and_link() {
    let mut view = view_with_results(vec![repo(1, "octocat/Hello-World", None)]);
    view.select(0);
    let request = view.start_generation().unwrap();
    assert!(draw(&view, None).contains("[ Changelog Generating... ]"));

    view.finish_generation(&request, Some("http://localhost:3000/changes/x".to_string()));
    let screen = draw(&view, None);
    assert!(screen.contains("[ Generate Changelog ]"));
    assert!(screen.contains("View Changelog for octocat/Hello-World: http://localhost:3000/changes/x"));
}

#[test]
fn test_notification_in_title() {
    let notification = Notification::success("Changelog ready for octocat/Hello-World");
    let screen = draw(&SearchView::new(3), Some(&notification));
    assert!(screen.contains("Done:"));
    assert!(screen.contains("Changelog ready"));
}

#[test]
fn test_long_query_shows_its_end() {
    let mut view = SearchView::new(3);
    view.set_input(
        "some-organisation-with-a-long-name/and-an-even-longer-repository-TAILPART",
        Instant::now(),
    );
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let screen = terminal.backend().to_string();

    assert!(screen.contains("TAILPART"));
    assert!(!screen.contains("some-organisation"));
}

#[test]
fn test_selected_repository_card_snapshot() {
    let mut view = view_with_results(vec![repo(1, "octocat/Hello-World", None)]);
    view.select(0);

    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌────────────────── Changelog Generator ───────────────────┐"
    "│                Search GitHub Repositories                │"
    "│┌ Repository ────────────────────────────────────────────┐│"
    "││octocat/Hello-World                                     ││"
    "│└────────────────────────────────────────────────────────┘│"
    "│┌ Selected Repository ───────────────────────────────────┐│"
    "││                   octocat/Hello-World                  ││"
    "││                No description available                ││"
    "││                                                        ││"
    "││                 [ Generate Changelog ]                 ││"
    "││                   Days: [   3] (days)                  ││"
    "││                                                        ││"
    "││                                                        ││"
    "│└────────────────────────────────────────────────────────┘│"
    "│                                                          │"
    "│                                                          │"
    "│                                                          │"
    "│                                                          │"
    "│                                                          │"
    "└──────────────────────────────────────────────────────────┘"
    "#);
}

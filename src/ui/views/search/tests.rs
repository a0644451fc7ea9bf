//! Tests for SearchView

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{ApiError, GenerateRequest};
use crate::keys;
use crate::model::Repository;

use super::render::input_tail;
use super::{Focus, SEARCH_DEBOUNCE, SUGGESTION_LIMIT, SearchAction, SearchView};

fn repo(id: u64, full_name: &str) -> Repository {
    Repository {
        id,
        full_name: full_name.to_string(),
        description: Some(format!("{} description", full_name)),
    }
}

fn many_repos(n: usize) -> Vec<Repository> {
    (0..n)
        .map(|i| repo(i as u64, &format!("owner/repo-{}", i)))
        .collect()
}

fn press_key(view: &mut SearchView, key: KeyCode, now: Instant) -> SearchAction {
    view.handle_key(KeyEvent::from(key), now)
}

fn type_text(view: &mut SearchView, text: &str, now: Instant) {
    for c in text.chars() {
        press_key(view, KeyCode::Char(c), now);
    }
}

/// Type a query, let it fire and deliver `results` for it
fn search_and_receive(view: &mut SearchView, query: &str, results: Vec<Repository>) -> Instant {
    let start = Instant::now();
    type_text(view, query, start);
    let fired = view.poll_search(start + SEARCH_DEBOUNCE).unwrap();
    assert!(view.apply_search_results(fired.seq, Ok(results)));
    start + SEARCH_DEBOUNCE
}

#[test]
fn test_search_view_new() {
    let view = SearchView::new(3);
    assert!(view.input.is_empty());
    assert!(view.selected().is_none());
    assert!(!view.is_dropdown_open());
    assert_eq!(view.days(), 3);
    assert_eq!(view.focus, Focus::Query);
}

#[test]
fn test_short_query_never_searches() {
    let mut view = SearchView::new(3);
    let start = Instant::now();
    type_text(&mut view, "ab", start);

    assert!(view.poll_search(start + Duration::from_secs(10)).is_none());
    assert!(view.suggestions().is_empty());
}

#[test]
fn test_shortening_query_clears_suggestions() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "tok", many_repos(3));
    assert!(view.is_dropdown_open());

    press_key(&mut view, KeyCode::Backspace, now);

    assert!(view.suggestions().is_empty());
    assert!(!view.is_dropdown_open());
    assert!(view.poll_search(now + Duration::from_secs(1)).is_none());
}

#[test]
fn test_rapid_typing_fires_once_with_final_query() {
    let mut view = SearchView::new(3);
    let start = Instant::now();
    for (i, c) in "tokio".chars().enumerate() {
        let at = start + Duration::from_millis(50 * i as u64);
        press_key(&mut view, KeyCode::Char(c), at);
        assert!(view.poll_search(at).is_none());
    }

    let last_key = start + Duration::from_millis(200);
    assert!(view.poll_search(last_key + Duration::from_millis(299)).is_none());

    let fired = view.poll_search(last_key + SEARCH_DEBOUNCE).unwrap();
    assert_eq!(fired.query, "tokio");
    assert!(view.is_searching());
    assert!(view.poll_search(last_key + SEARCH_DEBOUNCE * 3).is_none());
}

#[test]
fn test_dropdown_capped_to_limit() {
    let mut view = SearchView::new(3);
    search_and_receive(&mut view, "repo", many_repos(10));

    assert_eq!(view.suggestions().len(), 10);
    assert_eq!(view.visible_suggestions().len(), SUGGESTION_LIMIT);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut view = SearchView::new(3);
    let start = Instant::now();
    type_text(&mut view, "tok", start);
    let old = view.poll_search(start + SEARCH_DEBOUNCE).unwrap();

    let later = start + SEARCH_DEBOUNCE;
    type_text(&mut view, "io", later);
    let new = view.poll_search(later + SEARCH_DEBOUNCE).unwrap();

    assert!(view.apply_search_results(new.seq, Ok(vec![repo(1, "tokio-rs/tokio")])));
    // The older request answers last
    assert!(!view.apply_search_results(old.seq, Ok(many_repos(5))));

    assert_eq!(view.suggestions().len(), 1);
    assert_eq!(view.suggestions()[0].full_name, "tokio-rs/tokio");
}

#[test]
fn test_search_failure_clears_suggestions() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "tokio", many_repos(3));

    type_text(&mut view, "x", now);
    let fired = view.poll_search(now + SEARCH_DEBOUNCE).unwrap();
    assert!(view.apply_search_results(fired.seq, Err(ApiError::RateLimited)));

    assert!(view.suggestions().is_empty());
    assert!(!view.is_dropdown_open());
    assert!(!view.is_searching());
}

#[test]
fn test_select_sets_input_and_closes_dropdown() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(
        &mut view,
        "hello",
        vec![repo(1, "octocat/Hello-World"), repo(2, "octocat/hello-rust")],
    );

    press_key(&mut view, KeyCode::Down, now);
    assert_eq!(view.cursor, 1);
    press_key(&mut view, keys::SUBMIT, now);

    assert_eq!(view.input, "octocat/hello-rust");
    assert_eq!(view.selected().unwrap().id, 2);
    assert!(!view.is_dropdown_open());
    // Replacing the text with the full name does not start another search
    assert!(view.poll_search(now + Duration::from_secs(1)).is_none());
}

#[test]
fn test_cursor_stays_within_visible() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "repo", many_repos(8));
    for _ in 0..10 {
        press_key(&mut view, KeyCode::Down, now);
    }
    assert_eq!(view.cursor, SUGGESTION_LIMIT - 1);
    for _ in 0..10 {
        press_key(&mut view, KeyCode::Up, now);
    }
    assert_eq!(view.cursor, 0);
}

#[test]
fn test_edit_after_select_clears_selection_keeps_text() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    assert!(view.selected().is_some());

    press_key(&mut view, KeyCode::Char('!'), now);

    assert!(view.selected().is_none());
    assert_eq!(view.input, "octocat/Hello-World!");
    assert_eq!(press_key(&mut view, keys::SUBMIT, now), SearchAction::None);
}

#[test]
fn test_escape_closes_dropdown_then_clears_then_quits() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "tokio", many_repos(2));

    assert_eq!(press_key(&mut view, keys::ESC, now), SearchAction::None);
    assert!(!view.is_dropdown_open());
    assert_eq!(view.input, "tokio");

    assert_eq!(press_key(&mut view, keys::ESC, now), SearchAction::None);
    assert!(view.input.is_empty());
    assert!(view.suggestions().is_empty());

    assert_eq!(press_key(&mut view, keys::ESC, now), SearchAction::Quit);
}

#[test]
fn test_escape_from_selection_keeps_session() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    press_key(&mut view, keys::NEXT_FIELD, now);

    // Leave the day field, then drop the selected name
    assert_eq!(press_key(&mut view, keys::ESC, now), SearchAction::None);
    assert_eq!(view.focus, Focus::Query);
    assert_eq!(press_key(&mut view, keys::ESC, now), SearchAction::None);
    assert!(view.selected().is_none());
    assert!(view.input.is_empty());
}

#[test]
fn test_input_tail_fits_width() {
    assert_eq!(input_tail("octocat/Hello-World", 40), "octocat/Hello-World");
    assert_eq!(input_tail("octocat/Hello-World", 5), "World");
    assert_eq!(input_tail("abc", 0), "");
    assert_eq!(input_tail("", 5), "");
}

#[test]
fn test_generate_without_selection_does_nothing() {
    let mut view = SearchView::new(3);
    assert!(view.start_generation().is_none());
    assert!(!view.is_generating());
    assert_eq!(
        press_key(&mut view, keys::SUBMIT, Instant::now()),
        SearchAction::None
    );
}

#[test]
fn test_generate_uses_default_days() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);

    let action = press_key(&mut view, keys::SUBMIT, now);
    assert_eq!(
        action,
        SearchAction::Generate(GenerateRequest::new("octocat/Hello-World", 3))
    );
    assert!(view.is_generating());
}

#[test]
fn test_generate_with_edited_days() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);

    press_key(&mut view, keys::NEXT_FIELD, now);
    assert_eq!(view.focus, Focus::Days);
    type_text(&mut view, "1x4", now);
    assert_eq!(view.days_input(), "14");

    match press_key(&mut view, keys::SUBMIT, now) {
        SearchAction::Generate(request) => assert_eq!(request.days, 14),
        other => panic!("expected Generate, got {:?}", other),
    }
}

#[test]
fn test_cleared_days_falls_back_to_default() {
    let mut view = SearchView::new(7);
    view.push_day_digit('0');
    assert_eq!(view.days(), 7);
    view.pop_day_digit();
    assert_eq!(view.days(), 7);
}

#[test]
fn test_days_input_length_capped() {
    let mut view = SearchView::new(3);
    for c in "123456".chars() {
        view.push_day_digit(c);
    }
    assert_eq!(view.days_input(), "1234");
}

#[test]
fn test_tab_without_selection_stays_on_query() {
    let mut view = SearchView::new(3);
    press_key(&mut view, keys::NEXT_FIELD, Instant::now());
    assert_eq!(view.focus, Focus::Query);
}

#[test]
fn test_second_generate_ignored_while_running() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);

    assert!(matches!(
        press_key(&mut view, keys::SUBMIT, now),
        SearchAction::Generate(_)
    ));
    assert_eq!(press_key(&mut view, keys::SUBMIT, now), SearchAction::None);
}

#[test]
fn test_finish_generation_attaches_link() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    let request = view.start_generation().unwrap();

    let link = "http://localhost:3000/changes/b2N0b2NhdC9IZWxsby1Xb3JsZA==".to_string();
    assert!(view.finish_generation(&request, Some(link.clone())));
    assert!(!view.is_generating());
    assert_eq!(view.link(), Some(link.as_str()));

    let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
    assert_eq!(view.handle_key(ctrl_o, now), SearchAction::OpenLink(link));
}

#[test]
fn test_failed_generation_leaves_no_link() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    let request = view.start_generation().unwrap();

    assert!(!view.finish_generation(&request, None));
    assert!(!view.is_generating());
    assert_eq!(view.link(), None);
}

#[test]
fn test_link_not_attached_after_selection_changed() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    let request = view.start_generation().unwrap();

    press_key(&mut view, KeyCode::Backspace, now);
    assert!(!view.finish_generation(&request, Some("http://x".to_string())));
    assert!(!view.is_generating());
    assert_eq!(view.link(), None);
}

#[test]
fn test_new_generation_clears_previous_link() {
    let mut view = SearchView::new(3);
    let now = search_and_receive(&mut view, "hello", vec![repo(1, "octocat/Hello-World")]);
    press_key(&mut view, keys::SUBMIT, now);
    let request = view.start_generation().unwrap();
    view.finish_generation(&request, Some("http://x".to_string()));

    view.start_generation().unwrap();
    assert_eq!(view.link(), None);
}

#[test]
fn test_ctrl_o_without_link_does_nothing() {
    let mut view = SearchView::new(3);
    let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
    assert_eq!(view.handle_key(ctrl_o, Instant::now()), SearchAction::None);
    assert!(view.input.is_empty());
}

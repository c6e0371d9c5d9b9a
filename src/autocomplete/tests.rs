//! Tests for the autocomplete component.

use super::*;
use crate::error::Error;
use crate::field::{Field, Input};
use crate::Component;
use crate::key::KeyMap as _;
use bubbletea_rs::{KeyMsg, MouseMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use unicode_width::UnicodeWidthStr;
use proptest::prelude::*;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn press(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(x: u16, y: u16) -> Msg {
    mouse(x, y, MouseEventKind::Down(MouseButton::Left))
}

fn mouse(x: u16, y: u16, kind: MouseEventKind) -> Msg {
    Box::new(MouseMsg {
        x,
        y,
        button: kind,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn widget(list: &[&str], min_chars: usize) -> Model {
    let config = Config::new()
        .with_min_chars(min_chars)
        .with_list(list.iter().copied());
    let (mut ac, cmd) = Model::new(Field::new(), config);
    assert!(cmd.is_none());
    ac.focus();
    ac
}

fn type_str(ac: &mut Model, s: &str) {
    for ch in s.chars() {
        ac.handle_key(&press(KeyCode::Char(ch)));
    }
}

fn assert_invariants(ac: &Model) {
    if !ac.is_open() {
        assert_eq!(ac.highlighted(), None);
    }
    if ac.results().is_empty() {
        assert!(!ac.is_open());
    }
    if let Some(i) = ac.highlighted() {
        assert!(i < ac.results().len());
    }
}

#[test]
fn test_new_loads_static_list() {
    let ac = widget(&["apple", "apple", "pear"], 1);
    assert_eq!(ac.candidates().len(), 2);
    assert!(!ac.is_open());
    assert_eq!(ac.index(), -1);
    assert!(ac.results().is_empty());
}

#[test]
fn test_ids_are_unique() {
    let a = widget(&[], 1);
    let b = widget(&[], 1);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_scenario_type_navigate_commit() {
    let mut ac = widget(&["apple", "Banana", "grape"], 1);

    type_str(&mut ac, "an");
    assert_eq!(ac.results(), ["Banana"]);
    assert!(ac.is_open());
    assert_eq!(ac.index(), -1);

    assert!(ac.handle_key(&press(KeyCode::Down)));
    assert_eq!(ac.highlighted(), Some(0));

    assert!(ac.handle_key(&press(KeyCode::Enter)));
    assert_eq!(ac.value(), "Banana");
    assert!(!ac.is_open());
    assert_eq!(ac.index(), -1);
    assert_eq!(ac.last_committed(), Some("Banana"));
    assert_invariants(&ac);
}

#[test]
fn test_scenario_no_matches_closes() {
    let mut ac = widget(&["apple", "apricot"], 1);
    type_str(&mut ac, "a");
    assert!(ac.is_open());

    ac.input_mut().set_value("z");
    ac.input_changed();
    assert!(ac.results().is_empty());
    assert!(!ac.is_open());
    assert_invariants(&ac);
}

#[test]
fn test_scenario_below_min_chars_stays_closed() {
    let mut ac = widget(&["apple", "apricot"], 2);
    type_str(&mut ac, "a");
    assert!(!ac.is_open());
    assert!(ac.results().is_empty());

    type_str(&mut ac, "p");
    assert!(ac.is_open());
    assert_eq!(ac.results(), ["apple", "apricot"]);

    ac.handle_key(&press(KeyCode::Backspace));
    assert!(!ac.is_open());
    assert!(ac.results().is_empty());
}

#[test]
fn test_min_chars_zero_opens_on_empty_input() {
    let mut ac = widget(&["b", "a"], 0);
    type_str(&mut ac, "a");
    ac.handle_key(&press(KeyCode::Backspace));
    assert!(ac.is_open());
    assert_eq!(ac.results(), ["a", "b"]);
}

#[test]
fn test_min_chars_counts_characters_not_bytes() {
    let mut ac = widget(&["éclair"], 2);
    type_str(&mut ac, "é");
    assert!(!ac.is_open());
}

#[test]
fn test_navigation_wraps_both_ways() {
    let mut ac = widget(&["a1", "a2", "a3"], 1);
    type_str(&mut ac, "a");
    assert_eq!(ac.results().len(), 3);

    ac.handle_key(&press(KeyCode::Up));
    assert_eq!(ac.highlighted(), Some(2));

    ac.handle_key(&press(KeyCode::Down));
    assert_eq!(ac.highlighted(), Some(0));

    ac.handle_key(&press(KeyCode::Up));
    assert_eq!(ac.highlighted(), Some(2));

    ac.handle_key(&press(KeyCode::Up));
    assert_eq!(ac.highlighted(), Some(1));

    ac.handle_key(&press(KeyCode::Down));
    ac.handle_key(&press(KeyCode::Down));
    assert_eq!(ac.highlighted(), Some(0));
    assert_invariants(&ac);
}

#[test]
fn test_arrow_keys_while_closed_are_not_consumed() {
    let mut ac = widget(&["apple"], 1);
    assert!(!ac.handle_key(&press(KeyCode::Down)));
    assert!(!ac.handle_key(&press(KeyCode::Up)));
    assert_eq!(ac.highlighted(), None);
    assert!(!ac.is_open());
}

#[test]
fn test_enter_without_highlight_is_noop() {
    let mut ac = widget(&["apple", "apricot"], 1);
    type_str(&mut ac, "ap");

    assert!(!ac.handle_key(&press(KeyCode::Enter)));
    assert!(ac.is_open());
    assert_eq!(ac.value(), "ap");
    assert_eq!(ac.commit(), None);
    assert_eq!(ac.last_committed(), None);
}

#[test]
fn test_escape_closes() {
    let mut ac = widget(&["apple"], 1);
    type_str(&mut ac, "a");
    ac.handle_key(&press(KeyCode::Down));

    ac.handle_key(&press(KeyCode::Esc));
    assert!(!ac.is_open());
    assert_eq!(ac.index(), -1);
    assert_eq!(ac.value(), "a");
}

#[test]
fn test_blur_closes() {
    let mut ac = widget(&["apple"], 1);
    type_str(&mut ac, "a");
    ac.handle_key(&press(KeyCode::Down));

    ac.blur();
    assert!(!ac.focused());
    assert!(!ac.is_open());
    assert_eq!(ac.highlighted(), None);
}

#[test]
fn test_retyping_discards_highlight() {
    let mut ac = widget(&["apple", "apricot", "grape"], 1);
    type_str(&mut ac, "a");
    ac.handle_key(&press(KeyCode::Down));
    ac.handle_key(&press(KeyCode::Down));
    assert_eq!(ac.highlighted(), Some(1));

    type_str(&mut ac, "p");
    assert_eq!(ac.highlighted(), None);
    assert_eq!(ac.results(), ["apple", "apricot", "grape"]);

    type_str(&mut ac, "r");
    assert_eq!(ac.results(), ["apricot"]);
}

#[test]
fn test_press_row_commits() {
    let mut ac = widget(&["apple", "apricot"], 1);
    type_str(&mut ac, "ap");

    assert_eq!(ac.press_row(1), Some("apricot".to_string()));
    assert_eq!(ac.value(), "apricot");
    assert!(!ac.is_open());
    assert_eq!(ac.index(), -1);
}

#[test]
fn test_press_row_out_of_range_or_closed_is_ignored() {
    let mut ac = widget(&["apple", "apricot"], 1);
    assert_eq!(ac.press_row(0), None);

    type_str(&mut ac, "ap");
    assert_eq!(ac.press_row(5), None);
    assert!(ac.is_open());
    assert_eq!(ac.value(), "ap");
}

#[test]
fn test_mouse_press_on_row_commits() {
    let mut ac = widget(&["apple", "apricot"], 1);
    ac.set_origin(4, 10);
    type_str(&mut ac, "ap");
    assert_eq!(ac.row_width(), 2 + "apricot".len());

    // Input on line 10, rows on lines 11 and 12.
    ac.update(click(4 + 3, 12));
    assert_eq!(ac.value(), "apricot");
    assert!(!ac.is_open());
    assert_eq!(ac.index(), -1);
    assert_eq!(ac.last_committed(), Some("apricot"));
}

#[test]
fn test_mouse_press_off_the_rows_is_ignored() {
    let mut ac = widget(&["apple", "apricot"], 1);
    ac.set_origin(4, 10);
    type_str(&mut ac, "ap");
    let right_edge = 4 + ac.row_width() as u16;

    // input line, below the last row, left of the panel, right of the panel
    for (x, y) in [(5, 10), (5, 13), (3, 11), (right_edge, 11), (500, 11)] {
        ac.update(click(x, y));
        assert!(ac.is_open(), "press at ({x}, {y}) should be ignored");
        assert_eq!(ac.value(), "ap");
    }

    // last column of the panel still hits
    ac.update(click(right_edge - 1, 11));
    assert_eq!(ac.value(), "apple");
}

#[test]
fn test_mouse_press_without_origin_is_ignored() {
    let mut ac = widget(&["apple"], 1);
    type_str(&mut ac, "a");
    ac.update(click(2, 1));
    assert!(ac.is_open());
    assert_eq!(ac.value(), "a");
}

#[test]
fn test_mouse_only_left_button_down_commits() {
    let mut ac = widget(&["apple"], 1);
    ac.set_origin(0, 0);
    type_str(&mut ac, "a");

    for kind in [
        MouseEventKind::Down(MouseButton::Right),
        MouseEventKind::Down(MouseButton::Middle),
        MouseEventKind::Up(MouseButton::Left),
        MouseEventKind::Drag(MouseButton::Left),
        MouseEventKind::Moved,
        MouseEventKind::ScrollDown,
    ] {
        ac.update(mouse(2, 1, kind));
        assert!(ac.is_open());
        assert_eq!(ac.value(), "a");
    }

    ac.update(click(2, 1));
    assert_eq!(ac.value(), "apple");
}

#[test]
fn test_mouse_press_while_closed_is_ignored() {
    let mut ac = widget(&["apple"], 1);
    ac.set_origin(0, 0);
    assert_eq!(ac.row_width(), 0);
    ac.update(click(2, 1));
    assert_eq!(ac.value(), "");
    assert_eq!(ac.last_committed(), None);
}

#[test]
fn test_commit_does_not_reopen() {
    let mut ac = widget(&["apple", "apple pie"], 1);
    type_str(&mut ac, "apple");
    ac.handle_key(&press(KeyCode::Down));
    ac.handle_key(&press(KeyCode::Enter));
    assert_eq!(ac.value(), "apple");
    assert!(!ac.is_open());
}

#[test]
fn test_append_after_typing_applies_on_next_change() {
    let mut ac = widget(&["apple"], 1);
    type_str(&mut ac, "a");
    ac.handle_key(&press(KeyCode::Down));

    ac.append_candidates(["avocado", "apple"]);
    assert_eq!(ac.candidates().len(), 2);
    assert_eq!(ac.results(), ["apple"]);
    assert_eq!(ac.highlighted(), Some(0));

    type_str(&mut ac, "v");
    assert_eq!(ac.results(), ["avocado"]);
    assert_invariants(&ac);
}

#[test]
fn test_rows_mark_exactly_one_highlight() {
    let mut ac = widget(&["a1", "a2", "a3"], 1);
    assert!(ac.rows().is_empty());

    type_str(&mut ac, "a");
    assert!(ac.rows().iter().all(|row| !row.highlighted));

    ac.handle_key(&press(KeyCode::Down));
    ac.handle_key(&press(KeyCode::Down));
    let rows = ac.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().filter(|row| row.highlighted).count(), 1);
    assert_eq!(
        rows[1],
        Row {
            index: 1,
            text: "a2".to_string(),
            highlighted: true,
        }
    );
}

#[test]
fn test_view_shows_panel_only_when_open() {
    let mut ac = widget(&["apple", "Banana"], 1);
    let closed = strip_ansi_escapes::strip_str(ac.view());
    assert_eq!(closed.lines().count(), 1);

    type_str(&mut ac, "a");
    let open = strip_ansi_escapes::strip_str(ac.view());
    let lines: Vec<&str> = open.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Banana"));
    assert!(lines[2].contains("apple"));
}

#[test]
fn test_rendered_rows_share_one_width() {
    let mut ac = widget(&["apple", "apricot"], 1);
    type_str(&mut ac, "ap");
    ac.handle_key(&press(KeyCode::Down));

    let view = strip_ansi_escapes::strip_str(ac.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines[1..] {
        assert_eq!(UnicodeWidthStr::width(*line), ac.row_width());
    }
}

#[test]
fn test_state_and_config_accessors() {
    let mut ac = widget(&["apple"], 3);
    assert_eq!(ac.config().min_chars, 3);
    assert_eq!(ac.state(), InteractionState::default());

    type_str(&mut ac, "app");
    ac.handle_key(&press(KeyCode::Down));
    assert_eq!(
        ac.state(),
        InteractionState {
            open: true,
            highlighted: Some(0),
        }
    );
}

#[test]
fn test_rebound_keys_drive_navigation() {
    let mut ac = widget(&["a1", "a2"], 1);
    ac.key_map.next.set_keys(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);
    type_str(&mut ac, "a");

    assert!(!ac.handle_key(&press(KeyCode::Down)));
    assert_eq!(ac.highlighted(), None);

    let ctrl_n = KeyMsg {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::CONTROL,
    };
    assert!(ac.handle_key(&ctrl_n));
    assert_eq!(ac.highlighted(), Some(0));
}

#[test]
fn test_key_map_help() {
    let keys = default_key_map();
    let short: Vec<&str> = keys
        .short_help()
        .into_iter()
        .map(|b| b.help().desc.as_str())
        .collect();
    assert_eq!(short, vec!["next", "prev", "select", "close"]);

    let full = keys.full_help();
    assert_eq!(full.len(), 2);
    assert_eq!(full.iter().map(Vec::len).sum::<usize>(), 4);
}

#[test]
fn test_update_routes_key_messages() {
    let mut ac = widget(&["apple"], 1);
    let cmd = ac.update(Box::new(press(KeyCode::Char('a'))) as Msg);
    assert!(cmd.is_none());
    assert!(ac.is_open());
}

#[test]
fn test_fetch_msg_for_other_widget_is_ignored() {
    let mut ac = widget(&[], 1);
    let msg = FetchMsg {
        id: ac.id() + 1000,
        result: Ok(vec!["apple".to_string()]),
    };
    ac.update(Box::new(msg) as Msg);
    assert!(ac.candidates().is_empty());
}

#[test]
fn test_failed_fetch_appends_nothing() {
    let mut ac = widget(&["apple"], 1);
    let msg = FetchMsg {
        id: ac.id(),
        result: Err(Error::Status(500)),
    };
    ac.update(Box::new(msg) as Msg);
    assert_eq!(ac.candidates().len(), 1);
}

#[test]
fn test_fetch_result_uses_append_path() {
    let mut ac = widget(&["apple"], 1);
    let msg = FetchMsg {
        id: ac.id(),
        result: Ok(vec!["apple".to_string(), "kiwi".to_string()]),
    };
    ac.update(Box::new(msg) as Msg);
    assert_eq!(ac.candidates().iter().collect::<Vec<_>>(), vec!["apple", "kiwi"]);
}

#[tokio::test]
async fn test_remote_source_populates_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fruit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(["grape", "apple"]))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new()
        .with_list(["apple"])
        .with_url(format!("{}/fruit", server.uri()));
    let (mut ac, cmd) = Model::new(Field::new(), config);
    ac.focus();

    let cmd = cmd.expect("url configured, fetch command expected");
    let msg = cmd.await.expect("fetch command always reports back");
    ac.update(msg);

    assert_eq!(ac.candidates().iter().collect::<Vec<_>>(), vec!["apple", "grape"]);
    type_str(&mut ac, "p");
    assert_eq!(ac.results(), ["apple", "grape"]);
}

#[tokio::test]
async fn test_fetch_candidates_rejects_non_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetch_candidates(&server.uri(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status(404)));
}

#[tokio::test]
async fn test_fetch_candidates_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;

    let err = fetch_candidates(&server.uri(), Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_source_is_harmless() {
    let config = Config::new()
        .with_list(["apple"])
        .with_url("http://127.0.0.1:9/candidates")
        .with_timeout(Duration::from_secs(2));
    let (mut ac, cmd) = Model::new(Field::new(), config);

    let msg = cmd.expect("fetch command").await.expect("message");
    assert!(ac.update(msg).is_none());
    assert_eq!(ac.candidates().len(), 1);
}

proptest! {
    #[test]
    fn prop_below_min_chars_always_closed(
        min_chars in 1usize..5,
        typed in "[a-c]{0,4}",
    ) {
        prop_assume!(typed.chars().count() < min_chars);
        let mut ac = widget(&["a", "ab", "abc", "b", "c"], min_chars);
        type_str(&mut ac, &typed);
        prop_assert!(!ac.is_open());
        prop_assert!(ac.results().is_empty());
    }

    #[test]
    fn prop_invariants_hold_under_any_key_sequence(
        keys in prop::collection::vec(0u8..6, 0..40),
    ) {
        let mut ac = widget(&["apple", "apricot", "Banana", "grape"], 1);
        for k in keys {
            match k {
                0 => { ac.handle_key(&press(KeyCode::Char('a'))); }
                1 => { ac.handle_key(&press(KeyCode::Backspace)); }
                2 => { ac.handle_key(&press(KeyCode::Down)); }
                3 => { ac.handle_key(&press(KeyCode::Up)); }
                4 => {
                    let before = ac.highlighted().map(|i| ac.results()[i].clone());
                    ac.handle_key(&press(KeyCode::Enter));
                    if let Some(text) = before {
                        prop_assert_eq!(ac.value(), text);
                        prop_assert!(!ac.is_open());
                    }
                }
                _ => { ac.handle_key(&press(KeyCode::Esc)); }
            }
            assert_invariants(&ac);
        }
    }
}

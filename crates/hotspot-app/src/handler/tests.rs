//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::form::IndexPath;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::Route;
use crate::sections::{PASSWORD_ROW, TOGGLE_ROW, TOGGLE_SECTION};
use crate::state::{AppState, PRESS_FEEDBACK_TICKS};
use crate::test_utils::{HostEvent, RecordingHost};

fn test_state() -> AppState<RecordingHost> {
    AppState::new(Settings::default(), RecordingHost::with_realized(&[0, 1]))
}

/// Run a message and every follow-up it produces
fn process(state: &mut AppState<RecordingHost>, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn press_keys(state: &mut AppState<RecordingHost>, keys: &[InputKey]) {
    for key in keys {
        process(state, Message::Key(key.clone()));
    }
}

fn editor_text(state: &AppState<RecordingHost>) -> Option<String> {
    state.navigator().with_top(|route| match route {
        Route::PasswordEditor(editor) => editor.text().to_string(),
    })
}

fn batch_count(state: &AppState<RecordingHost>) -> usize {
    state.form.with_view(|_, host| {
        host.events()
            .iter()
            .filter(|e| **e == HostEvent::BeginUpdates)
            .count()
    })
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_key_quits_on_form() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_navigation_keys_on_form() {
    let state = test_state();
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::SelectNext));
    assert_eq!(handle_key(&state, InputKey::Char('j')), Some(Message::SelectNext));
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::SelectPrevious));
    assert_eq!(handle_key(&state, InputKey::Char('k')), Some(Message::SelectPrevious));
    assert_eq!(handle_key(&state, InputKey::Char(' ')), Some(Message::FlipToggle));
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::ActivateSelected));
}

#[test]
fn test_editor_keys_type_text() {
    let mut state = test_state();
    state.view_state.selected = PASSWORD_ROW;
    process(&mut state, Message::ActivateSelected);

    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::EditorInput('q')));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::EditorBack));
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::EditorSubmit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Form behaviour
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_should_quit() {
    let mut state = test_state();
    process(&mut state, Message::Quit);
    assert!(state.should_quit);
}

#[test]
fn test_space_flips_toggle_on_toggle_row() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Char(' ')]);

    assert!(!state.form.state().enabled);
    assert!(!state.form.toggle().is_on());
    assert_eq!(state.form.footer_title(TOGGLE_SECTION), None);
    state
        .form
        .with_view(|_, host| assert_eq!(host.footer_text(TOGGLE_SECTION), Some(None)));
}

#[test]
fn test_space_on_password_row_is_ignored() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Down, InputKey::Char(' ')]);

    assert!(state.form.state().enabled);
    assert_eq!(batch_count(&state), 0);
}

#[test]
fn test_enter_on_toggle_row_has_no_feedback_or_effect() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Enter]);

    assert_eq!(state.view_state.selected, TOGGLE_ROW);
    assert_eq!(state.view_state.pressed, None);
    assert!(state.navigator().is_root());
}

#[test]
fn test_enter_on_password_row_opens_editor_with_feedback() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Down, InputKey::Enter]);

    assert_eq!(state.view_state.pressed, Some(PASSWORD_ROW));
    assert_eq!(state.navigator().depth(), 1);
    assert_eq!(state.navigator().title(), "Hotspot Password");
    assert_eq!(editor_text(&state).as_deref(), Some("hello"));
}

#[test]
fn test_tick_clears_pressed_feedback() {
    let mut state = test_state();
    state.view_state.selected = PASSWORD_ROW;
    process(&mut state, Message::ActivateSelected);

    for _ in 0..PRESS_FEEDBACK_TICKS {
        process(&mut state, Message::Tick);
    }
    assert_eq!(state.view_state.pressed, None);
}

// ─────────────────────────────────────────────────────────
// Password editor round-trip
// ─────────────────────────────────────────────────────────

#[test]
fn test_editor_round_trip_via_submit() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Down, InputKey::Enter]);
    press_keys(
        &mut state,
        &[
            InputKey::Backspace,
            InputKey::Backspace,
            InputKey::Backspace,
            InputKey::Backspace,
            InputKey::Backspace,
            InputKey::Char('w'),
            InputKey::Char('o'),
            InputKey::Char('r'),
            InputKey::Char('l'),
            InputKey::Char('d'),
            InputKey::Enter,
        ],
    );

    assert!(state.navigator().is_root());
    assert_eq!(state.form.state().secret, "world");
    assert_eq!(state.form.detail_text(PASSWORD_ROW).as_deref(), Some("world"));
    // submit commits, then leaving the screen commits again
    assert_eq!(batch_count(&state), 2);
}

#[test]
fn test_editor_back_still_commits() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Down, InputKey::Enter, InputKey::Char('!')]);
    press_keys(&mut state, &[InputKey::Esc]);

    assert!(state.navigator().is_root());
    assert_eq!(state.form.state().secret, "hello!");
    assert_eq!(batch_count(&state), 1);
}

#[test]
fn test_editor_typing_does_not_touch_state() {
    let mut state = test_state();
    press_keys(&mut state, &[InputKey::Down, InputKey::Enter, InputKey::Char('x')]);

    assert_eq!(state.form.state().secret, "hello");
    assert_eq!(editor_text(&state).as_deref(), Some("hellox"));
    assert_eq!(batch_count(&state), 0);
}

#[test]
fn test_back_on_root_is_noop() {
    let mut state = test_state();
    process(&mut state, Message::EditorBack);
    assert!(state.navigator().is_root());
    assert_eq!(state.form.state().secret, "hello");
}

#[test]
fn test_reopened_editor_shows_committed_secret() {
    let mut state = test_state();
    press_keys(
        &mut state,
        &[InputKey::Down, InputKey::Enter, InputKey::Char('2'), InputKey::Enter],
    );
    press_keys(&mut state, &[InputKey::Enter]);

    assert_eq!(state.view_state.selected, IndexPath::new(1, 0));
    assert_eq!(editor_text(&state).as_deref(), Some("hello2"));
}

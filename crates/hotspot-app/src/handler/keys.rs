//! Key event handlers for the form and the password editor

use crate::host::HostListView;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the visible screen
pub fn handle_key<H: HostListView + 'static>(state: &AppState<H>, key: InputKey) -> Option<Message> {
    if state.navigator().is_root() {
        handle_key_form(key)
    } else {
        handle_key_password_editor(key)
    }
}

/// Handle key events on the form
fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Char(' ') => Some(Message::FlipToggle),
        InputKey::Enter => Some(Message::ActivateSelected),

        _ => None,
    }
}

/// Handle key events in the password editor
fn handle_key_password_editor(key: InputKey) -> Option<Message> {
    match key {
        // Force quit with Ctrl+C even while editing
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Enter => Some(Message::EditorSubmit),
        InputKey::Esc => Some(Message::EditorBack),
        InputKey::Backspace => Some(Message::EditorBackspace),
        InputKey::Char(c) => Some(Message::EditorInput(c)),

        _ => None,
    }
}

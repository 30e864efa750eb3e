//! Main update function - handles state transitions (TEA pattern)

use crate::form::Accessory;
use crate::host::HostListView;
use crate::message::Message;
use crate::navigation::Route;
use crate::state::AppState;
use tracing::{debug, trace};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update<H: HostListView + 'static>(state: &mut AppState<H>, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.view_state.tick();
            state.form.with_view_mut(|_, host| host.tick());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.view_state.select_next(&state.form);
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.view_state.select_previous(&state.form);
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.view_state.select_first(&state.form);
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.view_state.select_last(&state.form);
            UpdateResult::none()
        }

        Message::FlipToggle => {
            let selected = state.view_state.selected;
            if state.form.accessory(selected) == Accessory::Toggle {
                state.form.flip_toggle();
            } else {
                trace!("Row {} has no switch", selected);
            }
            UpdateResult::none()
        }

        Message::ActivateSelected => {
            let selected = state.view_state.selected;
            if state.form.should_highlight(selected) {
                state.view_state.press(selected);
            }
            state.form.did_select(selected);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Password Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::EditorInput(c) => {
            state.navigator().with_top_mut(|route| match route {
                Route::PasswordEditor(editor) => editor.insert_char(c),
            });
            UpdateResult::none()
        }

        Message::EditorBackspace => {
            state.navigator().with_top_mut(|route| match route {
                Route::PasswordEditor(editor) => editor.backspace(),
            });
            UpdateResult::none()
        }

        Message::EditorSubmit => {
            state.navigator().with_top(|route| match route {
                Route::PasswordEditor(editor) => editor.submit(),
            });
            UpdateResult::message(Message::EditorBack)
        }

        Message::EditorBack => {
            match state.navigator().pop() {
                Some(Route::PasswordEditor(editor)) => editor.editing_ended(),
                None => debug!("Back requested on the root screen"),
            }
            UpdateResult::none()
        }
    }
}

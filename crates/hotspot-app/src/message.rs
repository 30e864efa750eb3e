//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for pressed feedback and footer transitions
    Tick,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Move the cursor to the next row
    SelectNext,
    /// Move the cursor to the previous row
    SelectPrevious,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,
    /// Flip the switch in the toggle row
    FlipToggle,
    /// Activate the row under the cursor
    ActivateSelected,

    // ─────────────────────────────────────────────────────────
    // Password Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Type a character into the editor
    EditorInput(char),
    /// Delete the last character in the editor
    EditorBackspace,
    /// Commit the editor value and leave the screen
    EditorSubmit,
    /// Leave the editor screen (editing ends and still commits)
    EditorBack,
}

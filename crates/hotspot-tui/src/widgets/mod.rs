//! Custom widget components

mod form_list;
mod password_editor;

pub use form_list::FormList;
pub use password_editor::PasswordEditorView;

//! Screen stack and the password editor screen.
//!
//! The form is always the root screen. Selecting the password row pushes a
//! [`PasswordEditor`] that was given a snapshot of the current secret and a
//! commit callback. The editor never sees the form or its state: it only
//! holds the callback.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Title of the root form screen
pub const FORM_TITLE: &str = "Settings";

/// Title of the password editor screen
pub const EDITOR_TITLE: &str = "Hotspot Password";

/// Callback receiving the edited value
pub type CommitFn = Box<dyn Fn(String)>;

/// Text editor for the hotspot password
pub struct PasswordEditor {
    text: String,
    on_commit: CommitFn,
}

impl PasswordEditor {
    /// Create an editor showing `initial`
    pub fn new(initial: impl Into<String>, on_commit: impl Fn(String) + 'static) -> Self {
        Self {
            text: initial.into(),
            on_commit: Box::new(on_commit),
        }
    }

    /// Current content of the text field
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// The text field lost focus; hand the value to the form
    pub fn editing_ended(&self) {
        (self.on_commit)(self.text.clone());
    }

    /// Explicit submit: commit the value. The caller is expected to pop the
    /// screen afterwards, which ends editing and commits again.
    pub fn submit(&self) {
        (self.on_commit)(self.text.clone());
    }
}

impl fmt::Debug for PasswordEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordEditor")
            .field("text_len", &self.text.chars().count())
            .finish_non_exhaustive()
    }
}

/// A screen pushed on top of the form
#[derive(Debug)]
pub enum Route {
    PasswordEditor(PasswordEditor),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::PasswordEditor(_) => EDITOR_TITLE,
        }
    }
}

/// Shared handle to the screen stack above the root form
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    stack: Rc<RefCell<Vec<Route>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, route: Route) {
        tracing::debug!("Navigating to {}", route.title());
        self.stack.borrow_mut().push(route);
    }

    /// Pop the top screen, returning it so the caller can finish it off
    pub fn pop(&self) -> Option<Route> {
        let route = self.stack.borrow_mut().pop();
        if let Some(route) = &route {
            tracing::debug!("Leaving {}", route.title());
        }
        route
    }

    /// Number of screens above the form
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// `true` when the form itself is on screen
    pub fn is_root(&self) -> bool {
        self.stack.borrow().is_empty()
    }

    /// Title of the visible screen
    pub fn title(&self) -> &'static str {
        self.stack
            .borrow()
            .last()
            .map(Route::title)
            .unwrap_or(FORM_TITLE)
    }

    pub fn with_top<R>(&self, f: impl FnOnce(&Route) -> R) -> Option<R> {
        self.stack.borrow().last().map(f)
    }

    pub fn with_top_mut<R>(&self, f: impl FnOnce(&mut Route) -> R) -> Option<R> {
        self.stack.borrow_mut().last_mut().map(f)
    }
}

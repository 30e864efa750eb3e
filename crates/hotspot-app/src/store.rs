//! Single-writer state container with a synchronous change hook.
//!
//! [`Store<S>`] owns one value of `S` behind a shared handle. All mutation
//! goes through [`Store::set`] (or [`Store::update`], which is a
//! copy-modify-set on top of it). Every successful write:
//!
//! 1. replaces the stored value as a whole,
//! 2. then calls the registered change hook with the new value, before the
//!    setter returns,
//! 3. does so on every write, including writes of an equal value. Nothing is
//!    coalesced or debounced.
//!
//! Handles are cheap to clone and all clones refer to the same value. The
//! container is single-threaded (`Rc`/`RefCell`), matching the UI-owned
//! execution context it lives on.
//!
//! The hook runs after the internal borrow has been released, so it may read
//! the store (and even write to it) without tripping the `RefCell`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type ChangeHook<S> = Rc<dyn Fn(&S)>;

struct StoreInner<S> {
    value: S,
    on_change: Option<ChangeHook<S>>,
}

/// Shared handle to a state value with change notification
pub struct Store<S> {
    inner: Rc<RefCell<StoreInner<S>>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("has_hook", &inner.on_change.is_some())
            .finish()
    }
}

impl<S: Clone + 'static> Store<S> {
    /// Create a store holding `initial`, with no hook registered
    pub fn new(initial: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                value: initial,
                on_change: None,
            })),
        }
    }

    /// Register the change hook, replacing any previous one.
    ///
    /// There is exactly one hook per store and the form registers it, so
    /// handles given out to other crates can write but never re-hook:
    ///
    /// ```compile_fail
    /// use hotspot_app::Store;
    ///
    /// let store = Store::new(0u32);
    /// store.on_change(|_| {});
    /// ```
    pub(crate) fn on_change(&self, hook: impl Fn(&S) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(hook));
    }

    /// Snapshot of the current value
    #[must_use]
    pub fn get(&self) -> S {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value and run the change hook before returning
    pub fn set(&self, value: S) {
        let hook = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.on_change.clone()
        };

        if let Some(hook) = hook {
            let current = self.get();
            hook(&current);
        }
    }

    /// Copy the value, apply `f` to the copy, then [`set`](Self::set) it.
    ///
    /// Readers never observe a half-applied update.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }
}

//! The hotspot form controller.
//!
//! [`HotspotForm`] owns the state store, the built sections and the host list
//! view. The only way to change the state is through the store; the store's
//! hook runs synchronously on every write and performs
//! `patch sections → reconcile footers` before the write returns.
//!
//! Ownership:
//! - the store's hook holds a `Weak` to the view (sections + host), so the
//!   store never keeps the view alive,
//! - the password editor's commit callback holds a store handle only,
//! - the password row's action holds a store handle and a navigator handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use hotspot_core::prelude::*;
use hotspot_core::Hotspot;

use crate::form::{Accessory, IndexPath, Section};
use crate::host::HostListView;
use crate::navigation::{Navigator, PasswordEditor, Route};
use crate::reconcile::{reload_section_footers, ReconcileReport};
use crate::sections::{build_sections, patch_sections, HOTSPOT_BINDINGS};
use crate::store::Store;

/// The on/off switch shown in the toggle row.
///
/// The switch is its own source of truth for what it displays; the form only
/// writes it once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleControl {
    is_on: bool,
}

impl ToggleControl {
    pub fn new(is_on: bool) -> Self {
        Self { is_on }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
    }
}

/// Sections plus the host that displays them
struct FormView<H> {
    sections: Vec<Section>,
    host: H,
}

impl<H: HostListView> FormView<H> {
    fn state_changed(&mut self, state: &Hotspot) {
        debug!("State changed: {:?}", state);
        patch_sections(&mut self.sections, HOTSPOT_BINDINGS, state);
        reload_section_footers(&mut self.host, &self.sections);
    }
}

/// Controller binding the hotspot state to a sectioned list
pub struct HotspotForm<H> {
    store: Store<Hotspot>,
    view: Rc<RefCell<FormView<H>>>,
    toggle: ToggleControl,
    navigator: Navigator,
}

impl<H> fmt::Debug for HotspotForm<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotspotForm")
            .field("store", &self.store)
            .field("toggle", &self.toggle)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}

impl<H: HostListView + 'static> HotspotForm<H> {
    /// Build the form from its initial state.
    ///
    /// This is the only supported way to create a form.
    pub fn new(initial: Hotspot, host: H, navigator: Navigator) -> Self {
        let store = Store::new(initial);
        let toggle = ToggleControl::new(store.with(|s| s.enabled));

        let open_editor = {
            let store = store.clone();
            let navigator = navigator.clone();
            move || {
                let snapshot = store.with(|s| s.secret.clone());
                let commit_store = store.clone();
                let editor = PasswordEditor::new(snapshot, move |value: String| {
                    commit_store.update(|s| s.secret = value);
                });
                navigator.push(Route::PasswordEditor(editor));
            }
        };

        let sections = store.with(|s| build_sections(s, open_editor));
        let view = Rc::new(RefCell::new(FormView { sections, host }));

        let weak: Weak<RefCell<FormView<H>>> = Rc::downgrade(&view);
        store.on_change(move |state: &Hotspot| {
            if let Some(view) = weak.upgrade() {
                view.borrow_mut().state_changed(state);
            }
        });

        info!("Hotspot form built");
        Self {
            store,
            view,
            toggle,
            navigator,
        }
    }

    /// Rebuild a form from archived UI state.
    ///
    /// Not supported: the form has exactly one construction path
    /// ([`HotspotForm::new`]). This always fails with a fatal error.
    pub fn restore(archive: &[u8]) -> Result<Self> {
        error!(
            "Refusing to restore hotspot form from {} bytes of archived state",
            archive.len()
        );
        Err(Error::unsupported_construction(
            "restoring the hotspot form from archived UI state",
        ))
    }

    // ─────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────

    /// Snapshot of the current state
    pub fn state(&self) -> Hotspot {
        self.store.get()
    }

    /// Handle to the state store. Writes through it notify the form.
    pub fn store(&self) -> &Store<Hotspot> {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    // ─────────────────────────────────────────────────────────
    // Toggle control
    // ─────────────────────────────────────────────────────────

    pub fn toggle(&self) -> ToggleControl {
        self.toggle
    }

    /// The toggle reported a change: copy its value into the state
    pub fn toggle_changed(&self) {
        let is_on = self.toggle.is_on();
        self.store.update(|s| s.enabled = is_on);
    }

    /// User flipped the switch: update the control, then report the change
    pub fn flip_toggle(&mut self) {
        self.toggle.set_on(!self.toggle.is_on());
        self.toggle_changed();
    }

    // ─────────────────────────────────────────────────────────
    // Data source (queried by the host)
    // ─────────────────────────────────────────────────────────

    pub fn number_of_sections(&self) -> usize {
        self.view.borrow().sections.len()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        self.view.borrow().sections[section].rows.len()
    }

    pub fn footer_title(&self, section: usize) -> Option<String> {
        self.view.borrow().sections[section].footer_text.clone()
    }

    pub fn detail_text(&self, path: IndexPath) -> Option<String> {
        self.view.borrow().sections[path.section].rows[path.row]
            .detail_text
            .clone()
    }

    pub fn accessory(&self, path: IndexPath) -> Accessory {
        self.view.borrow().sections[path.section].rows[path.row].accessory
    }

    /// Whether the host may show pressed feedback for the row
    pub fn should_highlight(&self, path: IndexPath) -> bool {
        self.view.borrow().sections[path.section].rows[path.row].is_selectable
    }

    /// The host reports a selection: run the row's action once, if it has one
    pub fn did_select(&self, path: IndexPath) {
        let action = self.view.borrow().sections[path.section].rows[path.row]
            .on_select
            .clone();

        match action {
            Some(action) => {
                debug!("Row {} selected", path);
                action();
            }
            None => trace!("Row {} has no action", path),
        }
    }

    // ─────────────────────────────────────────────────────────
    // View access
    // ─────────────────────────────────────────────────────────

    /// Read the sections and the host together
    pub fn with_view<R>(&self, f: impl FnOnce(&[Section], &H) -> R) -> R {
        let view = self.view.borrow();
        f(&view.sections, &view.host)
    }

    /// Read the sections while mutating the host (e.g. for rendering)
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&[Section], &mut H) -> R) -> R {
        let mut view = self.view.borrow_mut();
        let FormView { sections, host } = &mut *view;
        f(sections, host)
    }

    /// Run the footer reconcile pass without a state change
    pub fn reload_section_footers(&self) -> ReconcileReport {
        let mut view = self.view.borrow_mut();
        let FormView { sections, host } = &mut *view;
        reload_section_footers(host, sections)
    }
}

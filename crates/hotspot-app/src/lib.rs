//! hotspot-app - Form state and update logic for the hotspot settings form
//!
//! This crate holds the state store, the section model and its bindings, the
//! footer reconciler, the password editor screen and the TEA (The Elm
//! Architecture) update loop that drives them. It does not draw anything:
//! rendering goes through the [`host::HostListView`] trait implemented by the
//! TUI.

pub mod config;
pub mod controller;
pub mod form;
pub mod handler;
pub mod host;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod reconcile;
pub mod sections;
pub mod state;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use controller::{HotspotForm, ToggleControl};
pub use form::{Accessory, Action, FormRow, IndexPath, Section};
pub use handler::{update, UpdateResult};
pub use host::{FooterView, HostListView};
pub use message::Message;
pub use navigation::{Navigator, PasswordEditor, Route};
pub use reconcile::ReconcileReport;
pub use state::{AppState, FormViewState};
pub use store::Store;

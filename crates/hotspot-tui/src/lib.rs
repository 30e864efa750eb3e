//! hotspot-tui - Terminal UI for the hotspot settings form
//!
//! This crate provides the ratatui-based terminal interface. It implements the
//! form's host list view ([`TableHost`]) and adds rendering, event polling and
//! the main loop on top of hotspot-app.

pub mod event;
pub mod host;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry points
pub use host::TableHost;
pub use runner::run;

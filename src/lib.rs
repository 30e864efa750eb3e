//! Hotspot Form Library
//!
//! A terminal form for the Personal Hotspot settings: a switch whose section
//! footer follows its state, and a password row that opens an editor.
//! The workspace crates are re-exported under short names.

pub use hotspot_app as app;
pub use hotspot_core as core;
pub use hotspot_tui as tui;

// Re-export main entry point
pub use hotspot_tui::run;

//! Theme for the hotspot form TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Icon set with Nerd Font glyphs and Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

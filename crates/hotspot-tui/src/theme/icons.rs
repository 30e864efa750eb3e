//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use hotspot_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "*",
        }
    }

    pub fn toggle_on(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f205}", // nf-fa-toggle_on
            IconMode::Unicode => "[ ON]",
        }
    }

    pub fn toggle_off(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f204}", // nf-fa-toggle_off
            IconMode::Unicode => "[OFF]",
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0da}", // nf-fa-caret_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }
}

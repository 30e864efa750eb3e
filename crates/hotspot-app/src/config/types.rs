//! Configuration types for the hotspot form
//!
//! Defines:
//! - `Settings` - Everything read from `.hotspot/config.toml`
//! - `HotspotSettings` - Initial form state
//! - `UiSettings` / `IconMode` - Terminal presentation

use hotspot_core::{Hotspot, DEFAULT_SECRET};
use serde::{Deserialize, Serialize};

/// Global application settings from `.hotspot/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub hotspot: HotspotSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Initial state for the form
    pub fn initial_state(&self) -> Hotspot {
        Hotspot::new(self.hotspot.enabled, self.hotspot.secret.clone())
    }
}

/// Initial values of the form state
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HotspotSettings {
    /// Start with the hotspot switched on
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Initial password
    #[serde(default = "default_secret")]
    pub secret: String,
}

impl Default for HotspotSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            secret: default_secret(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_string()
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Draw the password detail as bullets instead of clear text
    #[serde(default)]
    pub mask_secret: bool,
}

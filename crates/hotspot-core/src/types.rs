//! Domain state for the hotspot form

use std::fmt;

/// Footer shown under the toggle section while the hotspot is on
pub const ENABLED_SECTION_TITLE: &str = "Personal Hotspot Enabled";

/// Placeholder secret used until the user picks one
pub const DEFAULT_SECRET: &str = "hello";

/// The single source of truth for the form.
///
/// A plain value: every change goes through the store, which swaps in a new
/// value as a whole. Derived display text is computed from the fields on
/// demand and never stored alongside them.
#[derive(Clone, PartialEq, Eq)]
pub struct Hotspot {
    /// Whether the personal hotspot is switched on
    pub enabled: bool,

    /// Network password
    pub secret: String,
}

impl Default for Hotspot {
    fn default() -> Self {
        Self {
            enabled: true,
            secret: DEFAULT_SECRET.to_string(),
        }
    }
}

impl Hotspot {
    pub fn new(enabled: bool, secret: impl Into<String>) -> Self {
        Self {
            enabled,
            secret: secret.into(),
        }
    }

    /// Footer text for the toggle section, a function of `enabled` only
    pub fn enabled_section_title(&self) -> Option<String> {
        self.enabled.then(|| ENABLED_SECTION_TITLE.to_string())
    }
}

// The secret never reaches the log file in clear text.
impl fmt::Debug for Hotspot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hotspot")
            .field("enabled", &self.enabled)
            .field("secret", &format_args!("<{} chars>", self.secret.chars().count()))
            .finish()
    }
}

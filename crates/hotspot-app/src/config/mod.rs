//! Configuration file parsing for the hotspot form
//!
//! Supports:
//! - `.hotspot/config.toml` - Initial form state and UI preferences

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;

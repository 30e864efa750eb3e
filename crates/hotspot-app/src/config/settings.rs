//! Settings parser for .hotspot/config.toml

use super::types::Settings;
use hotspot_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".hotspot";

const DEFAULT_CONFIG: &str = r#"# Hotspot Form Configuration

[hotspot]
enabled = true          # Initial position of the Personal Hotspot switch
secret = "hello"        # Initial password

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
mask_secret = false     # Show the password detail as bullets
"#;

/// Load settings from `.hotspot/config.toml` under `project_path`.
///
/// A missing or broken file is not an error: the form falls back to
/// defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(CONFIG_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.hotspot/config.toml` with commented defaults if it is missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let config_dir = project_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .hotspot dir: {}", e)))?;
        info!("Created {:?}", config_dir);
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

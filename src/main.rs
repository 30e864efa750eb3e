//! Hotspot Form - Personal Hotspot settings in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use hotspot_form::app::config::{self, Settings};
use hotspot_form::core::logging;

/// Personal Hotspot settings form
#[derive(Parser, Debug)]
#[command(name = "hotspot")]
#[command(about = "Personal Hotspot settings form", long_about = None)]
struct Args {
    /// Directory holding .hotspot/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default .hotspot/config.toml and exit
    #[arg(long)]
    init: bool,

    /// Start with the hotspot switched off
    #[arg(long)]
    disabled: bool,

    /// Start with this password
    #[arg(long, value_name = "VALUE")]
    secret: Option<String>,
}

impl Args {
    /// Command line flags win over the config file
    fn apply_overrides(&self, settings: &mut Settings) {
        if self.disabled {
            settings.hotspot.enabled = false;
        }
        if let Some(secret) = &self.secret {
            settings.hotspot.secret = secret.clone();
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        config::init_config_dir(&base_path)?;
        eprintln!(
            "Created {}",
            base_path
                .join(config::CONFIG_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    logging::init()?;

    let mut settings = config::load_settings(&base_path);
    args.apply_overrides(&mut settings);

    hotspot_form::run(settings)?;
    Ok(())
}

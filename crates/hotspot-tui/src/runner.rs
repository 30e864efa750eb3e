//! Main TUI runner - entry point and event loop

use hotspot_app::config::Settings;
use hotspot_app::handler::update;
use hotspot_app::message::Message;
use hotspot_app::state::AppState;
use hotspot_core::prelude::*;

use crate::host::TableHost;
use crate::{event, render, terminal};

/// Run the form until the user quits
pub fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting hotspot form: enabled={} icons={}",
        settings.hotspot.enabled, settings.ui.icons
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::new(settings, TableHost::new());

    let result = run_loop(&mut term, &mut state);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));
    info!("Hotspot form closed");

    finish(result, restored)
}

/// Loop errors take precedence over a failed restore
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState<TableHost>) -> Result<()> {
    while !state.should_quit {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll().context("Failed to poll terminal events")? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up message it produces
pub fn process_message(state: &mut AppState<TableHost>, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

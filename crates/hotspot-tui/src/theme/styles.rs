//! Semantic style builders for the hotspot form.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Row styles ---

/// Label of a row, bold when under the cursor
pub fn row_label(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

/// "Black on Cyan" - a row showing pressed feedback
pub fn pressed() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn switch(is_on: bool) -> Style {
    let color = if is_on {
        palette::STATUS_GREEN
    } else {
        palette::STATUS_RED
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Section footer; highlighted while its change transition runs
pub fn footer(flashing: bool) -> Style {
    if flashing {
        Style::default()
            .fg(palette::STATUS_YELLOW)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

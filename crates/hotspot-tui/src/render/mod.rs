//! Main render/view function (View in TEA pattern)


use hotspot_app::navigation::Route;
use hotspot_app::state::AppState;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::host::TableHost;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Apart from realizing and dropping footer elements in the host, this does
/// not modify state.
pub fn view(frame: &mut Frame, state: &AppState<TableHost>) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let [header_area, content_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let icons = IconSet::new(state.settings.ui.icons);
    let navigator = state.navigator();
    let on_form = navigator.is_root();

    render_header(frame, header_area, navigator.title(), on_form, &icons);

    if on_form {
        let toggle = state.form.toggle();
        state.form.with_view_mut(|sections, host| {
            let list = widgets::FormList::new(sections, toggle, &state.view_state, icons)
                .mask_secret(state.settings.ui.mask_secret);
            frame.render_stateful_widget(list, content_area, host);
        });
    } else {
        navigator.with_top(|route| match route {
            Route::PasswordEditor(editor) => {
                frame.render_widget(widgets::PasswordEditorView::new(editor, icons), content_area);
            }
        });
    }

    render_hints(frame.buffer_mut(), hints_area, on_form);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, on_form: bool, icons: &IconSet) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    if on_form {
        spans.push(Span::styled(format!("{} ", icons.settings()), styles::accent()));
    } else {
        spans.push(Span::styled(format!("{} ", icons.back()), styles::accent()));
    }
    spans.push(Span::styled(
        title,
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD),
    ));

    let line = Line::from(spans);
    frame
        .buffer_mut()
        .set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(2));
}

fn render_hints(buf: &mut ratatui::buffer::Buffer, area: Rect, on_form: bool) {
    let hints: &[(&str, &str)] = if on_form {
        &[
            ("j/k", "Navigate"),
            ("Space", "Toggle"),
            ("Enter", "Select"),
            ("q", "Quit"),
        ]
    } else {
        &[("Enter", "Save"), ("Esc", "Back")]
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!(" {}", label), styles::text_muted()));
    }

    Line::from(spans)
        .alignment(Alignment::Center)
        .render(area, buf);
}

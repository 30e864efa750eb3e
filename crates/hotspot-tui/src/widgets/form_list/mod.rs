//! Sectioned form list widget
//!
//! Draws the form's sections as a grouped list: a gap, the rows, then the
//! section footer. Footers are drawn from the [`TableHost`]'s realized
//! elements, not from the sections, so a footer shows whatever text the host
//! was last given. Rendering realizes footers that fit in the area and drops
//! the ones that do not.


use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthStr;

use hotspot_app::form::{Accessory, FormRow, IndexPath, Section};
use hotspot_app::state::FormViewState;
use hotspot_app::ToggleControl;

use crate::host::TableHost;
use crate::theme::{icons::IconSet, styles};

/// Blank lines above each section
const SECTION_GAP: u16 = 1;

/// Left indent of footer text
const FOOTER_INDENT: u16 = 3;

const MASK_CHAR: char = '\u{2022}'; // •

/// Grouped list rendering of the form sections
pub struct FormList<'a> {
    sections: &'a [Section],
    toggle: ToggleControl,
    view_state: &'a FormViewState,
    icons: IconSet,
    mask_secret: bool,
}

impl<'a> FormList<'a> {
    pub fn new(
        sections: &'a [Section],
        toggle: ToggleControl,
        view_state: &'a FormViewState,
        icons: IconSet,
    ) -> Self {
        Self {
            sections,
            toggle,
            view_state,
            icons,
            mask_secret: false,
        }
    }

    /// Draw detail text as bullets
    pub fn mask_secret(mut self, mask: bool) -> Self {
        self.mask_secret = mask;
        self
    }
}

impl StatefulWidget for FormList<'_> {
    type State = TableHost;

    fn render(self, area: Rect, buf: &mut Buffer, host: &mut TableHost) {
        let mut y = area.top();

        for (section_index, section) in self.sections.iter().enumerate() {
            y = y.saturating_add(SECTION_GAP);

            for (row_index, row) in section.rows.iter().enumerate() {
                if y < area.bottom() {
                    let row_area = Rect::new(area.x, y, area.width, 1);
                    self.render_row(row_area, buf, row, IndexPath::new(section_index, row_index));
                }
                y = y.saturating_add(1);
            }

            if y >= area.bottom() {
                host.unrealize(section_index);
                continue;
            }

            host.realize(section_index, section.footer_text.clone());
            if let Some(footer) = host.footer(section_index) {
                match footer.text() {
                    Some(text) if footer.height() > 0 => {
                        let x = area.x.saturating_add(FOOTER_INDENT);
                        let width = area.width.saturating_sub(FOOTER_INDENT);
                        let style = styles::footer(footer.is_flashing());
                        buf.set_line(x, y, &Line::from(Span::styled(text, style)), width);
                    }
                    _ => {}
                }
                y = y.saturating_add(footer.height());
            }
        }
    }
}

impl FormList<'_> {
    fn render_row(&self, area: Rect, buf: &mut Buffer, row: &FormRow, path: IndexPath) {
        let is_selected = self.view_state.selected == path;
        let is_pressed = self.view_state.pressed == Some(path);

        let indicator = if is_selected { self.icons.cursor() } else { " " };
        let left = Line::from(vec![
            Span::styled(format!(" {} ", indicator), styles::accent()),
            Span::styled(row.primary_text.as_str(), styles::row_label(is_selected)),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let right = self.accessory_spans(row);
        let right_width: usize = right.iter().map(|s| s.content.width()).sum();
        let right_width = u16::try_from(right_width).unwrap_or(u16::MAX);
        if right_width < area.width {
            let x = area.right().saturating_sub(right_width + 1);
            buf.set_line(x, area.y, &Line::from(right), right_width);
        }

        if is_pressed {
            buf.set_style(area, styles::pressed());
        }
    }

    fn accessory_spans(&self, row: &FormRow) -> Vec<Span<'static>> {
        let mut spans = Vec::new();

        if let Some(detail) = &row.detail_text {
            let shown = if self.mask_secret {
                MASK_CHAR.to_string().repeat(detail.chars().count())
            } else {
                detail.clone()
            };
            spans.push(Span::styled(shown, styles::text_secondary()));
            spans.push(Span::raw(" "));
        }

        match row.accessory {
            Accessory::Toggle => {
                let is_on = self.toggle.is_on();
                let icon = if is_on {
                    self.icons.toggle_on()
                } else {
                    self.icons.toggle_off()
                };
                spans.push(Span::styled(icon, styles::switch(is_on)));
            }
            Accessory::Disclosure => {
                spans.push(Span::styled(self.icons.chevron_right(), styles::text_muted()));
            }
            Accessory::None => {}
        }

        spans
    }
}

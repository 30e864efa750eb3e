//! Password editor screen widget

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hotspot_app::navigation::PasswordEditor;

use crate::theme::{icons::IconSet, palette, styles};

const CURSOR: &str = "\u{2588}"; // █

/// Single text field bound to a [`PasswordEditor`]
pub struct PasswordEditorView<'a> {
    editor: &'a PasswordEditor,
    icons: IconSet,
}

impl<'a> PasswordEditorView<'a> {
    pub fn new(editor: &'a PasswordEditor, icons: IconSet) -> Self {
        Self { editor, icons }
    }
}

impl Widget for PasswordEditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, field_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let block = styles::glass_block(true).title(Line::from(vec![
            Span::styled(format!(" {} ", self.icons.lock()), styles::accent()),
            Span::styled("Password ", styles::text_secondary()),
        ]));

        let field = Paragraph::new(Line::from(vec![
            Span::styled(
                self.editor.text(),
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(CURSOR, styles::accent()),
        ]))
        .block(block);
        field.render(field_area, buf);

        let hint = Line::from(Span::styled(
            "  Changes apply when you leave this screen",
            styles::text_muted(),
        ));
        buf.set_line(hint_area.x, hint_area.y, &hint, hint_area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_app::config::IconMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(editor: &PasswordEditor) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let view = PasswordEditorView::new(editor, IconSet::new(IconMode::Unicode));
                frame.render_widget(view, frame.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_editor_shows_text_and_cursor() {
        let editor = PasswordEditor::new("hello", |_| {});
        let content = render(&editor);

        assert!(content.contains("Password"));
        assert!(content.contains("hello\u{2588}"));
    }

    #[test]
    fn test_editor_shows_typed_text() {
        let mut editor = PasswordEditor::new("ab", |_| {});
        editor.insert_char('c');
        let content = render(&editor);

        assert!(content.contains("abc\u{2588}"));
    }
}

//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::controller::HotspotForm;
use crate::form::IndexPath;
use crate::host::HostListView;
use crate::navigation::Navigator;

/// Ticks a pressed row stays highlighted
pub const PRESS_FEEDBACK_TICKS: u8 = 3;

/// Cursor and pressed-row feedback for the form screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewState {
    /// Row under the cursor
    pub selected: IndexPath,

    /// Row currently showing pressed feedback
    pub pressed: Option<IndexPath>,

    press_ticks: u8,
}

impl Default for FormViewState {
    fn default() -> Self {
        Self {
            selected: IndexPath::new(0, 0),
            pressed: None,
            press_ticks: 0,
        }
    }
}

impl FormViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next row, crossing section boundaries and wrapping
    pub fn select_next<H: HostListView + 'static>(&mut self, form: &HotspotForm<H>) {
        let rows = all_rows(form);
        if let Some(pos) = rows.iter().position(|p| *p == self.selected) {
            self.selected = rows[(pos + 1) % rows.len()];
        } else if let Some(first) = rows.first() {
            self.selected = *first;
        }
    }

    /// Move to the previous row, crossing section boundaries and wrapping
    pub fn select_previous<H: HostListView + 'static>(&mut self, form: &HotspotForm<H>) {
        let rows = all_rows(form);
        if let Some(pos) = rows.iter().position(|p| *p == self.selected) {
            self.selected = rows[(pos + rows.len() - 1) % rows.len()];
        } else if let Some(first) = rows.first() {
            self.selected = *first;
        }
    }

    pub fn select_first<H: HostListView + 'static>(&mut self, form: &HotspotForm<H>) {
        if let Some(first) = all_rows(form).first() {
            self.selected = *first;
        }
    }

    pub fn select_last<H: HostListView + 'static>(&mut self, form: &HotspotForm<H>) {
        if let Some(last) = all_rows(form).last() {
            self.selected = *last;
        }
    }

    /// Show pressed feedback on `path` for a few ticks
    pub fn press(&mut self, path: IndexPath) {
        self.pressed = Some(path);
        self.press_ticks = PRESS_FEEDBACK_TICKS;
    }

    pub fn tick(&mut self) {
        if self.press_ticks > 0 {
            self.press_ticks -= 1;
            if self.press_ticks == 0 {
                self.pressed = None;
            }
        }
    }
}

fn all_rows<H: HostListView + 'static>(form: &HotspotForm<H>) -> Vec<IndexPath> {
    (0..form.number_of_sections())
        .flat_map(|section| {
            (0..form.number_of_rows(section)).map(move |row| IndexPath::new(section, row))
        })
        .collect()
}

/// Complete application state
#[derive(Debug)]
pub struct AppState<H> {
    pub form: HotspotForm<H>,
    pub view_state: FormViewState,
    pub settings: Settings,
    pub should_quit: bool,
}

impl<H: HostListView + 'static> AppState<H> {
    /// Build the form from the configured initial state
    pub fn new(settings: Settings, host: H) -> Self {
        let form = HotspotForm::new(settings.initial_state(), host, Navigator::new());
        Self {
            form,
            view_state: FormViewState::new(),
            settings,
            should_quit: false,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        self.form.navigator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingHost;

    fn app() -> AppState<RecordingHost> {
        AppState::new(Settings::default(), RecordingHost::new())
    }

    #[test]
    fn test_select_next_crosses_sections_and_wraps() {
        let mut app = app();
        assert_eq!(app.view_state.selected, IndexPath::new(0, 0));

        app.view_state.select_next(&app.form);
        assert_eq!(app.view_state.selected, IndexPath::new(1, 0));

        app.view_state.select_next(&app.form);
        assert_eq!(app.view_state.selected, IndexPath::new(0, 0));
    }

    #[test]
    fn test_select_previous_wraps() {
        let mut app = app();
        app.view_state.select_previous(&app.form);
        assert_eq!(app.view_state.selected, IndexPath::new(1, 0));
    }

    #[test]
    fn test_select_first_and_last() {
        let mut app = app();
        app.view_state.select_last(&app.form);
        assert_eq!(app.view_state.selected, IndexPath::new(1, 0));
        app.view_state.select_first(&app.form);
        assert_eq!(app.view_state.selected, IndexPath::new(0, 0));
    }

    #[test]
    fn test_press_feedback_expires() {
        let mut view_state = FormViewState::new();
        view_state.press(IndexPath::new(1, 0));

        for _ in 0..PRESS_FEEDBACK_TICKS - 1 {
            view_state.tick();
            assert_eq!(view_state.pressed, Some(IndexPath::new(1, 0)));
        }
        view_state.tick();
        assert_eq!(view_state.pressed, None);
    }

    #[test]
    fn test_app_state_uses_configured_state() {
        let mut settings = Settings::default();
        settings.hotspot.enabled = false;
        settings.hotspot.secret = "abc".to_string();

        let app = AppState::new(settings, RecordingHost::new());
        assert!(!app.form.state().enabled);
        assert!(!app.form.toggle().is_on());
        assert_eq!(app.form.state().secret, "abc");
    }
}

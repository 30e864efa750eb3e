//! Section construction and the state → display text dependency table.
//!
//! The form has a fixed shape: section 0 holds the toggle row, section 1
//! the password row. [`build_sections`] creates that shape once. From then on
//! the state-changed hook calls [`patch_sections`], which rewrites every slot
//! listed in [`HOTSPOT_BINDINGS`] from the new state. The table is applied in
//! full on every change; it does not track which field moved.

use hotspot_core::Hotspot;

use crate::form::{Accessory, FormRow, IndexPath, Section};

/// Section holding the enable toggle
pub const TOGGLE_SECTION: usize = 0;

/// Section holding the password row
pub const PASSWORD_SECTION: usize = 1;

pub const TOGGLE_ROW: IndexPath = IndexPath::new(TOGGLE_SECTION, 0);
pub const PASSWORD_ROW: IndexPath = IndexPath::new(PASSWORD_SECTION, 0);

pub const TOGGLE_LABEL: &str = "Personal Hotspot";
pub const PASSWORD_LABEL: &str = "Password";

/// A display text field inside the built sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Footer text of a section
    Footer { section: usize },
    /// Detail text of a row
    Detail(IndexPath),
}

/// One entry of the dependency table: where the text goes and how it is
/// computed from the state
pub struct Binding<S> {
    pub slot: Slot,
    pub derive: fn(&S) -> Option<String>,
}

fn toggle_footer(state: &Hotspot) -> Option<String> {
    state.enabled_section_title()
}

fn password_detail(state: &Hotspot) -> Option<String> {
    Some(state.secret.clone())
}

/// Slots that depend on the hotspot state
pub const HOTSPOT_BINDINGS: &[Binding<Hotspot>] = &[
    Binding {
        slot: Slot::Footer {
            section: TOGGLE_SECTION,
        },
        derive: toggle_footer,
    },
    Binding {
        slot: Slot::Detail(PASSWORD_ROW),
        derive: password_detail,
    },
];

/// Compute the text of every bound slot. Pure: no access to the sections.
pub fn derive<S>(bindings: &[Binding<S>], state: &S) -> Vec<(Slot, Option<String>)> {
    bindings
        .iter()
        .map(|binding| (binding.slot, (binding.derive)(state)))
        .collect()
}

/// Write freshly derived text into the already-built sections.
///
/// # Panics
///
/// Panics if a bound slot does not exist. That means the sections were
/// patched before being built, which is a programming error.
pub fn patch_sections<S>(sections: &mut [Section], bindings: &[Binding<S>], state: &S) {
    for (slot, text) in derive(bindings, state) {
        match slot {
            Slot::Footer { section } => {
                let Some(target) = sections.get_mut(section) else {
                    panic!("patched footer of section {section} before sections were built");
                };
                target.footer_text = text;
            }
            Slot::Detail(path) => {
                let Some(row) = sections
                    .get_mut(path.section)
                    .and_then(|s| s.rows.get_mut(path.row))
                else {
                    panic!("patched detail of row {path} before sections were built");
                };
                row.detail_text = text;
            }
        }
    }
}

/// Build the form's sections from the initial state.
///
/// `open_editor` becomes the password row's selection action.
pub fn build_sections(state: &Hotspot, open_editor: impl Fn() + 'static) -> Vec<Section> {
    let toggle_row = FormRow::new(TOGGLE_LABEL).accessory(Accessory::Toggle);

    let password_row = FormRow::new(PASSWORD_LABEL)
        .detail(state.secret.clone())
        .accessory(Accessory::Disclosure)
        .on_select(open_editor);

    vec![
        Section::new(vec![toggle_row], state.enabled_section_title()),
        Section::new(vec![password_row], None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(state: &Hotspot) -> Vec<Section> {
        build_sections(state, || {})
    }

    #[test]
    fn test_build_shape() {
        let sections = built(&Hotspot::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[TOGGLE_SECTION].rows.len(), 1);
        assert_eq!(sections[PASSWORD_SECTION].rows.len(), 1);

        let toggle = &sections[TOGGLE_SECTION].rows[0];
        assert_eq!(toggle.primary_text, "Personal Hotspot");
        assert!(!toggle.is_selectable);
        assert!(toggle.on_select.is_none());
        assert_eq!(toggle.accessory, Accessory::Toggle);

        let password = &sections[PASSWORD_SECTION].rows[0];
        assert_eq!(password.primary_text, "Password");
        assert_eq!(password.detail_text.as_deref(), Some("hello"));
        assert!(password.is_selectable);
        assert!(password.on_select.is_some());
        assert_eq!(password.accessory, Accessory::Disclosure);
    }

    #[test]
    fn test_build_footers_follow_state() {
        let sections = built(&Hotspot::default());
        assert_eq!(
            sections[TOGGLE_SECTION].footer_text.as_deref(),
            Some("Personal Hotspot Enabled")
        );
        assert_eq!(sections[PASSWORD_SECTION].footer_text, None);

        let sections = built(&Hotspot::new(false, "x"));
        assert_eq!(sections[TOGGLE_SECTION].footer_text, None);
    }

    #[test]
    fn test_derive_is_repeatable() {
        for enabled in [true, false] {
            for secret in ["", "hello", "world", "p@ss word"] {
                let state = Hotspot::new(enabled, secret);
                let first = derive(HOTSPOT_BINDINGS, &state);
                assert_eq!(first, derive(HOTSPOT_BINDINGS, &state));

                let detail = first
                    .iter()
                    .find(|(slot, _)| *slot == Slot::Detail(PASSWORD_ROW))
                    .map(|(_, text)| text.clone());
                assert_eq!(detail, Some(Some(secret.to_string())));
            }
        }
    }

    #[test]
    fn test_derive_links_footer_to_enabled() {
        for enabled in [true, false] {
            let state = Hotspot::new(enabled, "s");
            let derived = derive(HOTSPOT_BINDINGS, &state);
            let footer = derived
                .iter()
                .find(|(slot, _)| {
                    *slot
                        == Slot::Footer {
                            section: TOGGLE_SECTION,
                        }
                })
                .map(|(_, text)| text.clone());
            let expected = enabled.then(|| "Personal Hotspot Enabled".to_string());
            assert_eq!(footer, Some(expected));
        }
    }

    #[test]
    fn test_patch_updates_only_bound_slots() {
        let mut sections = built(&Hotspot::default());
        patch_sections(&mut sections, HOTSPOT_BINDINGS, &Hotspot::new(false, "world"));

        assert_eq!(sections[TOGGLE_SECTION].footer_text, None);
        assert_eq!(
            sections[PASSWORD_SECTION].rows[0].detail_text.as_deref(),
            Some("world")
        );
        assert_eq!(sections[TOGGLE_SECTION].rows[0].detail_text, None);
        assert_eq!(sections[PASSWORD_SECTION].footer_text, None);
    }

    #[test]
    fn test_patch_keeps_row_identity() {
        let mut sections = built(&Hotspot::default());
        let rows_before = sections[PASSWORD_SECTION].rows.as_ptr();
        let sections_before = sections.as_ptr();

        patch_sections(&mut sections, HOTSPOT_BINDINGS, &Hotspot::new(true, "world"));

        assert_eq!(sections.len(), 2);
        assert!(std::ptr::eq(sections.as_ptr(), sections_before));
        assert!(std::ptr::eq(sections[PASSWORD_SECTION].rows.as_ptr(), rows_before));
    }

    #[test]
    #[should_panic(expected = "before sections were built")]
    fn test_patch_before_build_panics() {
        let mut sections: Vec<Section> = Vec::new();
        patch_sections(&mut sections, HOTSPOT_BINDINGS, &Hotspot::default());
    }

    #[test]
    #[should_panic(expected = "row [1, 0]")]
    fn test_patch_missing_row_panics() {
        let mut sections = vec![
            Section::new(vec![FormRow::new("only")], None),
            Section::new(Vec::new(), None),
        ];
        patch_sections(&mut sections, HOTSPOT_BINDINGS, &Hotspot::default());
    }
}

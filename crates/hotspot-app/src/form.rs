//! Row and section descriptors for the sectioned form list.
//!
//! Descriptors are passive view-model data. The set of sections and rows is
//! built once when the form is constructed; afterwards only the text fields
//! inside existing rows and footers are patched.

use std::fmt;
use std::rc::Rc;

/// Zero-argument callback run when a row is selected
pub type Action = Rc<dyn Fn()>;

/// Position of a row: section index plus row index within the section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// Trailing decoration drawn by the host for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accessory {
    #[default]
    None,
    /// An on/off switch; its state lives in the toggle control, not the row
    Toggle,
    /// A chevron hinting that selecting the row opens another screen
    Disclosure,
}

/// One row of the form
pub struct FormRow {
    /// Leading label
    pub primary_text: String,

    /// Trailing detail text (e.g. the current password)
    pub detail_text: Option<String>,

    /// Whether the host may show pressed feedback for this row
    pub is_selectable: bool,

    /// Callback run on selection. Present iff `is_selectable`.
    pub on_select: Option<Action>,

    pub accessory: Accessory,
}

impl FormRow {
    /// Create a non-interactive row with just a label
    pub fn new(primary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            detail_text: None,
            is_selectable: false,
            on_select: None,
            accessory: Accessory::None,
        }
    }

    pub fn detail(mut self, text: impl Into<String>) -> Self {
        self.detail_text = Some(text.into());
        self
    }

    pub fn accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = accessory;
        self
    }

    /// Make the row selectable with the given action.
    ///
    /// Selectability and the action are set together so a row is never
    /// highlightable without something to run.
    pub fn on_select(mut self, action: impl Fn() + 'static) -> Self {
        self.is_selectable = true;
        self.on_select = Some(Rc::new(action));
        self
    }
}

impl fmt::Debug for FormRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRow")
            .field("primary_text", &self.primary_text)
            .field("detail_text", &self.detail_text)
            .field("is_selectable", &self.is_selectable)
            .field("on_select", &self.on_select.as_ref().map(|_| "<action>"))
            .field("accessory", &self.accessory)
            .finish()
    }
}

/// A group of rows with optional footer text
#[derive(Debug)]
pub struct Section {
    /// Rows in display order; indices are the row identity for this run
    pub rows: Vec<FormRow>,

    pub footer_text: Option<String>,
}

impl Section {
    pub fn new(rows: Vec<FormRow>, footer_text: Option<String>) -> Self {
        Self { rows, footer_text }
    }
}

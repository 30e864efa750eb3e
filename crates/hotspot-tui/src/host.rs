//! Terminal list host.
//!
//! [`TableHost`] plays the part of a platform table view for the form. It
//! keeps footer elements for the sections that are on screen; the form widget
//! realizes a footer when it becomes visible and drops it when it does not
//! fit. A realized footer keeps whatever text it was given until someone
//! patches it.
//!
//! Update batches nest. Closing the outermost batch commits a layout pass:
//! every footer marked for layout gets its height recomputed. If default
//! animations are on at that moment, footers whose text changed start a short
//! highlight transition that [`HostListView::tick`] runs down.

use std::collections::BTreeMap;

use hotspot_app::host::{FooterView, HostListView};
use tracing::trace;

/// Ticks a footer stays highlighted after an animated change
pub const FLASH_TICKS: u8 = 4;

/// A realized section footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterElement {
    text: Option<String>,
    height: u16,
    needs_layout: bool,
    changed: bool,
    flash: u8,
}

impl FooterElement {
    fn new(text: Option<String>) -> Self {
        let height = footer_height(text.as_deref());
        Self {
            text,
            height,
            needs_layout: false,
            changed: false,
            flash: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Rows taken on screen, as of the last committed layout pass
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// `true` while the change transition is running
    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }
}

impl FooterView for FooterElement {
    fn set_text(&mut self, text: Option<&str>) {
        if self.text.as_deref() != text {
            self.changed = true;
        }
        self.text = text.map(str::to_string);
    }

    fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }
}

fn footer_height(text: Option<&str>) -> u16 {
    match text {
        Some(_) => 1,
        None => 0,
    }
}

/// Terminal stand-in for a platform table view
#[derive(Debug)]
pub struct TableHost {
    footers: BTreeMap<usize, FooterElement>,
    batch_depth: usize,
    animations: bool,
    layout_passes: u64,
}

impl Default for TableHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TableHost {
    pub fn new() -> Self {
        Self {
            footers: BTreeMap::new(),
            batch_depth: 0,
            animations: true,
            layout_passes: 0,
        }
    }

    /// Realize the footer of `section` with `text`, unless it already is.
    ///
    /// An already realized footer keeps its current text.
    pub fn realize(&mut self, section: usize, text: Option<String>) {
        self.footers.entry(section).or_insert_with(|| {
            trace!("Realizing footer {}", section);
            FooterElement::new(text)
        });
    }

    /// Drop the footer of `section` (it left the screen)
    pub fn unrealize(&mut self, section: usize) {
        if self.footers.remove(&section).is_some() {
            trace!("Dropped footer {}", section);
        }
    }

    pub fn is_realized(&self, section: usize) -> bool {
        self.footers.contains_key(&section)
    }

    pub fn footer(&self, section: usize) -> Option<&FooterElement> {
        self.footers.get(&section)
    }

    /// Number of committed layout passes
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    pub fn batch_depth(&self) -> usize {
        self.batch_depth
    }

    fn commit_layout(&mut self) {
        let animate = self.animations;
        for (section, footer) in self.footers.iter_mut() {
            if footer.needs_layout {
                footer.height = footer_height(footer.text.as_deref());
                footer.needs_layout = false;
            }
            if footer.changed {
                if animate {
                    trace!("Footer {} changed, animating", section);
                    footer.flash = FLASH_TICKS;
                }
                footer.changed = false;
            }
        }
        self.layout_passes += 1;
    }
}

impl HostListView for TableHost {
    type Footer = FooterElement;

    fn footer_view(&mut self, section: usize) -> Option<&mut FooterElement> {
        self.footers.get_mut(&section)
    }

    fn begin_updates(&mut self) {
        self.batch_depth += 1;
    }

    fn end_updates(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 {
            self.commit_layout();
        }
    }

    fn animations_enabled(&self) -> bool {
        self.animations
    }

    fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations = enabled;
    }

    fn tick(&mut self) {
        for footer in self.footers.values_mut() {
            footer.flash = footer.flash.saturating_sub(1);
        }
    }
}

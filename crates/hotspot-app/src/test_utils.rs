//! Test utilities for host-facing code
//!
//! Provides [`RecordingHost`], a fake list view that records every command
//! the form sends it, in order.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::host::{FooterView, HostListView};

/// A command received by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    SetAnimations(bool),
    BeginUpdates,
    EndUpdates,
    SetFooterText(usize, Option<String>),
    NeedsLayout(usize),
}

type EventLog = Rc<RefCell<Vec<HostEvent>>>;

/// Footer element handed out by [`RecordingHost`]
#[derive(Debug)]
pub struct RecordingFooter {
    section: usize,
    text: Option<String>,
    panic_on_set: bool,
    log: EventLog,
}

impl FooterView for RecordingFooter {
    fn set_text(&mut self, text: Option<&str>) {
        if self.panic_on_set {
            panic!("footer {} refused the update", self.section);
        }
        self.text = text.map(str::to_string);
        self.log
            .borrow_mut()
            .push(HostEvent::SetFooterText(self.section, self.text.clone()));
    }

    fn set_needs_layout(&mut self) {
        self.log
            .borrow_mut()
            .push(HostEvent::NeedsLayout(self.section));
    }
}

/// Fake host list view that records commands
#[derive(Debug)]
pub struct RecordingHost {
    footers: BTreeMap<usize, RecordingFooter>,
    animations: bool,
    depth: usize,
    log: EventLog,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Host with no realized footers
    pub fn new() -> Self {
        Self {
            footers: BTreeMap::new(),
            animations: true,
            depth: 0,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Host with realized (empty) footers for the given sections
    pub fn with_realized(sections: &[usize]) -> Self {
        let mut host = Self::new();
        for &section in sections {
            host.realize(section);
        }
        host
    }

    pub fn realize(&mut self, section: usize) {
        let footer = RecordingFooter {
            section,
            text: None,
            panic_on_set: false,
            log: Rc::clone(&self.log),
        };
        self.footers.insert(section, footer);
    }

    pub fn unrealize(&mut self, section: usize) {
        self.footers.remove(&section);
    }

    /// Make the footer of `section` panic when its text is set
    pub fn panic_on_footer(&mut self, section: usize) {
        if let Some(footer) = self.footers.get_mut(&section) {
            footer.panic_on_set = true;
        }
    }

    /// Text of a realized footer; `None` when the footer is not realized
    pub fn footer_text(&self, section: usize) -> Option<Option<String>> {
        self.footers.get(&section).map(|f| f.text.clone())
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.log.borrow().clone()
    }

    pub fn clear_events(&mut self) {
        self.log.borrow_mut().clear();
    }

    pub fn batch_depth(&self) -> usize {
        self.depth
    }
}

impl HostListView for RecordingHost {
    type Footer = RecordingFooter;

    fn footer_view(&mut self, section: usize) -> Option<&mut RecordingFooter> {
        self.footers.get_mut(&section)
    }

    fn begin_updates(&mut self) {
        self.depth += 1;
        self.log.borrow_mut().push(HostEvent::BeginUpdates);
    }

    fn end_updates(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.log.borrow_mut().push(HostEvent::EndUpdates);
    }

    fn animations_enabled(&self) -> bool {
        self.animations
    }

    fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations = enabled;
        self.log
            .borrow_mut()
            .push(HostEvent::SetAnimations(enabled));
    }
}

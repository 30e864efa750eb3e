//! Selective footer refresh without a full reload.
//!
//! [`reload_section_footers`] pushes the current footer text of every section
//! into the host's realized footer elements:
//!
//! 1. default animations are suspended (restored by a drop guard, so a panic
//!    inside the pass still re-enables them),
//! 2. an update batch is opened,
//! 3. each realized footer gets its new text and is marked for layout,
//!    footers the host has not realized are skipped,
//! 4. the batch is closed, committing the layout,
//! 5. animations are restored.

use std::ops::{Deref, DerefMut};

use hotspot_core::prelude::*;

use crate::form::Section;
use crate::host::{FooterView, HostListView};

/// Outcome of one reconcile pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Sections whose realized footer was patched
    pub updated: Vec<usize>,
    /// Sections with no realized footer
    pub skipped: Vec<usize>,
}

/// Suspends the host's default animations for as long as it lives
struct AnimationsSuspended<'a, H: HostListView> {
    host: &'a mut H,
    previous: bool,
}

impl<'a, H: HostListView> AnimationsSuspended<'a, H> {
    fn new(host: &'a mut H) -> Self {
        let previous = host.animations_enabled();
        host.set_animations_enabled(false);
        Self { host, previous }
    }
}

impl<H: HostListView> Drop for AnimationsSuspended<'_, H> {
    fn drop(&mut self) {
        self.host.set_animations_enabled(self.previous);
    }
}

impl<H: HostListView> Deref for AnimationsSuspended<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: HostListView> DerefMut for AnimationsSuspended<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

/// Open update batch; closed on drop
struct UpdateBatch<'a, H: HostListView> {
    host: &'a mut H,
}

impl<'a, H: HostListView> UpdateBatch<'a, H> {
    fn begin(host: &'a mut H) -> Self {
        host.begin_updates();
        Self { host }
    }
}

impl<H: HostListView> Drop for UpdateBatch<'_, H> {
    fn drop(&mut self) {
        self.host.end_updates();
    }
}

/// Patch every realized footer with the sections' current footer text
pub fn reload_section_footers<H: HostListView>(
    host: &mut H,
    sections: &[Section],
) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let mut host = AnimationsSuspended::new(host);
    let mut batch = UpdateBatch::begin(&mut *host);

    for (index, section) in sections.iter().enumerate() {
        match batch.host.footer_view(index) {
            Some(footer) => {
                footer.set_text(section.footer_text.as_deref());
                footer.set_needs_layout();
                report.updated.push(index);
            }
            None => {
                trace!("Footer {} not realized, skipping", index);
                report.skipped.push(index);
            }
        }
    }

    drop(batch);
    drop(host);

    trace!(
        "Reconciled footers: updated={:?} skipped={:?}",
        report.updated,
        report.skipped
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormRow;
    use crate::test_utils::{HostEvent, RecordingHost};

    fn sections() -> Vec<Section> {
        vec![
            Section::new(
                vec![FormRow::new("Personal Hotspot")],
                Some("Personal Hotspot Enabled".to_string()),
            ),
            Section::new(vec![FormRow::new("Password")], None),
        ]
    }

    #[test]
    fn test_reconcile_event_order() {
        let mut host = RecordingHost::with_realized(&[0, 1]);
        reload_section_footers(&mut host, &sections());

        assert_eq!(
            host.events(),
            vec![
                HostEvent::SetAnimations(false),
                HostEvent::BeginUpdates,
                HostEvent::SetFooterText(0, Some("Personal Hotspot Enabled".to_string())),
                HostEvent::NeedsLayout(0),
                HostEvent::SetFooterText(1, None),
                HostEvent::NeedsLayout(1),
                HostEvent::EndUpdates,
                HostEvent::SetAnimations(true),
            ]
        );
    }

    #[test]
    fn test_missing_footer_is_skipped() {
        let mut host = RecordingHost::with_realized(&[1]);
        let report = reload_section_footers(&mut host, &sections());

        assert_eq!(report.updated, vec![1]);
        assert_eq!(report.skipped, vec![0]);
        assert!(host.footer_text(0).is_none());
        assert!(host.animations_enabled());
        assert_eq!(host.batch_depth(), 0);
    }

    #[test]
    fn test_no_realized_footers_completes() {
        let mut host = RecordingHost::new();
        let report = reload_section_footers(&mut host, &sections());

        assert!(report.updated.is_empty());
        assert_eq!(report.skipped, vec![0, 1]);
        assert!(host.animations_enabled());
    }

    #[test]
    fn test_second_pass_is_noop_for_text() {
        let mut host = RecordingHost::with_realized(&[0, 1]);
        let sections = sections();

        reload_section_footers(&mut host, &sections);
        let first = (host.footer_text(0), host.footer_text(1));
        reload_section_footers(&mut host, &sections);
        let second = (host.footer_text(0), host.footer_text(1));

        assert_eq!(first, second);
    }

    #[test]
    fn test_previous_animation_setting_is_restored() {
        let mut host = RecordingHost::with_realized(&[0]);
        host.set_animations_enabled(false);
        host.clear_events();

        reload_section_footers(&mut host, &sections());
        assert!(!host.animations_enabled());
    }

    #[test]
    fn test_animations_restored_after_panic() {
        let mut host = RecordingHost::with_realized(&[0, 1]);
        host.panic_on_footer(1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            reload_section_footers(&mut host, &sections());
        }));

        assert!(result.is_err());
        assert!(host.animations_enabled());
        assert_eq!(host.batch_depth(), 0);
    }
}

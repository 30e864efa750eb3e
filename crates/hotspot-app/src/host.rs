//! Boundary with the platform list widget.
//!
//! The form does not draw anything itself. It drives a host list view
//! through [`HostListView`]: footer elements are fetched by section index and
//! patched in place, inside an update batch, with default animations off.
//!
//! The other direction (the host asking the form for row counts, footer text,
//! highlight permission and selection) is served by
//! [`HotspotForm`](crate::controller::HotspotForm).

/// A footer element realized by the host
pub trait FooterView {
    /// Replace the footer's text
    fn set_text(&mut self, text: Option<&str>);

    /// Ask the host to re-measure this footer on the next layout pass
    fn set_needs_layout(&mut self);
}

/// Commands the form issues to the platform list widget
pub trait HostListView {
    type Footer: FooterView;

    /// The footer element currently realized for `section`, if any.
    ///
    /// `None` is a normal answer (e.g. the footer is off screen).
    fn footer_view(&mut self, section: usize) -> Option<&mut Self::Footer>;

    /// Open an update batch. Batches may nest.
    fn begin_updates(&mut self);

    /// Close an update batch; the outermost close commits pending layout
    fn end_updates(&mut self);

    fn animations_enabled(&self) -> bool;

    /// Turn the host's default change transitions on or off
    fn set_animations_enabled(&mut self, enabled: bool);

    /// Advance time-based visuals by one tick
    fn tick(&mut self) {}
}

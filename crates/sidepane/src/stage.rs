//! The host view seam.
//!
//! The container never draws. It tells a [`PaneStage`] where things go and
//! the host's own view system does the layout and rendering. `P` is whatever
//! handle the host uses for a pane (a view id, a widget, a controller).

/// Text for the placeholder shown until panes are configured.
pub const UNCONFIGURED_MESSAGE: &str = "You're seeing this message because the container's panes \
     haven't been configured. Call setup with at least a center pane.";

/// Host-side view operations the container drives.
///
/// Layout contract: the center region fills the container and is shifted
/// horizontally by the leading offset. The left pane is pinned to the center
/// region's leading edge (it sits just outside it), the right pane to its
/// trailing edge, so both move with the offset. The dim overlay covers the
/// center region.
pub trait PaneStage<P> {
    /// Install the center pane and the dim overlay above it.
    fn mount_center(&mut self, pane: &P);

    /// Install the left pane with the given width.
    fn mount_left(&mut self, pane: &P, width: f64);

    /// Install the right pane with the given width.
    fn mount_right(&mut self, pane: &P, width: f64);

    /// Shift the center region's leading edge by `offset`.
    fn set_offset(&mut self, offset: f64);

    /// Set the dim overlay's opacity. Values outside `[0, 1]` are passed
    /// through as computed.
    fn set_dim_alpha(&mut self, alpha: f64);

    /// Show the unconfigured placeholder with `message`.
    fn show_placeholder(&mut self, message: &str);

    /// Remove the unconfigured placeholder.
    fn hide_placeholder(&mut self);

    /// Ask the host to lay out after a batch of changes.
    fn request_layout(&mut self) {}
}

impl<P, S: PaneStage<P> + ?Sized> PaneStage<P> for Box<S> {
    fn mount_center(&mut self, pane: &P) {
        (**self).mount_center(pane);
    }

    fn mount_left(&mut self, pane: &P, width: f64) {
        (**self).mount_left(pane, width);
    }

    fn mount_right(&mut self, pane: &P, width: f64) {
        (**self).mount_right(pane, width);
    }

    fn set_offset(&mut self, offset: f64) {
        (**self).set_offset(offset);
    }

    fn set_dim_alpha(&mut self, alpha: f64) {
        (**self).set_dim_alpha(alpha);
    }

    fn show_placeholder(&mut self, message: &str) {
        (**self).show_placeholder(message);
    }

    fn hide_placeholder(&mut self) {
        (**self).hide_placeholder();
    }

    fn request_layout(&mut self) {
        (**self).request_layout();
    }
}

//! Gesture tracking: pan translation to live center-region offset.
//!
//! The offset for a pan update is computed from the resting position and the
//! cumulative horizontal translation:
//!
//! 1. Start from `dx`; add `W_left` when resting Left, subtract `W_right` when
//!    resting Right, so the value is measured from the canonical offset.
//! 2. Cap at `W_left`, then cap at `W_right`. Both caps always apply, so the
//!    offset never exceeds the smaller width even when that side has no pane.
//! 3. Normalize the sign (`max(0, x)` above zero, `min(0, x)` otherwise).
//!
//! There is no lower cap: dragging far left keeps decreasing the offset.

use sidepane_core::gesture::PanEvent;

use crate::position::{PanePosition, PaneSide, PaneWidths};

/// Live offset for a pan translation of `dx` while resting at `resting`.
#[must_use]
pub fn drag_offset(resting: PanePosition, dx: f64, widths: PaneWidths) -> f64 {
    let mut x = dx;
    if resting == PanePosition::Left {
        x += widths.left;
    }
    if resting == PanePosition::Right {
        x -= widths.right;
    }

    x = x.min(widths.left);
    x = x.min(widths.right);

    if x > 0.0 { x.max(0.0) } else { x.min(0.0) }
}

/// Which side a live offset is revealing. Zero counts as the right side.
#[must_use]
pub fn pan_direction(offset: f64) -> PaneSide {
    if offset > 0.0 {
        PaneSide::Left
    } else {
        PaneSide::Right
    }
}

/// Dim overlay opacity for a live offset, or `None` when no dim side is set.
///
/// Not clamped: an offset past the pane width yields an alpha above 1, and a
/// drag toward the opposite side yields a negative alpha.
#[must_use]
pub fn drag_dim_alpha(offset: f64, preferred: PanePosition, widths: PaneWidths) -> Option<f64> {
    match preferred {
        PanePosition::None => None,
        PanePosition::Left => Some(offset / widths.left),
        _ => Some(-offset / widths.right),
    }
}

/// Result of tracking one pan event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPan {
    /// Offset to apply to the center region.
    pub offset: f64,
    /// Side the offset is revealing.
    pub toward: PaneSide,
    /// Dim alpha to apply, when a dim side is configured.
    pub dim_alpha: Option<f64>,
}

/// Drag session state: where the container rests and where it is right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    showing: PanePosition,
    offset: f64,
    leading_constant: f64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    /// A session resting at center.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            showing: PanePosition::Center,
            offset: 0.0,
            leading_constant: 0.0,
        }
    }

    /// Resting position.
    #[must_use]
    pub const fn showing(&self) -> PanePosition {
        self.showing
    }

    /// Current offset.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Layout constant applied to the center region's leading edge.
    #[must_use]
    pub const fn leading_constant(&self) -> f64 {
        self.leading_constant
    }

    /// Follow one pan event, updating the live offset.
    pub fn track(
        &mut self,
        event: &PanEvent,
        widths: PaneWidths,
        preferred_dim: PanePosition,
    ) -> TrackedPan {
        let offset = drag_offset(self.showing, event.translation.x, widths);
        self.set_offset(offset);
        TrackedPan {
            offset,
            toward: pan_direction(offset),
            dim_alpha: drag_dim_alpha(offset, preferred_dim, widths),
        }
    }

    /// Settle at `position` with its canonical offset.
    pub fn rest_at(&mut self, position: PanePosition, widths: PaneWidths) {
        self.showing = position;
        self.set_offset(widths.offset_for(position));
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.leading_constant = offset;
    }
}

//! Position resolution: where a released drag settles.
//!
//! Pure decision logic, no side effects.
//!
//! | resting | flick (`|vx| > threshold`) | otherwise                       |
//! |---------|----------------------------|---------------------------------|
//! | Left    | Center                     | half-width rule vs `W_left`     |
//! | Right   | Center                     | half-width rule vs `W_right`    |
//! | Center  | Right if `dx < 0`, else Left | half-width rule vs that side  |
//!
//! Half-width rule: `|dx| > width / 2` (strict) opens the pane, anything else
//! settles at Center.

use std::fmt;

use sidepane_core::geometry::Vector;
use sidepane_core::gesture::TransitionFlow;

use crate::position::{PanePosition, PaneSide, PaneWidths};

/// A resolved drag released while resting somewhere without geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedPosition(pub PanePosition);

impl fmt::Display for UnsupportedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot resolve a drag while resting at {}, not supported", self.0)
    }
}

impl std::error::Error for UnsupportedPosition {}

/// Inputs the resolver needs besides the gesture itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResolver {
    pub widths: PaneWidths,
    pub velocity_threshold: f64,
}

impl PositionResolver {
    #[must_use]
    pub const fn new(widths: PaneWidths, velocity_threshold: f64) -> Self {
        Self {
            widths,
            velocity_threshold,
        }
    }

    /// Decide the next resting position. The result is always Left, Right or
    /// Center.
    pub fn resolve(
        &self,
        resting: PanePosition,
        translation: Vector,
        velocity: Vector,
    ) -> Result<PanePosition, UnsupportedPosition> {
        let flick = velocity.x.abs() > self.velocity_threshold;
        let position = match resting {
            PanePosition::Left | PanePosition::Right if flick => PanePosition::Center,
            PanePosition::Left => self.half_width(PaneSide::Left, translation),
            PanePosition::Right => self.half_width(PaneSide::Right, translation),
            PanePosition::Center => {
                let side = match TransitionFlow::from_translation(translation) {
                    TransitionFlow::Right => PaneSide::Right,
                    TransitionFlow::Left => PaneSide::Left,
                };
                if flick {
                    side.position()
                } else {
                    self.half_width(side, translation)
                }
            }
            PanePosition::Top | PanePosition::Bottom | PanePosition::None => {
                return Err(UnsupportedPosition(resting));
            }
        };
        Ok(position)
    }

    fn half_width(&self, side: PaneSide, translation: Vector) -> PanePosition {
        if translation.x.abs() > self.widths.of(side) / 2.0 {
            side.position()
        } else {
            PanePosition::Center
        }
    }
}

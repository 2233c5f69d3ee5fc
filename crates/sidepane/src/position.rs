//! Pane positions and sides.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which pane occupies the visible slot.
///
/// `Top` and `Bottom` are accepted everywhere a position is, but no geometry
/// exists for them: gestures resolved while resting there are reported as
/// unsupported. `None` is only meaningful as a preferred dim side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanePosition {
    Left,
    Right,
    #[default]
    Center,
    Top,
    Bottom,
    None,
}

impl PanePosition {
    /// Whether the container has geometry for this position.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Center)
    }

    /// The side pane this position reveals, if any.
    #[must_use]
    pub const fn side(self) -> Option<PaneSide> {
        match self {
            Self::Left => Some(PaneSide::Left),
            Self::Right => Some(PaneSide::Right),
            _ => None,
        }
    }
}

impl fmt::Display for PanePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// One of the two side panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    /// The resting position that fully reveals this side.
    #[must_use]
    pub const fn position(self) -> PanePosition {
        match self {
            Self::Left => PanePosition::Left,
            Self::Right => PanePosition::Right,
        }
    }
}

impl fmt::Display for PaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.position().fmt(f)
    }
}

/// Widths of the two side panes.
///
/// Both are always present: a side without a pane still has a width, and it
/// still takes part in offset clamping and resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWidths {
    pub left: f64,
    pub right: f64,
}

impl PaneWidths {
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Width of one side.
    #[must_use]
    pub const fn of(self, side: PaneSide) -> f64 {
        match side {
            PaneSide::Left => self.left,
            PaneSide::Right => self.right,
        }
    }

    /// Canonical center-region offset for a resting position.
    ///
    /// `+left` reveals the left pane, `-right` the right pane. Positions
    /// without geometry map to 0.
    #[must_use]
    pub fn offset_for(self, position: PanePosition) -> f64 {
        match position {
            PanePosition::Left => self.left,
            PanePosition::Right => -self.right,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_offsets() {
        let widths = PaneWidths::new(300.0, 250.0);
        assert!((widths.offset_for(PanePosition::Left) - 300.0).abs() < f64::EPSILON);
        assert!((widths.offset_for(PanePosition::Right) + 250.0).abs() < f64::EPSILON);
        assert!(widths.offset_for(PanePosition::Center).abs() < f64::EPSILON);
        assert!(widths.offset_for(PanePosition::Top).abs() < f64::EPSILON);
        assert!((widths.of(PaneSide::Right) - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vertical_positions_have_no_geometry() {
        assert!(PanePosition::Center.is_horizontal());
        assert!(!PanePosition::Top.is_horizontal());
        assert!(!PanePosition::Bottom.is_horizontal());
        assert!(!PanePosition::None.is_horizontal());
    }

    #[test]
    fn side_round_trips_through_position() {
        for side in [PaneSide::Left, PaneSide::Right] {
            assert_eq!(side.position().side(), Some(side));
        }
        assert_eq!(PanePosition::Center.side(), None);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&PanePosition::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
        let back: PanePosition = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(back, PanePosition::Left);
    }
}

//! Container error types.

use std::fmt;

use crate::position::PaneSide;

/// Rejected `setup` call. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// No center pane was supplied.
    MissingCenter,
    /// A side width is zero, negative, or not finite.
    InvalidWidth { side: PaneSide, width: f64 },
    /// `setup` was already called successfully.
    AlreadyConfigured,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCenter => write!(
                f,
                "cannot configure the container without a center pane"
            ),
            Self::InvalidWidth { side, width } => {
                write!(f, "{side} pane width must be finite and > 0, got {width}")
            }
            Self::AlreadyConfigured => write!(f, "container panes were already configured"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Rejected container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// The operation needs panes, but `setup` has not succeeded yet.
    NotConfigured,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "container panes are not configured"),
        }
    }
}

impl std::error::Error for ContainerError {}

#![forbid(unsafe_code)]

//! Sidepane: a drag-driven three-pane navigation container.
//!
//! A center pane fills the container; an optional left and right pane sit
//! just outside it and slide in when the user drags horizontally or flicks.
//!
//! # Key Components
//!
//! - [`DraggableContainer`] - Owns the panes and applies gestures to a host stage
//! - [`PaneStage`] - Host view seam (mounting, offset, dim overlay, placeholder)
//! - [`PaneObserver`] - Lifecycle and pan notifications
//! - [`PositionResolver`] - Where a released drag settles
//! - [`ContainerConfig`] - Widths, flick threshold, and transition tunables
//! - [`PaneHierarchy`] - Owning-container lookup for nested panes
//!
//! # How it fits in the system
//! Pointer input and motion primitives live in `sidepane-core`. This crate
//! decides positions and drives presentation; the host draws.

pub mod config;
pub mod container;
pub mod driver;
pub mod error;
pub mod hierarchy;
pub mod observer;
pub mod position;
pub mod resolver;
pub mod stage;
pub mod tracker;

pub use config::{ConfigError, ContainerConfig};
pub use container::{DraggableContainer, PanOutcome, PaneSetup, allows_pan};
pub use error::{ContainerError, SetupError};
pub use hierarchy::{Ancestry, HierarchyError, HierarchyNode, NodeId, PaneHierarchy};
pub use observer::{
    LifecycleEvent, ObserverId, ObserverSet, PaneObserver, observe_lifecycle, observe_pan,
};
pub use position::{PanePosition, PaneSide, PaneWidths};
pub use resolver::{PositionResolver, UnsupportedPosition};
pub use stage::{PaneStage, UNCONFIGURED_MESSAGE};
pub use tracker::{DragSession, TrackedPan};

pub use sidepane_core::animation::{TransitionCurve, TransitionSpec};
pub use sidepane_core::geometry::{Point, Vector};
pub use sidepane_core::gesture::{
    PanConfig, PanEvent, PanPhase, PanRecognizer, PointerKind, PointerSample, TransitionFlow,
};

/// Timestamp type carried by [`PointerSample`].
pub use web_time::Instant;

#![forbid(unsafe_code)]

//! Core: pointer gestures, release velocity, and motion primitives.
//!
//! # Role in sidepane
//! `sidepane-core` is the input and motion layer. It knows nothing about
//! panes; it turns raw pointer samples into pan events and provides the
//! animated values and completion scheduling the container drives.
//!
//! # Primary responsibilities
//! - **PanRecognizer**: pointer down/move/up sequences to [`gesture::PanEvent`]s.
//! - **VelocityTracker**: release velocity from timestamped samples.
//! - **Animation**: springs, easing curves, and transition completion queues.
//!
//! # How it fits in the system
//! The `sidepane` crate consumes `PanEvent` values, decides the next resting
//! pane, and presents it with [`animation::transition`] primitives.

pub mod animation;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod velocity;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};

#![forbid(unsafe_code)]

//! Time-driven motion primitives.
//!
//! Everything here is advanced explicitly with a `tick` or `advance` call;
//! nothing reads a clock. The host owns the frame loop and passes elapsed time in.

pub mod spring;
pub mod transition;

pub use spring::Spring;
pub use transition::{AnimatedValue, CompletionQueue, TransitionCurve, TransitionSpec};

/// An easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out: fast start, gentle stop.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

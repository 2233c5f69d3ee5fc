#![forbid(unsafe_code)]

//! Damped harmonic oscillator driving a single scalar.
//!
//! Based on the classical damped spring equation:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! Integrated with semi-implicit Euler in sub-steps of at most 4ms, shortened
//! further for stiff springs so that `ω·dt` never exceeds 0.5.
//!
//! # Invariants
//!
//! 1. `position()` is the raw value; it is never clamped, since pane offsets
//!    are negative on the right side.
//! 2. A spring at rest stays put until `set_target()` moves the target.
//! 3. `set_target()` keeps the current velocity, so retargeting mid-flight
//!    bends the motion instead of restarting it.
//! 4. Stiffness is clamped to a positive minimum; damping to non-negative.
//! 5. A critically damped spring started from rest never leaves the span
//!    between its start and target, whatever its stiffness.

use std::time::Duration;

/// Maximum dt per integration step.
const MAX_STEP_SECS: f64 = 0.004;

/// Maximum `ω·dt` per integration step, with `ω = sqrt(stiffness)`.
const MAX_OMEGA_STEP: f64 = 0.5;

/// Position delta below which the spring may come to rest.
const DEFAULT_REST_THRESHOLD: f64 = 0.001;

/// Velocity below which the spring may come to rest.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;

const MIN_STIFFNESS: f64 = 0.1;

/// A damped spring pulling `position` toward `target`.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_threshold: f64,
    velocity_threshold: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` and targeting `target`.
    ///
    /// Default parameters: stiffness = 170.0, damping = 26.0.
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            stiffness: 170.0,
            damping: 26.0,
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            at_rest: (initial - target).abs() < DEFAULT_REST_THRESHOLD,
        }
    }

    /// Critically damped spring: fastest convergence without overshoot.
    #[must_use]
    pub fn critically_damped(initial: f64, target: f64, stiffness: f64) -> Self {
        let k = stiffness.max(MIN_STIFFNESS);
        Self::new(initial, target)
            .with_stiffness(k)
            .with_damping(2.0 * k.sqrt())
    }

    /// Set stiffness (builder pattern). Clamped to minimum 0.1.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    /// Set damping (builder pattern). Clamped to minimum 0.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Whether the spring has settled at the target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Change the target, keeping the current velocity.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > self.rest_threshold || !self.at_rest {
            self.target = target;
            self.at_rest = (self.position - target).abs() < self.rest_threshold
                && self.velocity.abs() < self.velocity_threshold;
        }
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let max_step = MAX_STEP_SECS.min(MAX_OMEGA_STEP / self.stiffness.sqrt());
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(max_step);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

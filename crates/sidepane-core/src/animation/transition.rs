#![forbid(unsafe_code)]

//! Scoped transitions: animated scalars plus scheduled completions.
//!
//! A transition has two independent halves:
//!
//! - [`AnimatedValue`]: a presented scalar. Starting a new transition
//!   re-targets it from wherever it currently is; there is only ever one
//!   motion per value.
//! - [`CompletionQueue`]: payloads that become due a fixed duration after
//!   they were scheduled. Scheduling never cancels or reorders earlier
//!   entries, so overlapping transitions complete on their own timelines.
//!
//! # Invariants
//!
//! 1. Once `duration` has elapsed since the last `animate_to`, the value
//!    equals its target exactly.
//! 2. `set_immediate` stops any motion and leaves `value() == target()`.
//! 3. Completions are returned in due-time order; ties keep scheduling order.
//! 4. A completion scheduled with zero duration is due on the next `tick`,
//!    including `tick(Duration::ZERO)`.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::spring::Spring;
use super::{EasingFn, ease_out, linear};

/// `(1 + ωt)·e^(−ωt)` drops below 1e-3 at `ωt ≈ 9.23`.
const CRITICAL_SETTLE_PRODUCT: f64 = 9.23;

/// Shape of a transition's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionCurve {
    /// Critically damped spring tuned to settle within the duration.
    #[default]
    Spring,
    /// Quadratic ease-out tween.
    EaseOut,
    /// Constant-speed tween.
    Linear,
}

/// Duration and curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub curve: TransitionCurve,
}

impl TransitionSpec {
    /// The pane slide used by default: 500ms spring.
    pub const DEFAULT: Self = Self {
        duration: Duration::from_millis(500),
        curve: TransitionCurve::Spring,
    };

    #[must_use]
    pub const fn new(duration: Duration, curve: TransitionCurve) -> Self {
        Self { duration, curve }
    }

    /// A transition that lands on the next tick.
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, TransitionCurve::Linear)
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// AnimatedValue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Motion {
    Still,
    Spring(Spring),
    Tween {
        from: f64,
        easing: EasingFn,
    },
}

/// A presented scalar that can be set directly or animated toward a target.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    target: f64,
    motion: Motion,
    elapsed: Duration,
    duration: Duration,
}

impl AnimatedValue {
    /// A value at rest.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            target: value,
            motion: Motion::Still,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Currently presented value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Where the value is heading (equal to `value()` when still).
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether a motion is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.motion, Motion::Still)
    }

    /// Jump to `value`, dropping any motion.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.motion = Motion::Still;
    }

    /// Start moving toward `target` along `spec`.
    pub fn animate_to(&mut self, target: f64, spec: TransitionSpec) {
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.duration = spec.duration;

        self.motion = match spec.curve {
            TransitionCurve::Spring => {
                let mut spring = match std::mem::replace(&mut self.motion, Motion::Still) {
                    Motion::Spring(spring) => spring,
                    _ => {
                        let secs = spec.duration.as_secs_f64().max(f64::EPSILON);
                        let omega = CRITICAL_SETTLE_PRODUCT / secs;
                        Spring::critically_damped(self.value, target, omega * omega)
                    }
                };
                spring.set_target(target);
                Motion::Spring(spring)
            }
            TransitionCurve::EaseOut => Motion::Tween {
                from: self.value,
                easing: ease_out,
            },
            TransitionCurve::Linear => Motion::Tween {
                from: self.value,
                easing: linear,
            },
        };
    }

    /// Advance the motion by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if !self.is_animating() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.finish();
            return;
        }

        match &mut self.motion {
            Motion::Still => {}
            Motion::Spring(spring) => {
                spring.advance(dt);
                self.value = spring.position();
            }
            Motion::Tween { from, easing } => {
                let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32;
                let eased = f64::from(easing(t));
                self.value = *from + (self.target - *from) * eased;
            }
        }
    }

    /// Jump to the end of the current motion.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.motion = Motion::Still;
    }
}

// ---------------------------------------------------------------------------
// CompletionQueue
// ---------------------------------------------------------------------------

/// Identifier of a scheduled completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(u64);

#[derive(Debug)]
struct Scheduled<C> {
    id: TransitionId,
    due_at: Duration,
    payload: C,
}

/// Completion payloads waiting for their transition to end.
#[derive(Debug)]
pub struct CompletionQueue<C> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<C>>,
}

impl<C> Default for CompletionQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CompletionQueue<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to become due `after` from now.
    pub fn schedule(&mut self, after: Duration, payload: C) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due_at: self.now.saturating_add(after),
            payload,
        });
        id
    }

    /// Number of completions not yet due.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the queue clock and take every completion that is now due.
    pub fn tick(&mut self, dt: Duration) -> Vec<C> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;
        self.take_where(|s| s.due_at <= now)
    }

    /// Take every pending completion regardless of its due time.
    pub fn finish_all(&mut self) -> Vec<C> {
        if let Some(latest) = self.pending.iter().map(|s| s.due_at).max() {
            self.now = self.now.max(latest);
        }
        self.take_where(|_| true)
    }

    fn take_where(&mut self, due: impl Fn(&Scheduled<C>) -> bool) -> Vec<C> {
        let (mut ready, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|s| due(s));
        self.pending = waiting;
        ready.sort_by_key(|s| (s.due_at, s.id));
        ready.into_iter().map(|s| s.payload).collect()
    }
}

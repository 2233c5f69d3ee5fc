#![forbid(unsafe_code)]

//! Pan gesture recognition: raw pointer samples to pan events.
//!
//! [`PanRecognizer`] is a small state machine that watches one pointer from
//! press to release and reports a [`PanEvent`] stream with cumulative
//! translation and, on release, a velocity estimate.
//!
//! # State Machine
//!
//! ```text
//! Idle --Down--> Pressed --Move beyond slop, gate accepts--> Panning
//!                   |                  \--gate refuses--> Rejected
//!                   \--Up/Cancel--> Idle
//! Panning --Move--> Panning (Changed)
//! Panning --Up--> Idle (Ended)      Panning --Cancel--> Idle (Cancelled)
//! Rejected --Up/Cancel--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. Every pan is well-formed: `Began` → zero or more `Changed` → `Ended` or
//!    `Cancelled`.
//! 2. Translation is always measured from the press point, never from the
//!    previous sample.
//! 3. The begin gate is consulted at most once per press.
//! 4. After `reset()`, the recognizer is idle and its velocity history is empty.

use web_time::Instant;

use crate::geometry::{Point, Vector};
use crate::velocity::VelocityTracker;

#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};

// ---------------------------------------------------------------------------
// Pan events
// ---------------------------------------------------------------------------

/// Lifecycle phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl PanPhase {
    /// Whether this phase closes the gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One delivered pan update.
///
/// `translation` is cumulative since the gesture started. `velocity` is only
/// meaningful on [`PanPhase::Ended`]; other phases carry zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation: Vector,
    pub velocity: Vector,
}

impl PanEvent {
    /// A `Began` event.
    #[must_use]
    pub const fn began(translation: Vector) -> Self {
        Self {
            phase: PanPhase::Began,
            translation,
            velocity: Vector::ZERO,
        }
    }

    /// A `Changed` event.
    #[must_use]
    pub const fn changed(translation: Vector) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation,
            velocity: Vector::ZERO,
        }
    }

    /// An `Ended` event with the release velocity.
    #[must_use]
    pub const fn ended(translation: Vector, velocity: Vector) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation,
            velocity,
        }
    }

    /// A `Cancelled` event.
    #[must_use]
    pub const fn cancelled(translation: Vector) -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation,
            velocity: Vector::ZERO,
        }
    }
}

/// Horizontal direction classification of a drag.
///
/// `Right` means the finger moves toward the left edge (negative `dx`),
/// revealing the right pane. Zero counts as `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionFlow {
    Left,
    Right,
}

impl TransitionFlow {
    /// Classify a cumulative translation.
    #[must_use]
    pub fn from_translation(translation: Vector) -> Self {
        if translation.x < 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

// ---------------------------------------------------------------------------
// Pointer input
// ---------------------------------------------------------------------------

/// Kind of raw pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub position: Point,
    pub time: Instant,
}

impl PointerSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(kind: PointerKind, position: Point, time: Instant) -> Self {
        Self {
            kind,
            position,
            time,
        }
    }
}

/// Thresholds for pan recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    /// Distance the pointer must travel from the press point before a pan
    /// begins (default: 8.0).
    pub slop: f64,
    /// Release velocity is clamped to this magnitude per axis
    /// (default: 8000.0 units/sec).
    pub max_velocity: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            slop: 8.0,
            max_velocity: 8_000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PanRecognizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pressed { origin: Point },
    Panning { origin: Point, translation: Vector },
    Rejected,
}

/// Stateful pan recognizer for a single pointer.
///
/// Call [`process`](PanRecognizer::process) for each [`PointerSample`]. The
/// `should_begin` gate receives the translation at the moment the slop is
/// exceeded and decides whether this press becomes a pan at all.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    config: PanConfig,
    state: State,
    velocity: VelocityTracker,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new(PanConfig::default())
    }
}

impl PanRecognizer {
    /// Create a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            velocity: VelocityTracker::new(),
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Whether a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.state, State::Panning { .. })
    }

    /// Return to idle, dropping any press or pan in progress without
    /// emitting an event.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.velocity.reset();
    }

    /// Process one pointer sample.
    pub fn process(
        &mut self,
        sample: &PointerSample,
        should_begin: impl FnOnce(Vector) -> bool,
    ) -> Option<PanEvent> {
        match sample.kind {
            PointerKind::Down => self.on_down(sample),
            PointerKind::Move => self.on_move(sample, should_begin),
            PointerKind::Up => self.on_up(sample),
            PointerKind::Cancel => self.on_cancel(),
        }
    }

    fn on_down(&mut self, sample: &PointerSample) -> Option<PanEvent> {
        // A second press while panning interrupts the first gesture.
        let interrupted = match self.state {
            State::Panning { translation, .. } => Some(PanEvent::cancelled(translation)),
            _ => None,
        };
        self.velocity.reset();
        self.velocity.add(sample.time, sample.position);
        self.state = State::Pressed {
            origin: sample.position,
        };
        interrupted
    }

    fn on_move(
        &mut self,
        sample: &PointerSample,
        should_begin: impl FnOnce(Vector) -> bool,
    ) -> Option<PanEvent> {
        match self.state {
            State::Idle | State::Rejected => None,
            State::Pressed { origin } => {
                self.velocity.add(sample.time, sample.position);
                let translation = sample.position.offset_from(origin);
                if translation.length() <= self.config.slop {
                    return None;
                }
                if should_begin(translation) {
                    debug!(dx = translation.x, dy = translation.y, "pan began");
                    self.state = State::Panning {
                        origin,
                        translation,
                    };
                    Some(PanEvent::began(translation))
                } else {
                    trace!(dx = translation.x, "pan refused by gate");
                    self.state = State::Rejected;
                    None
                }
            }
            State::Panning { origin, .. } => {
                self.velocity.add(sample.time, sample.position);
                let translation = sample.position.offset_from(origin);
                self.state = State::Panning {
                    origin,
                    translation,
                };
                Some(PanEvent::changed(translation))
            }
        }
    }

    fn on_up(&mut self, sample: &PointerSample) -> Option<PanEvent> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Panning { origin, .. } = state else {
            self.velocity.reset();
            return None;
        };
        self.velocity.add(sample.time, sample.position);
        let translation = sample.position.offset_from(origin);
        let velocity = self.velocity.velocity_with_max(self.config.max_velocity);
        self.velocity.reset();
        debug!(dx = translation.x, vx = velocity.x, "pan ended");
        Some(PanEvent::ended(translation, velocity))
    }

    fn on_cancel(&mut self) -> Option<PanEvent> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        self.velocity.reset();
        match state {
            State::Panning { translation, .. } => Some(PanEvent::cancelled(translation)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    fn sample(kind: PointerKind, x: f64, t0: Instant, ms: u64) -> PointerSample {
        PointerSample::new(kind, Point::new(x, 0.0), t0 + Duration::from_millis(ms))
    }

    fn accept(_: Vector) -> bool {
        true
    }

    #[test]
    fn transition_flow_classifies_sign() {
        assert_eq!(
            TransitionFlow::from_translation(Vector::horizontal(-0.5)),
            TransitionFlow::Right
        );
        assert_eq!(
            TransitionFlow::from_translation(Vector::horizontal(0.0)),
            TransitionFlow::Left
        );
        assert_eq!(
            TransitionFlow::from_translation(Vector::horizontal(12.0)),
            TransitionFlow::Left
        );
    }

    #[test]
    fn terminal_phases() {
        assert!(!PanPhase::Began.is_terminal());
        assert!(!PanPhase::Changed.is_terminal());
        assert!(PanPhase::Ended.is_terminal());
        assert!(PanPhase::Cancelled.is_terminal());
    }

    #[test]
    fn movement_within_slop_does_not_begin() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        assert!(rec.process(&sample(PointerKind::Down, 100.0, t0, 0), accept).is_none());
        assert!(rec.process(&sample(PointerKind::Move, 106.0, t0, 8), accept).is_none());
        assert!(!rec.is_panning());
        assert!(rec.process(&sample(PointerKind::Up, 106.0, t0, 16), accept).is_none());
    }

    #[test]
    fn full_pan_sequence_is_well_formed() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        rec.process(&sample(PointerKind::Down, 100.0, t0, 0), accept);

        let began = rec
            .process(&sample(PointerKind::Move, 80.0, t0, 10), accept)
            .expect("beyond slop");
        assert_eq!(began.phase, PanPhase::Began);
        assert_eq!(began.translation, Vector::horizontal(-20.0));

        let changed = rec
            .process(&sample(PointerKind::Move, 60.0, t0, 20), accept)
            .expect("panning");
        assert_eq!(changed.phase, PanPhase::Changed);
        assert_eq!(changed.translation, Vector::horizontal(-40.0));

        let ended = rec
            .process(&sample(PointerKind::Up, 40.0, t0, 30), accept)
            .expect("release");
        assert_eq!(ended.phase, PanPhase::Ended);
        assert_eq!(ended.translation, Vector::horizontal(-60.0));
        assert!(ended.velocity.x < -1_000.0, "vx = {}", ended.velocity.x);
        assert!(!rec.is_panning());
    }

    #[test]
    fn gate_refusal_ignores_rest_of_press() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        let mut consulted = 0;
        rec.process(&sample(PointerKind::Down, 0.0, t0, 0), accept);
        let first = rec.process(&sample(PointerKind::Move, -20.0, t0, 10), |_| {
            consulted += 1;
            false
        });
        assert!(first.is_none());
        let second = rec.process(&sample(PointerKind::Move, -80.0, t0, 20), |_| {
            consulted += 1;
            true
        });
        assert!(second.is_none());
        assert!(rec.process(&sample(PointerKind::Up, -80.0, t0, 30), accept).is_none());
        assert_eq!(consulted, 1);
    }

    #[test]
    fn cancel_while_panning_emits_cancelled() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        rec.process(&sample(PointerKind::Down, 0.0, t0, 0), accept);
        rec.process(&sample(PointerKind::Move, 30.0, t0, 10), accept);
        let cancelled = rec
            .process(&sample(PointerKind::Cancel, 30.0, t0, 20), accept)
            .expect("cancel");
        assert_eq!(cancelled, PanEvent::cancelled(Vector::horizontal(30.0)));
        assert!(rec.process(&sample(PointerKind::Cancel, 30.0, t0, 30), accept).is_none());
    }

    #[test]
    fn new_press_interrupts_pan() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        rec.process(&sample(PointerKind::Down, 0.0, t0, 0), accept);
        rec.process(&sample(PointerKind::Move, 30.0, t0, 10), accept);
        let event = rec.process(&sample(PointerKind::Down, 200.0, t0, 20), accept);
        assert_eq!(event.map(|e| e.phase), Some(PanPhase::Cancelled));
        assert!(!rec.is_panning());
    }

    #[test]
    fn reset_returns_to_idle() {
        let t0 = Instant::now();
        let mut rec = PanRecognizer::default();
        rec.process(&sample(PointerKind::Down, 0.0, t0, 0), accept);
        rec.process(&sample(PointerKind::Move, 30.0, t0, 10), accept);
        rec.reset();
        assert!(!rec.is_panning());
        assert!(rec.process(&sample(PointerKind::Up, 30.0, t0, 20), accept).is_none());
    }
}

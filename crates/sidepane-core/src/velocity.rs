#![forbid(unsafe_code)]

//! Release-velocity estimation for pan gestures.
//!
//! [`VelocityTracker`] keeps a short history of timestamped pointer positions
//! and fits a least-squares line per axis over the most recent samples.
//!
//! # Invariants
//!
//! 1. Only samples within [`HORIZON`] of the newest sample contribute.
//! 2. A gap longer than [`ASSUME_STOPPED`] between consecutive samples ends the
//!    window: the pointer is considered to have stopped there.
//! 3. Fewer than two contributing samples yield a zero velocity.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

use crate::geometry::{Point, Vector};

/// Maximum number of retained samples.
const HISTORY_SIZE: usize = 20;

/// Only samples this close to the newest one are used.
pub const HORIZON: Duration = Duration::from_millis(100);

/// If consecutive samples are farther apart than this, the pointer had stopped.
pub const ASSUME_STOPPED: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy)]
struct Sample {
    time: Instant,
    position: Point,
}

/// Estimates pointer velocity in units per second.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Record a pointer position at `time`.
    pub fn add(&mut self, time: Instant, position: Point) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time, position });
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been recorded since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Current velocity estimate.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        let Some(newest) = self.samples.back().copied() else {
            return Vector::ZERO;
        };

        let mut window: Vec<(f64, Point)> = Vec::with_capacity(self.samples.len());
        let mut newer = newest;
        for sample in self.samples.iter().rev() {
            let age = newest.time.saturating_duration_since(sample.time);
            let gap = newer.time.saturating_duration_since(sample.time);
            if age > HORIZON || gap > ASSUME_STOPPED {
                break;
            }
            window.push((-age.as_secs_f64(), sample.position));
            newer = *sample;
        }

        if window.len() < 2 {
            return Vector::ZERO;
        }

        Vector::new(
            slope(window.iter().map(|(t, p)| (*t, p.x))),
            slope(window.iter().map(|(t, p)| (*t, p.y))),
        )
    }

    /// Velocity estimate with each axis clamped to `[-max, max]`.
    #[must_use]
    pub fn velocity_with_max(&self, max: f64) -> Vector {
        if !max.is_finite() || max <= 0.0 {
            return Vector::ZERO;
        }
        let v = self.velocity();
        Vector::new(v.x.clamp(-max, max), v.y.clamp(-max, max))
    }
}

/// Least-squares slope of `(t, value)` pairs. Zero when all `t` coincide.
fn slope(points: impl Iterator<Item = (f64, f64)> + Clone) -> f64 {
    let n = points.clone().count() as f64;
    let (sum_t, sum_v) = points
        .clone()
        .fold((0.0, 0.0), |(st, sv), (t, v)| (st + t, sv + v));
    let mean_t = sum_t / n;
    let mean_v = sum_v / n;

    let (num, den) = points.fold((0.0, 0.0), |(num, den), (t, v)| {
        let dt = t - mean_t;
        (num + dt * (v - mean_v), den + dt * dt)
    });

    if den == 0.0 { 0.0 } else { num / den }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut VelocityTracker, start: Instant, points: &[(u64, f64)]) {
        for &(ms, x) in points {
            tracker.add(start + Duration::from_millis(ms), Point::new(x, 0.0));
        }
    }

    #[test]
    fn empty_tracker_reports_zero() {
        assert_eq!(VelocityTracker::new().velocity(), Vector::ZERO);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add(Instant::now(), Point::new(5.0, 5.0));
        assert_eq!(tracker.velocity(), Vector::ZERO);
    }

    #[test]
    fn constant_motion_is_recovered() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        feed(&mut tracker, t0, &[(0, 0.0), (10, -10.0), (20, -20.0), (30, -30.0)]);
        let v = tracker.velocity();
        assert!((v.x + 1000.0).abs() < 1e-6, "vx = {}", v.x);
        assert!(v.y.abs() < 1e-9);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        // Slow drift long ago, then a fast segment in the final 30ms.
        feed(
            &mut tracker,
            t0,
            &[(0, 0.0), (30, 1.0), (60, 2.0), (90, 3.0), (120, 4.0), (150, 5.0)],
        );
        feed(&mut tracker, t0, &[(160, 25.0), (170, 45.0), (180, 65.0)]);
        let v = tracker.velocity();
        assert!(v.x > 500.0, "recent motion should dominate, got {}", v.x);
    }

    #[test]
    fn stationary_pause_before_release_zeroes_velocity() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        feed(&mut tracker, t0, &[(0, 0.0), (10, 50.0), (20, 100.0), (80, 100.0)]);
        assert_eq!(tracker.velocity(), Vector::ZERO);
    }

    #[test]
    fn velocity_with_max_clamps_each_axis() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        feed(&mut tracker, t0, &[(0, 0.0), (10, 100.0), (20, 200.0)]);
        let v = tracker.velocity_with_max(2_000.0);
        assert!((v.x - 2_000.0).abs() < f64::EPSILON);
        assert_eq!(tracker.velocity_with_max(f64::NAN), Vector::ZERO);
    }

    #[test]
    fn history_is_bounded() {
        let mut tracker = VelocityTracker::new();
        let t0 = Instant::now();
        for i in 0..50u64 {
            tracker.add(t0 + Duration::from_millis(i), Point::new(i as f64, 0.0));
        }
        assert_eq!(tracker.len(), HISTORY_SIZE);
        tracker.reset();
        assert!(tracker.is_empty());
    }
}

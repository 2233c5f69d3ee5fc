//! Presentation: apply a resting position to the offset and dim overlay.
//!
//! Each `show_*` call updates the drag session immediately, re-targets the
//! presented offset and dim alpha, and schedules its did-callbacks to run
//! when its own transition ends. The will-callbacks run right after the
//! transition is started, inside the same call.
//!
//! Overlapping calls are neither queued nor cancelled: the latest call owns
//! the presented values, and every earlier call still gets its completion on
//! its original schedule.

use std::time::Duration;

use sidepane_core::animation::{AnimatedValue, CompletionQueue, TransitionSpec};
use tracing::debug;

use crate::observer::{LifecycleEvent, ObserverSet};
use crate::position::{PanePosition, PaneSide, PaneWidths};
use crate::stage::PaneStage;
use crate::tracker::{DragSession, TrackedPan};

/// What to announce when a transition ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Shown(PaneSide),
    /// Both sides, whichever one was actually open.
    Hidden,
    /// Snap-back after a cancelled pan; announces nothing.
    Restored,
}

impl Completion {
    fn events(self) -> &'static [LifecycleEvent] {
        match self {
            Self::Shown(PaneSide::Left) => &[LifecycleEvent::DidShow(PaneSide::Left)],
            Self::Shown(PaneSide::Right) => &[LifecycleEvent::DidShow(PaneSide::Right)],
            Self::Hidden => &[
                LifecycleEvent::DidDisappear(PaneSide::Left),
                LifecycleEvent::DidDisappear(PaneSide::Right),
            ],
            Self::Restored => &[],
        }
    }
}

/// Presented offset and dim alpha plus pending completions.
#[derive(Debug)]
pub struct PresentationDriver {
    offset: AnimatedValue,
    dim: AnimatedValue,
    completions: CompletionQueue<Completion>,
    transition: TransitionSpec,
    preferred_dim: PanePosition,
}

impl PresentationDriver {
    #[must_use]
    pub fn new(transition: TransitionSpec, preferred_dim: PanePosition) -> Self {
        Self {
            offset: AnimatedValue::new(0.0),
            dim: AnimatedValue::new(0.0),
            completions: CompletionQueue::new(),
            transition,
            preferred_dim,
        }
    }

    /// Offset currently on screen (mid-transition while animating).
    #[must_use]
    pub fn presented_offset(&self) -> f64 {
        self.offset.value()
    }

    /// Dim alpha currently on screen.
    #[must_use]
    pub fn presented_dim_alpha(&self) -> f64 {
        self.dim.value()
    }

    /// Whether the offset or dim alpha is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating() || self.dim.is_animating()
    }

    /// Number of transitions whose completion has not fired yet.
    #[must_use]
    pub fn pending_completions(&self) -> usize {
        self.completions.pending()
    }

    #[must_use]
    pub fn preferred_dim_side(&self) -> PanePosition {
        self.preferred_dim
    }

    /// Show a live drag update without animation.
    pub fn follow_drag(&mut self, tracked: &TrackedPan) {
        self.offset.set_immediate(tracked.offset);
        if let Some(alpha) = tracked.dim_alpha {
            self.dim.set_immediate(alpha);
        }
    }

    /// Rest at Left. Fires `WillShow(Left)` when `notify_will_show` is set,
    /// and `DidShow(Left)` when the transition ends.
    pub fn show_left(
        &mut self,
        session: &mut DragSession,
        widths: PaneWidths,
        observers: &mut ObserverSet,
        notify_will_show: bool,
    ) {
        self.present(PanePosition::Left, session, widths, Completion::Shown(PaneSide::Left));
        if notify_will_show {
            observers.lifecycle(LifecycleEvent::WillShow(PaneSide::Left));
        }
    }

    /// Rest at Right. Mirror of [`show_left`](Self::show_left).
    pub fn show_right(
        &mut self,
        session: &mut DragSession,
        widths: PaneWidths,
        observers: &mut ObserverSet,
        notify_will_show: bool,
    ) {
        self.present(PanePosition::Right, session, widths, Completion::Shown(PaneSide::Right));
        if notify_will_show {
            observers.lifecycle(LifecycleEvent::WillShow(PaneSide::Right));
        }
    }

    /// Rest at Center. Both sides get will-disappear now and did-disappear
    /// when the transition ends, even if neither was open.
    pub fn show_center(
        &mut self,
        session: &mut DragSession,
        widths: PaneWidths,
        observers: &mut ObserverSet,
    ) {
        self.present(PanePosition::Center, session, widths, Completion::Hidden);
        observers.lifecycle(LifecycleEvent::WillDisappear(PaneSide::Left));
        observers.lifecycle(LifecycleEvent::WillDisappear(PaneSide::Right));
    }

    /// Slide back to the current resting position without announcing anything.
    pub fn restore(&mut self, session: &mut DragSession, widths: PaneWidths) {
        let resting = session.showing();
        self.present(resting, session, widths, Completion::Restored);
    }

    fn present(
        &mut self,
        position: PanePosition,
        session: &mut DragSession,
        widths: PaneWidths,
        completion: Completion,
    ) {
        session.rest_at(position, widths);
        let dim_target = if position == self.preferred_dim { 1.0 } else { 0.0 };
        debug!(
            %position,
            offset = session.offset(),
            dim = dim_target,
            "presenting resting position"
        );
        self.offset.animate_to(session.offset(), self.transition);
        self.dim.animate_to(dim_target, self.transition);
        self.completions.schedule(self.transition.duration, completion);
    }

    /// Advance transitions by `dt` and fire completions that became due.
    pub fn tick(&mut self, dt: Duration, observers: &mut ObserverSet) {
        self.offset.tick(dt);
        self.dim.tick(dt);
        for completion in self.completions.tick(dt) {
            for event in completion.events() {
                observers.lifecycle(*event);
            }
        }
    }

    /// Jump every transition to its end, firing all pending completions.
    pub fn finish(&mut self, observers: &mut ObserverSet) {
        self.offset.finish();
        self.dim.finish();
        for completion in self.completions.finish_all() {
            for event in completion.events() {
                observers.lifecycle(*event);
            }
        }
    }

    /// Push the presented offset and dim alpha to the stage.
    pub fn sync<P, S: PaneStage<P> + ?Sized>(&self, stage: &mut S) {
        stage.set_offset(self.offset.value());
        stage.set_dim_alpha(self.dim.value());
    }
}

//! Lifecycle and pan observers.
//!
//! Any number of [`PaneObserver`]s can be registered on a container. They are
//! notified synchronously, in registration order, and cannot call back into
//! the container while being notified.

use std::fmt;

use sidepane_core::gesture::PanEvent;

use crate::position::PaneSide;

/// A side pane lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The pane is about to slide in.
    WillShow(PaneSide),
    /// The slide-in transition finished.
    DidShow(PaneSide),
    /// The pane is about to slide out.
    WillDisappear(PaneSide),
    /// The slide-out transition finished.
    DidDisappear(PaneSide),
}

impl LifecycleEvent {
    /// The pane this event is about.
    #[must_use]
    pub const fn side(self) -> PaneSide {
        match self {
            Self::WillShow(side)
            | Self::DidShow(side)
            | Self::WillDisappear(side)
            | Self::DidDisappear(side) => side,
        }
    }
}

/// Receives container notifications. Both methods default to no-ops.
pub trait PaneObserver {
    /// A side pane lifecycle transition happened.
    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        let _ = event;
    }

    /// A pan update moved the offset toward revealing `toward`.
    ///
    /// Fires for every pan event, not only at the end of the gesture.
    fn on_pan(&mut self, toward: PaneSide, event: &PanEvent) {
        let _ = (toward, event);
    }
}

/// Handle returned by observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

struct LifecycleFn<F>(F);

impl<F: FnMut(LifecycleEvent)> PaneObserver for LifecycleFn<F> {
    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        (self.0)(event);
    }
}

struct PanFn<F>(F);

impl<F: FnMut(PaneSide, &PanEvent)> PaneObserver for PanFn<F> {
    fn on_pan(&mut self, toward: PaneSide, event: &PanEvent) {
        (self.0)(toward, event);
    }
}

/// Wrap a closure as a lifecycle-only observer.
pub fn observe_lifecycle<F>(f: F) -> Box<dyn PaneObserver>
where
    F: FnMut(LifecycleEvent) + 'static,
{
    Box::new(LifecycleFn(f))
}

/// Wrap a closure as a pan-only observer.
pub fn observe_pan<F>(f: F) -> Box<dyn PaneObserver>
where
    F: FnMut(PaneSide, &PanEvent) + 'static,
{
    Box::new(PanFn(f))
}

/// Registered observers, in registration order.
#[derive(Default)]
pub struct ObserverSet {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn PaneObserver>)>,
}

impl fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl ObserverSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn add(&mut self, observer: Box<dyn PaneObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister an observer, returning it if it was present.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn PaneObserver>> {
        let index = self.observers.iter().position(|(oid, _)| *oid == id)?;
        Some(self.observers.remove(index).1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver a lifecycle event to every observer.
    pub fn lifecycle(&mut self, event: LifecycleEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_lifecycle(event);
        }
    }

    /// Deliver a pan notification to every observer.
    pub fn pan(&mut self, toward: PaneSide, event: &PanEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_pan(toward, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sidepane_core::geometry::Vector;

    use super::*;

    #[test]
    fn observers_are_notified_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = ObserverSet::new();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            set.add(observe_lifecycle(move |event| log.borrow_mut().push((tag, event))));
        }

        set.lifecycle(LifecycleEvent::DidShow(PaneSide::Left));
        assert_eq!(
            *log.borrow(),
            vec![
                ("a", LifecycleEvent::DidShow(PaneSide::Left)),
                ("b", LifecycleEvent::DidShow(PaneSide::Left)),
            ]
        );
    }

    #[test]
    fn removed_observer_is_not_notified() {
        let count = Rc::new(RefCell::new(0));
        let mut set = ObserverSet::new();
        let id = {
            let count = Rc::clone(&count);
            set.add(observe_pan(move |_, _| *count.borrow_mut() += 1))
        };
        set.pan(PaneSide::Right, &PanEvent::changed(Vector::horizontal(-3.0)));
        assert!(set.remove(id).is_some());
        assert!(set.remove(id).is_none());
        set.pan(PaneSide::Right, &PanEvent::changed(Vector::horizontal(-4.0)));
        assert_eq!(*count.borrow(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn lifecycle_only_observer_ignores_pans() {
        let hits = Rc::new(RefCell::new(0));
        let mut set = ObserverSet::new();
        {
            let hits = Rc::clone(&hits);
            set.add(observe_lifecycle(move |_| *hits.borrow_mut() += 1));
        }
        set.pan(PaneSide::Left, &PanEvent::began(Vector::horizontal(9.0)));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn event_side() {
        assert_eq!(LifecycleEvent::WillDisappear(PaneSide::Right).side(), PaneSide::Right);
    }
}

//! The three-pane container.
//!
//! [`DraggableContainer`] wires the pieces together: it owns one
//! [`PanRecognizer`], the drag session, the presentation driver and the
//! observers, and drives a host [`PaneStage`].
//!
//! # Lifecycle
//!
//! 1. `new` shows the unconfigured placeholder.
//! 2. `setup` installs the panes once. A rejected setup changes nothing.
//! 3. Pan events (or raw pointer samples) move the center region live; a
//!    release resolves the next resting position and presents it.
//! 4. The host calls `tick` every frame while transitions run.

use std::fmt;
use std::time::Duration;

use sidepane_core::geometry::Vector;
use sidepane_core::gesture::{PanEvent, PanPhase, PanRecognizer, PointerSample};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ContainerConfig};
use crate::driver::PresentationDriver;
use crate::error::{ContainerError, SetupError};
use crate::observer::{ObserverId, ObserverSet, PaneObserver};
use crate::position::{PanePosition, PaneSide, PaneWidths};
use crate::resolver::PositionResolver;
use crate::stage::{PaneStage, UNCONFIGURED_MESSAGE};
use crate::tracker::DragSession;

/// Panes handed to [`DraggableContainer::setup`].
///
/// Widths left unset fall back to the container config (300 by default).
#[derive(Debug, Clone)]
pub struct PaneSetup<P> {
    pub left: Option<P>,
    pub left_width: Option<f64>,
    pub center: Option<P>,
    pub right: Option<P>,
    pub right_width: Option<f64>,
    /// Overrides the config's preferred dim side.
    pub preferred_dim_side: Option<PanePosition>,
}

impl<P> Default for PaneSetup<P> {
    fn default() -> Self {
        Self {
            left: None,
            left_width: None,
            center: None,
            right: None,
            right_width: None,
            preferred_dim_side: None,
        }
    }
}

impl<P> PaneSetup<P> {
    /// A setup with only a center pane.
    #[must_use]
    pub fn new(center: P) -> Self {
        Self {
            center: Some(center),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn left(mut self, pane: P) -> Self {
        self.left = Some(pane);
        self
    }

    #[must_use]
    pub fn left_width(mut self, width: f64) -> Self {
        self.left_width = Some(width);
        self
    }

    #[must_use]
    pub fn right(mut self, pane: P) -> Self {
        self.right = Some(pane);
        self
    }

    #[must_use]
    pub fn right_width(mut self, width: f64) -> Self {
        self.right_width = Some(width);
        self
    }

    #[must_use]
    pub fn preferred_dim_side(mut self, side: PanePosition) -> Self {
        self.preferred_dim_side = Some(side);
        self
    }
}

struct Panes<P> {
    left: Option<P>,
    center: P,
    right: Option<P>,
    widths: PaneWidths,
}

/// What a pan event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanOutcome {
    /// Mid-gesture update; the center region now sits at `offset`.
    Tracking { offset: f64 },
    /// The gesture ended and the container is settling at this position.
    Settled(PanePosition),
    /// The gesture was cancelled; sliding back to the resting position.
    Restored,
    /// The gesture ended while resting somewhere without geometry; nothing
    /// was resolved.
    Unsupported(PanePosition),
}

/// Whether a pan with `translation` may begin while resting at `showing`.
///
/// Only one case is refused: resting Right and dragging further left.
#[must_use]
pub fn allows_pan(showing: PanePosition, translation: Vector) -> bool {
    !(showing == PanePosition::Right && translation.x < 0.0)
}

/// Drag-driven container of a center pane and optional side panes.
pub struct DraggableContainer<P, S> {
    config: ContainerConfig,
    stage: S,
    panes: Option<Panes<P>>,
    session: DragSession,
    driver: PresentationDriver,
    recognizer: PanRecognizer,
    observers: ObserverSet,
}

impl<P, S> fmt::Debug for DraggableContainer<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraggableContainer")
            .field("configured", &self.panes.is_some())
            .field("session", &self.session)
            .field("pending_completions", &self.driver.pending_completions())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<P, S: PaneStage<P>> DraggableContainer<P, S> {
    /// Create an unconfigured container with default tunables.
    pub fn new(stage: S) -> Self {
        Self::build(stage, ContainerConfig::default())
    }

    /// Create an unconfigured container with validated tunables.
    pub fn with_config(stage: S, config: ContainerConfig) -> Result<Self, ConfigError> {
        Ok(Self::build(stage, config.validated()?))
    }

    fn build(mut stage: S, config: ContainerConfig) -> Self {
        stage.show_placeholder(UNCONFIGURED_MESSAGE);
        Self {
            driver: PresentationDriver::new(config.transition(), config.preferred_dim_side),
            recognizer: PanRecognizer::new(config.pan()),
            config,
            stage,
            panes: None,
            session: DragSession::new(),
            observers: ObserverSet::new(),
        }
    }

    /// Install the panes. Allowed once.
    ///
    /// On error nothing is mounted and the placeholder stays up.
    pub fn setup(&mut self, setup: PaneSetup<P>) -> Result<(), SetupError> {
        if self.panes.is_some() {
            return Err(SetupError::AlreadyConfigured);
        }
        let center = setup.center.ok_or(SetupError::MissingCenter)?;

        let widths = PaneWidths::new(
            setup.left_width.unwrap_or(self.config.left_width),
            setup.right_width.unwrap_or(self.config.right_width),
        );
        for side in [PaneSide::Left, PaneSide::Right] {
            let width = widths.of(side);
            if !width.is_finite() || width <= 0.0 {
                return Err(SetupError::InvalidWidth { side, width });
            }
        }

        let dim_side = setup
            .preferred_dim_side
            .unwrap_or(self.config.preferred_dim_side);

        self.stage.mount_center(&center);
        if let Some(left) = &setup.left {
            self.stage.mount_left(left, widths.left);
        }
        if let Some(right) = &setup.right {
            self.stage.mount_right(right, widths.right);
        }
        self.stage.hide_placeholder();

        self.driver = PresentationDriver::new(self.config.transition(), dim_side);
        self.driver.sync::<P, S>(&mut self.stage);
        self.stage.request_layout();

        info!(
            left = setup.left.is_some(),
            right = setup.right.is_some(),
            left_width = widths.left,
            right_width = widths.right,
            dim_side = %dim_side,
            "container panes configured"
        );

        self.panes = Some(Panes {
            left: setup.left,
            center,
            right: setup.right,
            widths,
        });
        Ok(())
    }

    fn widths_or_err(&self) -> Result<PaneWidths, ContainerError> {
        match &self.panes {
            Some(panes) => Ok(panes.widths),
            None => {
                warn!("container used before setup");
                Err(ContainerError::NotConfigured)
            }
        }
    }

    // -- Queries ------------------------------------------------------------

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.panes.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Side widths, once configured.
    #[must_use]
    pub fn widths(&self) -> Option<PaneWidths> {
        self.panes.as_ref().map(|panes| panes.widths)
    }

    /// Resting position.
    #[must_use]
    pub fn showing_position(&self) -> PanePosition {
        self.session.showing()
    }

    /// Layout offset of the center region (jumps to the canonical value as
    /// soon as a position is presented).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.session.offset()
    }

    #[must_use]
    pub fn leading_constant(&self) -> f64 {
        self.session.leading_constant()
    }

    /// Offset currently on screen.
    #[must_use]
    pub fn presented_offset(&self) -> f64 {
        self.driver.presented_offset()
    }

    /// Dim alpha currently on screen.
    #[must_use]
    pub fn presented_dim_alpha(&self) -> f64 {
        self.driver.presented_dim_alpha()
    }

    #[must_use]
    pub fn preferred_dim_side(&self) -> PanePosition {
        self.driver.preferred_dim_side()
    }

    /// Whether a transition is still moving or has a completion pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating() || self.driver.pending_completions() > 0
    }

    #[must_use]
    pub fn center_pane(&self) -> Option<&P> {
        self.panes.as_ref().map(|panes| &panes.center)
    }

    #[must_use]
    pub fn left_pane(&self) -> Option<&P> {
        self.panes.as_ref().and_then(|panes| panes.left.as_ref())
    }

    #[must_use]
    pub fn right_pane(&self) -> Option<&P> {
        self.panes.as_ref().and_then(|panes| panes.right.as_ref())
    }

    #[must_use]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    // -- Observers ----------------------------------------------------------

    pub fn add_observer(&mut self, observer: Box<dyn PaneObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn PaneObserver>> {
        self.observers.remove(id)
    }

    // -- Gestures -----------------------------------------------------------

    /// Gate for the host's own pan recognizer.
    #[must_use]
    pub fn should_begin(&self, translation: Vector) -> bool {
        allows_pan(self.session.showing(), translation)
    }

    /// Feed a raw pointer sample through the built-in recognizer.
    pub fn handle_pointer(
        &mut self,
        sample: &PointerSample,
    ) -> Result<Option<PanOutcome>, ContainerError> {
        self.widths_or_err()?;
        let showing = self.session.showing();
        match self
            .recognizer
            .process(sample, |translation| allows_pan(showing, translation))
        {
            Some(event) => self.handle_pan(&event).map(Some),
            None => Ok(None),
        }
    }

    /// Handle one pan event from the host's gesture system.
    pub fn handle_pan(&mut self, event: &PanEvent) -> Result<PanOutcome, ContainerError> {
        let widths = self.widths_or_err()?;

        let tracked = self
            .session
            .track(event, widths, self.driver.preferred_dim_side());
        self.observers.pan(tracked.toward, event);

        self.driver.follow_drag(&tracked);
        self.stage.set_offset(tracked.offset);
        if let Some(alpha) = tracked.dim_alpha {
            self.stage.set_dim_alpha(alpha);
        }

        match event.phase {
            PanPhase::Began | PanPhase::Changed => Ok(PanOutcome::Tracking {
                offset: tracked.offset,
            }),
            PanPhase::Ended => Ok(self.release(event, widths)),
            PanPhase::Cancelled => {
                self.driver.restore(&mut self.session, widths);
                self.stage.request_layout();
                Ok(PanOutcome::Restored)
            }
        }
    }

    fn release(&mut self, event: &PanEvent, widths: PaneWidths) -> PanOutcome {
        let showing = self.session.showing();
        let resolver = PositionResolver::new(widths, self.config.velocity_threshold);
        match resolver.resolve(showing, event.translation, event.velocity) {
            Ok(position) => {
                debug!(
                    from = %showing,
                    to = %position,
                    dx = event.translation.x,
                    vx = event.velocity.x,
                    "pan released"
                );
                match position {
                    PanePosition::Left => self.present_left(widths, true),
                    PanePosition::Right => self.present_right(widths, true),
                    _ => self.present_center(widths),
                }
                PanOutcome::Settled(position)
            }
            Err(unsupported) => {
                warn!(%unsupported, "showing either top or bottom pane, not supported yet");
                PanOutcome::Unsupported(unsupported.0)
            }
        }
    }

    // -- Imperative controls ------------------------------------------------

    /// Open the left pane.
    pub fn show_left_pane(&mut self) -> Result<(), ContainerError> {
        self.show_left(true)
    }

    /// Open the right pane.
    pub fn show_right_pane(&mut self) -> Result<(), ContainerError> {
        self.show_right(true)
    }

    /// Close whichever side pane is open.
    pub fn show_center_pane(&mut self) -> Result<(), ContainerError> {
        let widths = self.widths_or_err()?;
        self.present_center(widths);
        Ok(())
    }

    /// Open the left pane, optionally without the will-show notification.
    pub fn show_left(&mut self, notify_will_show: bool) -> Result<(), ContainerError> {
        let widths = self.widths_or_err()?;
        self.present_left(widths, notify_will_show);
        Ok(())
    }

    /// Open the right pane, optionally without the will-show notification.
    pub fn show_right(&mut self, notify_will_show: bool) -> Result<(), ContainerError> {
        let widths = self.widths_or_err()?;
        self.present_right(widths, notify_will_show);
        Ok(())
    }

    fn present_left(&mut self, widths: PaneWidths, notify_will_show: bool) {
        self.driver
            .show_left(&mut self.session, widths, &mut self.observers, notify_will_show);
        self.stage.request_layout();
    }

    fn present_right(&mut self, widths: PaneWidths, notify_will_show: bool) {
        self.driver
            .show_right(&mut self.session, widths, &mut self.observers, notify_will_show);
        self.stage.request_layout();
    }

    fn present_center(&mut self, widths: PaneWidths) {
        self.driver
            .show_center(&mut self.session, widths, &mut self.observers);
        self.stage.request_layout();
    }

    // -- Time ---------------------------------------------------------------

    /// Advance transitions by `dt`, pushing presented values to the stage and
    /// firing due completions. Returns whether more ticks are needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_animating() {
            return false;
        }
        self.driver.tick(dt, &mut self.observers);
        self.driver.sync::<P, S>(&mut self.stage);
        self.is_animating()
    }

    /// Jump every in-flight transition to its end.
    pub fn finish_transitions(&mut self) {
        if !self.is_animating() {
            return;
        }
        self.driver.finish(&mut self.observers);
        self.driver.sync::<P, S>(&mut self.stage);
    }
}

//! Generic gesture handler state machine.
//!
//! The handler owns its state, configuration and gesture data. The target and
//! orchestrator it is prepared against are held as `Weak` handles and
//! resolved on every call that needs them, so a torn-down referent surfaces
//! as a [`HandlerError`] rather than a dangling reference.

use std::fmt;
use std::rc::{Rc, Weak};

use gesturekit_geometry::Point;
use smallvec::SmallVec;

use crate::config::HandlerConfig;
use crate::error::HandlerError;
use crate::gesture::Gesture;
use crate::orchestrator::{GestureListener, Orchestrator};
use crate::sample::PointerSample;
use crate::state::GestureState;
use crate::target::{self, GestureTarget};

/// Identity assigned by the owning orchestrator.
pub type HandlerTag = i32;

pub struct GestureHandler<G: Gesture> {
    tag: HandlerTag,
    state: GestureState,
    position: Point,
    config: HandlerConfig,
    target: Option<Weak<dyn GestureTarget>>,
    orchestrator: Option<Weak<dyn Orchestrator>>,
    listener: Option<Rc<dyn GestureListener<G>>>,
    // (new, old) pairs waiting for the outermost transition to notify the listener
    pending_notifications: SmallVec<[(GestureState, GestureState); 2]>,
    transition_depth: u32,
    // set and read only by the orchestrator
    is_active: bool,
    gesture: G,
}

impl<G: Gesture> GestureHandler<G> {
    pub fn new(gesture: G) -> Self {
        Self::with_config(gesture, HandlerConfig::default())
    }

    pub fn with_config(gesture: G, config: HandlerConfig) -> Self {
        Self {
            tag: 0,
            state: GestureState::Undetermined,
            position: Point::ZERO,
            config,
            target: None,
            orchestrator: None,
            listener: None,
            pending_notifications: SmallVec::new(),
            transition_depth: 0,
            is_active: false,
            gesture,
        }
    }

    pub fn with_tag(mut self, tag: HandlerTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_listener(mut self, listener: Rc<dyn GestureListener<G>>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn tag(&self) -> HandlerTag {
        self.tag
    }

    pub fn set_tag(&mut self, tag: HandlerTag) {
        self.tag = tag;
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Position of the last sample accepted by [`handle`](Self::handle).
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Replaces the configuration. Only allowed while detached.
    pub fn set_config(&mut self, config: HandlerConfig) -> Result<(), HandlerError> {
        if self.is_attached() {
            return Err(HandlerError::ConfigLocked { tag: self.tag });
        }
        self.config = config;
        Ok(())
    }

    pub fn set_listener(&mut self, listener: Option<Rc<dyn GestureListener<G>>>) {
        self.listener = listener;
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut G {
        &mut self.gesture
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Arbitration bookkeeping owned by the orchestrator.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some() || self.orchestrator.is_some()
    }

    /// The attached target, if prepared and still alive.
    pub fn target(&self) -> Option<Rc<dyn GestureTarget>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    /// Attaches the handler for one interaction.
    ///
    /// Only weak handles are kept; the caller keeps both referents alive
    /// until [`reset`](Self::reset).
    pub fn prepare(
        &mut self,
        target: Rc<dyn GestureTarget>,
        orchestrator: Rc<dyn Orchestrator>,
    ) -> Result<(), HandlerError> {
        if self.is_attached() {
            log::warn!("{} prepared twice without a reset", self);
            return Err(HandlerError::AlreadyPrepared { tag: self.tag });
        }
        self.state = GestureState::Undetermined;
        self.target = Some(Rc::downgrade(&target));
        self.orchestrator = Some(Rc::downgrade(&orchestrator));
        Ok(())
    }

    /// Detaches the handler and clears per-interaction data.
    pub fn reset(&mut self) {
        self.target = None;
        self.orchestrator = None;
        self.state = GestureState::Undetermined;
        self.position = Point::ZERO;
        self.is_active = false;
        self.pending_notifications.clear();
        self.transition_depth = 0;
        self.gesture.on_reset();
    }

    pub fn handle(&mut self, sample: &PointerSample) -> Result<(), HandlerError> {
        if !self.is_attached() {
            return Err(HandlerError::NotPrepared { tag: self.tag });
        }
        if self.state.is_terminal() {
            log::debug!("{} ignoring sample in state {}", self, self.state);
            return Ok(());
        }
        self.position = sample.position;
        if self.state == GestureState::Active && self.config.should_cancel_when_outside {
            let target = self.resolve_target()?;
            if !self.is_within_bounds(&*target, sample.x(), sample.y()) {
                log::debug!(
                    "{} cancelled: ({}, {}) is outside its bounds",
                    self,
                    sample.x(),
                    sample.y()
                );
                return self.cancel();
            }
        }
        G::on_handle(self, sample)
    }

    pub fn want_events(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Forwards a routed sample to the listener.
    pub fn dispatch_touch_event(&self, sample: &PointerSample) {
        if let Some(listener) = &self.listener {
            listener.on_touch_event(self, sample);
        }
    }

    pub fn is_within_bounds(&self, target: &dyn GestureTarget, x: f32, y: f32) -> bool {
        target::is_within_bounds(target, self.config.hit_slop, x, y)
    }

    /// True when `other` must wait for this handler to fail before activating.
    pub fn is_required_by_handler_to_fail(&self, other: &dyn AnyGestureHandler) -> bool {
        !self.is_same_instance(other) && self.config.should_be_required_by_others_to_fail
    }

    /// True when this handler must be cancelled once `other` activates.
    pub fn is_required_to_cancel_upon_handler_activation(
        &self,
        other: &dyn AnyGestureHandler,
    ) -> bool {
        !self.is_same_instance(other) && other.config().should_cancel_others_when_activated
    }

    pub fn begin(&mut self) -> Result<(), HandlerError> {
        self.move_to_state(GestureState::Began)
    }

    pub fn activate(&mut self) -> Result<(), HandlerError> {
        self.move_to_state(GestureState::Active)
    }

    pub fn end(&mut self) -> Result<(), HandlerError> {
        self.move_to_state(GestureState::End)
    }

    pub fn fail(&mut self) -> Result<(), HandlerError> {
        self.move_to_state(GestureState::Failed)
    }

    pub fn cancel(&mut self) -> Result<(), HandlerError> {
        if !self.state.can_transition_to(GestureState::Cancelled) {
            return Ok(());
        }
        self.resolve_orchestrator()?;
        G::on_cancel(self);
        self.move_to_state(GestureState::Cancelled)
    }

    fn move_to_state(&mut self, new_state: GestureState) -> Result<(), HandlerError> {
        // The cancel hook may already have moved the machine on.
        if self.state == new_state || !self.state.can_transition_to(new_state) {
            return Ok(());
        }
        let orchestrator = self.resolve_orchestrator()?;
        let old_state = self.state;
        self.state = new_state;
        log::trace!("{}: {old_state} -> {new_state}", self);

        orchestrator.on_handler_state_change(&*self, new_state, old_state);

        // Transitions made from inside the hook queue behind this one, so the
        // listener hears them in the order the orchestrator did.
        self.pending_notifications.push((new_state, old_state));
        self.transition_depth += 1;
        let hooked = G::on_state_change(self, new_state, old_state);
        self.transition_depth = self.transition_depth.saturating_sub(1);
        if self.transition_depth == 0 {
            self.flush_notifications();
        }
        hooked
    }

    fn flush_notifications(&mut self) {
        let pending = std::mem::take(&mut self.pending_notifications);
        let Some(listener) = self.listener.clone() else {
            return;
        };
        for (new_state, old_state) in pending {
            listener.on_state_change(&*self, new_state, old_state);
        }
    }

    fn resolve_target(&self) -> Result<Rc<dyn GestureTarget>, HandlerError> {
        let weak = self
            .target
            .as_ref()
            .ok_or(HandlerError::NotPrepared { tag: self.tag })?;
        weak.upgrade().ok_or_else(|| {
            log::warn!("{} lost its target while attached", self);
            HandlerError::TargetReleased { tag: self.tag }
        })
    }

    fn resolve_orchestrator(&self) -> Result<Rc<dyn Orchestrator>, HandlerError> {
        let weak = self
            .orchestrator
            .as_ref()
            .ok_or(HandlerError::NotPrepared { tag: self.tag })?;
        weak.upgrade().ok_or_else(|| {
            log::warn!("{} lost its orchestrator while attached", self);
            HandlerError::OrchestratorReleased { tag: self.tag }
        })
    }

    fn is_same_instance(&self, other: &dyn AnyGestureHandler) -> bool {
        std::ptr::addr_eq(self, other)
    }
}

impl<G: Gesture> fmt::Display for GestureHandler<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", G::NAME, self.tag)
    }
}

impl<G: Gesture + fmt::Debug> fmt::Debug for GestureHandler<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureHandler")
            .field("tag", &self.tag)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("config", &self.config)
            .field("attached", &self.is_attached())
            .field("is_active", &self.is_active)
            .field("gesture", &self.gesture)
            .finish()
    }
}

/// Object-safe view of a handler, used by orchestrators that keep handlers
/// of different gesture kinds side by side.
pub trait AnyGestureHandler {
    fn tag(&self) -> HandlerTag;
    fn state(&self) -> GestureState;
    fn position(&self) -> Point;
    fn config(&self) -> &HandlerConfig;
    fn target(&self) -> Option<Rc<dyn GestureTarget>>;
    fn gesture_name(&self) -> &'static str;

    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn want_events(&self) -> bool;

    fn prepare(
        &mut self,
        target: Rc<dyn GestureTarget>,
        orchestrator: Rc<dyn Orchestrator>,
    ) -> Result<(), HandlerError>;
    fn handle(&mut self, sample: &PointerSample) -> Result<(), HandlerError>;
    fn reset(&mut self);
    fn dispatch_touch_event(&self, sample: &PointerSample);

    fn begin(&mut self) -> Result<(), HandlerError>;
    fn activate(&mut self) -> Result<(), HandlerError>;
    fn end(&mut self) -> Result<(), HandlerError>;
    fn cancel(&mut self) -> Result<(), HandlerError>;
    fn fail(&mut self) -> Result<(), HandlerError>;

    fn is_required_by_handler_to_fail(&self, other: &dyn AnyGestureHandler) -> bool;
    fn is_required_to_cancel_upon_handler_activation(&self, other: &dyn AnyGestureHandler)
        -> bool;
}

impl<G: Gesture> AnyGestureHandler for GestureHandler<G> {
    fn tag(&self) -> HandlerTag {
        GestureHandler::tag(self)
    }

    fn state(&self) -> GestureState {
        GestureHandler::state(self)
    }

    fn position(&self) -> Point {
        GestureHandler::position(self)
    }

    fn config(&self) -> &HandlerConfig {
        GestureHandler::config(self)
    }

    fn target(&self) -> Option<Rc<dyn GestureTarget>> {
        GestureHandler::target(self)
    }

    fn gesture_name(&self) -> &'static str {
        G::NAME
    }

    fn is_active(&self) -> bool {
        GestureHandler::is_active(self)
    }

    fn set_active(&mut self, active: bool) {
        GestureHandler::set_active(self, active)
    }

    fn want_events(&self) -> bool {
        GestureHandler::want_events(self)
    }

    fn prepare(
        &mut self,
        target: Rc<dyn GestureTarget>,
        orchestrator: Rc<dyn Orchestrator>,
    ) -> Result<(), HandlerError> {
        GestureHandler::prepare(self, target, orchestrator)
    }

    fn handle(&mut self, sample: &PointerSample) -> Result<(), HandlerError> {
        GestureHandler::handle(self, sample)
    }

    fn reset(&mut self) {
        GestureHandler::reset(self)
    }

    fn dispatch_touch_event(&self, sample: &PointerSample) {
        GestureHandler::dispatch_touch_event(self, sample)
    }

    fn begin(&mut self) -> Result<(), HandlerError> {
        GestureHandler::begin(self)
    }

    fn activate(&mut self) -> Result<(), HandlerError> {
        GestureHandler::activate(self)
    }

    fn end(&mut self) -> Result<(), HandlerError> {
        GestureHandler::end(self)
    }

    fn cancel(&mut self) -> Result<(), HandlerError> {
        GestureHandler::cancel(self)
    }

    fn fail(&mut self) -> Result<(), HandlerError> {
        GestureHandler::fail(self)
    }

    fn is_required_by_handler_to_fail(&self, other: &dyn AnyGestureHandler) -> bool {
        GestureHandler::is_required_by_handler_to_fail(self, other)
    }

    fn is_required_to_cancel_upon_handler_activation(
        &self,
        other: &dyn AnyGestureHandler,
    ) -> bool {
        GestureHandler::is_required_to_cancel_upon_handler_activation(self, other)
    }
}

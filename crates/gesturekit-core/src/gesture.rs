//! Gesture-specific hooks layered on the generic state machine.

use crate::error::HandlerError;
use crate::handler::GestureHandler;
use crate::sample::PointerSample;
use crate::state::GestureState;

/// Capability implemented by each concrete gesture kind.
///
/// Hooks that may drive transitions receive the whole handler, so a gesture
/// reaches its own data through [`GestureHandler::gesture_mut`] and moves the
/// machine through [`GestureHandler::begin`], [`GestureHandler::activate`] and
/// friends.
pub trait Gesture: Sized + 'static {
    /// Name used when formatting the handler.
    const NAME: &'static str = "GestureHandler";

    /// Interprets a sample. Without a recognizer the handler fails at once.
    fn on_handle(
        handler: &mut GestureHandler<Self>,
        _sample: &PointerSample,
    ) -> Result<(), HandlerError> {
        handler.fail()
    }

    /// Runs after the orchestrator has seen the transition.
    fn on_state_change(
        _handler: &mut GestureHandler<Self>,
        _new_state: GestureState,
        _old_state: GestureState,
    ) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Runs before the state flips to `Cancelled`, so `handler.state()` is
    /// still the pre-cancel state.
    fn on_cancel(_handler: &mut GestureHandler<Self>) {}

    /// Clears per-interaction gesture data when the handler is reset.
    fn on_reset(&mut self) {}
}

/// Gesture with no recognition logic; fails on its first sample.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct GenericGesture;

impl GenericGesture {
    pub fn new() -> Self {
        Self
    }
}

impl Gesture for GenericGesture {}

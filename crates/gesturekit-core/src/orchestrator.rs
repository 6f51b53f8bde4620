//! Collaborator interfaces consumed by the handler.

use crate::gesture::Gesture;
use crate::handler::{AnyGestureHandler, GestureHandler};
use crate::sample::PointerSample;
use crate::state::GestureState;

/// Arbiter that owns a set of handlers and resolves conflicts between them.
///
/// Called synchronously on every accepted transition, after the new state is
/// recorded and before the gesture's own state-change hook runs. The callback
/// takes `&self`; implementations keep their bookkeeping behind interior
/// mutability because a callback may cascade into transitions of sibling
/// handlers.
pub trait Orchestrator {
    fn on_handler_state_change(
        &self,
        handler: &dyn AnyGestureHandler,
        new_state: GestureState,
        old_state: GestureState,
    );
}

/// Observer of a handler's transitions and of the samples routed to it.
///
/// Purely observational: nothing it returns is consulted.
pub trait GestureListener<G: Gesture> {
    fn on_state_change(
        &self,
        _handler: &GestureHandler<G>,
        _new_state: GestureState,
        _old_state: GestureState,
    ) {
    }

    fn on_touch_event(&self, _handler: &GestureHandler<G>, _sample: &PointerSample) {}
}

//! Orchestrator double that records every state change it is told about.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gesturekit_core::{AnyGestureHandler, GestureState, HandlerTag, Orchestrator};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub tag: HandlerTag,
    pub new_state: GestureState,
    pub old_state: GestureState,
}

impl StateChange {
    pub fn new(tag: HandlerTag, new_state: GestureState, old_state: GestureState) -> Self {
        Self {
            tag,
            new_state,
            old_state,
        }
    }
}

type HandlerSlot = Weak<RefCell<dyn AnyGestureHandler>>;

/// Records state changes in arrival order.
///
/// With [`enforce_cancel_others`](Self::enforce_cancel_others) enabled it also
/// acts as a minimal arbiter: when a registered handler activates, every other
/// registered handler that reports it must be cancelled by that activation is
/// cancelled synchronously. Handlers that are mid-transition (already
/// borrowed) are skipped.
#[derive(Default)]
pub struct RecordingOrchestrator {
    changes: RefCell<Vec<StateChange>>,
    handlers: RefCell<SmallVec<[HandlerSlot; 4]>>,
    cancel_others: Cell<bool>,
}

impl RecordingOrchestrator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn enforcing() -> Rc<Self> {
        let orchestrator = Self::default();
        orchestrator.cancel_others.set(true);
        Rc::new(orchestrator)
    }

    pub fn enforce_cancel_others(&self, enabled: bool) {
        self.cancel_others.set(enabled);
    }

    pub fn register<H: AnyGestureHandler + 'static>(&self, handler: &Rc<RefCell<H>>) {
        let handler: Rc<RefCell<dyn AnyGestureHandler>> = handler.clone();
        self.handlers.borrow_mut().push(Rc::downgrade(&handler));
    }

    pub fn changes(&self) -> Vec<StateChange> {
        self.changes.borrow().clone()
    }

    pub fn changes_for(&self, tag: HandlerTag) -> Vec<StateChange> {
        self.changes
            .borrow()
            .iter()
            .filter(|change| change.tag == tag)
            .copied()
            .collect()
    }

    pub fn last_change(&self) -> Option<StateChange> {
        self.changes.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.changes.borrow_mut().clear();
    }

    fn cancel_siblings(&self, activated: &dyn AnyGestureHandler) {
        let slots: SmallVec<[HandlerSlot; 4]> = self.handlers.borrow().clone();
        for slot in slots {
            let Some(sibling) = slot.upgrade() else {
                continue;
            };
            let Ok(mut sibling) = sibling.try_borrow_mut() else {
                continue;
            };
            if !sibling.is_required_to_cancel_upon_handler_activation(activated) {
                continue;
            }
            if let Err(err) = sibling.cancel() {
                log::warn!("failed to cancel handler {}: {err}", sibling.tag());
            }
        }
    }
}

impl Orchestrator for RecordingOrchestrator {
    fn on_handler_state_change(
        &self,
        handler: &dyn AnyGestureHandler,
        new_state: GestureState,
        old_state: GestureState,
    ) {
        self.changes
            .borrow_mut()
            .push(StateChange::new(handler.tag(), new_state, old_state));

        if new_state == GestureState::Active && self.cancel_others.get() {
            self.cancel_siblings(handler);
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gesturekit_core::{
    Gesture, GestureHandler, GestureListener, GestureState, HandlerTag, PointerSample,
};
use gesturekit_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListenerEvent {
    StateChange {
        tag: HandlerTag,
        new_state: GestureState,
        old_state: GestureState,
    },
    Touch {
        tag: HandlerTag,
        position: Point,
    },
}

/// Listener that keeps every notification it receives.
#[derive(Default)]
pub struct RecordingListener {
    events: RefCell<Vec<ListenerEvent>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    pub fn states(&self) -> Vec<GestureState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::StateChange { new_state, .. } => Some(*new_state),
                ListenerEvent::Touch { .. } => None,
            })
            .collect()
    }

    pub fn touches(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, ListenerEvent::Touch { .. }))
            .count()
    }
}

impl<G: Gesture> GestureListener<G> for RecordingListener {
    fn on_state_change(
        &self,
        handler: &GestureHandler<G>,
        new_state: GestureState,
        old_state: GestureState,
    ) {
        self.events.borrow_mut().push(ListenerEvent::StateChange {
            tag: handler.tag(),
            new_state,
            old_state,
        });
    }

    fn on_touch_event(&self, handler: &GestureHandler<G>, sample: &PointerSample) {
        self.events.borrow_mut().push(ListenerEvent::Touch {
            tag: handler.tag(),
            position: sample.position,
        });
    }
}

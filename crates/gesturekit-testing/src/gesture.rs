//! Gesture whose recognition is a script of transitions, one per sample.

use std::collections::VecDeque;

use gesturekit_core::{Gesture, GestureHandler, GestureState, HandlerError, PointerSample};
use gesturekit_geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Ignore,
    Begin,
    Activate,
    End,
    Cancel,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HookCall {
    Handle(Point),
    StateChange {
        new_state: GestureState,
        old_state: GestureState,
    },
    /// State observed by the cancel hook, before the flip.
    Cancel(GestureState),
    Reset,
}

/// Applies the next scripted [`Step`] to every sample it interprets and
/// records every hook invocation. Once the script runs out, samples are
/// ignored.
#[derive(Clone, Debug, Default)]
pub struct ScriptedGesture {
    script: VecDeque<Step>,
    calls: Vec<HookCall>,
    activate_on_begin: bool,
}

impl ScriptedGesture {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: steps.into_iter().collect(),
            calls: Vec::new(),
            activate_on_begin: false,
        }
    }

    /// Makes the state-change hook activate the handler as soon as it begins.
    pub fn activating_on_begin(mut self) -> Self {
        self.activate_on_begin = true;
        self
    }

    pub fn push_step(&mut self, step: Step) {
        self.script.push_back(step);
    }

    pub fn calls(&self) -> &[HookCall] {
        &self.calls
    }

    pub fn handled_positions(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HookCall::Handle(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn remaining_steps(&self) -> usize {
        self.script.len()
    }
}

impl Gesture for ScriptedGesture {
    const NAME: &'static str = "ScriptedGesture";

    fn on_handle(
        handler: &mut GestureHandler<Self>,
        sample: &PointerSample,
    ) -> Result<(), HandlerError> {
        let gesture = handler.gesture_mut();
        gesture.calls.push(HookCall::Handle(sample.position));
        let step = gesture.script.pop_front().unwrap_or(Step::Ignore);
        match step {
            Step::Ignore => Ok(()),
            Step::Begin => handler.begin(),
            Step::Activate => handler.activate(),
            Step::End => handler.end(),
            Step::Cancel => handler.cancel(),
            Step::Fail => handler.fail(),
        }
    }

    fn on_state_change(
        handler: &mut GestureHandler<Self>,
        new_state: GestureState,
        old_state: GestureState,
    ) -> Result<(), HandlerError> {
        handler.gesture_mut().calls.push(HookCall::StateChange {
            new_state,
            old_state,
        });
        if new_state == GestureState::Began && handler.gesture().activate_on_begin {
            handler.activate()?;
        }
        Ok(())
    }

    fn on_cancel(handler: &mut GestureHandler<Self>) {
        let state = handler.state();
        handler.gesture_mut().calls.push(HookCall::Cancel(state));
    }

    fn on_reset(&mut self) {
        self.calls.push(HookCall::Reset);
    }
}

//! Relationship predicates as an orchestrator consumes them.

use std::cell::RefCell;
use std::rc::Rc;

use gesturekit_core::prelude::*;
use gesturekit_testing::prelude::*;

fn shared(
    tag: HandlerTag,
    config: HandlerConfig,
) -> Rc<RefCell<GestureHandler<ScriptedGesture>>> {
    Rc::new(RefCell::new(
        GestureHandler::with_config(ScriptedGesture::default(), config).with_tag(tag),
    ))
}

#[test]
fn required_to_fail_is_keyed_off_the_receiver() {
    let a = GestureHandler::with_config(
        GenericGesture,
        HandlerConfig::new().required_by_others_to_fail(true),
    )
    .with_tag(1);
    let b = GestureHandler::new(GenericGesture).with_tag(2);

    let a_dyn: &dyn AnyGestureHandler = &a;
    let b_dyn: &dyn AnyGestureHandler = &b;

    assert!(a_dyn.is_required_by_handler_to_fail(b_dyn));
    assert!(!b_dyn.is_required_by_handler_to_fail(b_dyn));
    assert!(!a_dyn.is_required_by_handler_to_fail(a_dyn));
    assert!(!b_dyn.is_required_by_handler_to_fail(a_dyn));
}

#[test]
fn equal_tags_do_not_make_handlers_the_same_instance() {
    let config = HandlerConfig::new()
        .required_by_others_to_fail(true)
        .cancel_others_when_activated(true);
    let first = GestureHandler::with_config(GenericGesture, config).with_tag(5);
    let second = GestureHandler::with_config(GenericGesture, config).with_tag(5);

    assert!(first.is_required_by_handler_to_fail(&second));
    assert!(first.is_required_to_cancel_upon_handler_activation(&second));
}

#[test]
fn activation_cancels_siblings_that_yield_to_it() {
    let surface = TestSurface::new(100.0, 100.0);
    let orchestrator = RecordingOrchestrator::enforcing();
    let winner = shared(1, HandlerConfig::new().cancel_others_when_activated(true));
    let began = shared(2, HandlerConfig::default());
    let idle = shared(3, HandlerConfig::default());

    for handler in [&winner, &began, &idle] {
        orchestrator.register(handler);
        handler
            .borrow_mut()
            .prepare(surface.clone(), orchestrator.clone())
            .expect("fresh handler prepares");
    }
    began.borrow_mut().begin().expect("sibling begins");

    winner.borrow_mut().activate().expect("winner activates");

    assert_eq!(winner.borrow().state(), GestureState::Active);
    assert_eq!(began.borrow().state(), GestureState::Cancelled);
    assert_eq!(idle.borrow().state(), GestureState::Cancelled);
    assert_eq!(
        orchestrator.changes(),
        vec![
            StateChange::new(2, GestureState::Began, GestureState::Undetermined),
            StateChange::new(1, GestureState::Active, GestureState::Undetermined),
            StateChange::new(2, GestureState::Cancelled, GestureState::Began),
            StateChange::new(3, GestureState::Cancelled, GestureState::Undetermined),
        ]
    );
    assert!(began
        .borrow()
        .gesture()
        .calls()
        .contains(&HookCall::Cancel(GestureState::Began)));
}

#[test]
fn siblings_in_terminal_states_are_left_alone() {
    let surface = TestSurface::new(100.0, 100.0);
    let orchestrator = RecordingOrchestrator::enforcing();
    let winner = shared(1, HandlerConfig::new().cancel_others_when_activated(true));
    let finished = shared(2, HandlerConfig::default());

    for handler in [&winner, &finished] {
        orchestrator.register(handler);
        handler
            .borrow_mut()
            .prepare(surface.clone(), orchestrator.clone())
            .expect("fresh handler prepares");
    }
    finished.borrow_mut().fail().expect("sibling fails");

    winner.borrow_mut().activate().expect("winner activates");

    assert_eq!(finished.borrow().state(), GestureState::Failed);
    assert_eq!(orchestrator.changes_for(2).len(), 1);
}

#[test]
fn mutual_cancel_others_does_not_cycle() {
    let surface = TestSurface::new(100.0, 100.0);
    let orchestrator = RecordingOrchestrator::enforcing();
    let config = HandlerConfig::new().cancel_others_when_activated(true);
    let first = shared(1, config);
    let second = shared(2, config);

    for handler in [&first, &second] {
        orchestrator.register(handler);
        handler
            .borrow_mut()
            .prepare(surface.clone(), orchestrator.clone())
            .expect("fresh handler prepares");
    }

    first.borrow_mut().activate().expect("first activates");
    second.borrow_mut().activate().expect("second is already cancelled");

    assert_eq!(first.borrow().state(), GestureState::Active);
    assert_eq!(second.borrow().state(), GestureState::Cancelled);
    assert_eq!(orchestrator.changes().len(), 2);
}

#[test]
fn activation_without_the_flag_cancels_nobody() {
    let surface = TestSurface::new(100.0, 100.0);
    let orchestrator = RecordingOrchestrator::enforcing();
    let plain = shared(1, HandlerConfig::default());
    let other = shared(2, HandlerConfig::default());

    for handler in [&plain, &other] {
        orchestrator.register(handler);
        handler
            .borrow_mut()
            .prepare(surface.clone(), orchestrator.clone())
            .expect("fresh handler prepares");
    }

    plain.borrow_mut().activate().expect("activates");

    assert_eq!(other.borrow().state(), GestureState::Undetermined);
}

#[test]
fn activity_flag_is_bookkeeping_only() {
    let surface = TestSurface::new(100.0, 100.0);
    let orchestrator = RecordingOrchestrator::new();
    let handler = shared(1, HandlerConfig::default());
    handler
        .borrow_mut()
        .prepare(surface.clone(), orchestrator.clone())
        .expect("fresh handler prepares");

    {
        let mut handler = handler.borrow_mut();
        let handler: &mut dyn AnyGestureHandler = &mut *handler;
        handler.set_active(true);
        assert!(handler.is_active());
        assert_eq!(handler.state(), GestureState::Undetermined);
        assert_eq!(handler.gesture_name(), "ScriptedGesture");
    }
    assert!(orchestrator.changes().is_empty());

    handler.borrow_mut().reset();
    assert!(!handler.borrow().is_active());
}

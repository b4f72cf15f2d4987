use std::cell::RefCell;
use std::rc::Rc;
use timer_knob::config::{DEGREES_PER_MINUTE, MAX_MINUTES};
use timer_knob::debounce::Debouncer;
use timer_knob::geometry::{angular_delta, Rect};
use timer_knob::scheduler::ManualScheduler;
use timer_knob::{DialAction, DialState, MoveOutcome, Point};

/// Knob laid out like the page: 256px square at (100, 50).
const KNOB: Rect = Rect {
    left: 100.0,
    top: 50.0,
    width: 256.0,
    height: 256.0,
};

fn pointer_at(deg: f64) -> Point {
    let c = KNOB.center();
    let r = deg.to_radians();
    Point::new(c.x + r.cos() * 120.0, c.y + r.sin() * 120.0)
}

fn begin(state: &mut DialState, deg: f64) {
    state.begin_drag(pointer_at(deg), KNOB.center());
}

fn move_to(state: &mut DialState, deg: f64) -> MoveOutcome {
    state.on_pointer_move(pointer_at(deg), KNOB.center())
}

fn assert_invariants(state: &DialState) {
    assert!(state.value <= MAX_MINUTES, "value {} above ceiling", state.value);
    let expected = state.value as f64 * DEGREES_PER_MINUTE;
    assert!(
        (state.rotation_degrees - expected).abs() < 1e-9,
        "rotation {} out of sync with value {}",
        state.rotation_degrees,
        state.value
    );
}

#[test]
fn full_clockwise_turn_adds_one_hundred() {
    let mut dial = DialState::new();
    begin(&mut dial, 0.0);
    for step in 1..=10 {
        move_to(&mut dial, (step * 36) as f64);
        assert_invariants(&dial);
    }
    assert_eq!(dial.value, 100);
}

#[test]
fn several_turns_keep_counting_until_ceiling() {
    let mut dial = DialState::new();
    begin(&mut dial, 0.0);
    // 12 turns would be 1200 minutes; the value stops at the ceiling.
    for step in 1..=120 {
        move_to(&mut dial, ((step * 36) % 360) as f64);
        assert_invariants(&dial);
    }
    assert_eq!(dial.value, MAX_MINUTES);

    // Backing off from the ceiling counts down right away.
    let before = dial.value;
    move_to(&mut dial, 360.0 - 36.0);
    assert_eq!(dial.value, before - 10);
}

#[test]
fn wraparound_reads_as_small_forward_step() {
    assert!((angular_delta(359.0, 1.0) - 2.0).abs() < 1e-9);

    let mut dial = DialState::new();
    begin(&mut dial, 359.0);
    let outcome = move_to(&mut dial, 1.0);
    match outcome {
        MoveOutcome::Updated { delta, value } => {
            assert!((delta - 2.0).abs() < 1e-6, "delta was {delta}");
            assert_eq!(value, 1);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn floor_lock_holds_against_counter_clockwise_drags() {
    let mut dial = DialState::new();
    begin(&mut dial, 90.0);
    for deg in [80.0, 60.0, 30.0, 0.0] {
        assert_eq!(move_to(&mut dial, deg), MoveOutcome::FloorLocked);
        assert_eq!(dial.value, 0);
    }
    // Stored angle is still 90°, so moving to 100° is a +10° step.
    move_to(&mut dial, 100.0);
    assert_eq!(dial.value, 3);
}

#[test]
fn zigzag_gesture_stays_in_bounds() {
    let mut dial = DialState::new();
    begin(&mut dial, 0.0);
    let mut deg = 0.0_f64;
    for i in 0..2_000 {
        // Mostly forward with periodic back-swings larger than the value.
        let step = if i % 7 == 6 { -170.0 } else { 23.0 };
        deg = (deg + step).rem_euclid(360.0);
        move_to(&mut dial, deg);
        assert_invariants(&dial);
    }
}

#[test]
fn reducer_path_matches_direct_calls() {
    let center = KNOB.center();
    let mut direct = DialState::new();
    begin(&mut direct, 0.0);
    move_to(&mut direct, 46.0);
    direct.end_drag();

    let via_actions = [
        DialAction::BeginDrag { pointer: pointer_at(0.0), center },
        DialAction::PointerMove { pointer: pointer_at(46.0), center },
        DialAction::EndDrag,
    ]
    .into_iter()
    .fold(DialState::new(), |state, action| state.transition(action).unwrap_or(state));

    assert_eq!(via_actions, direct);
    assert_eq!(via_actions.value, 13);
}

#[test]
fn commit_messages_pluralize() {
    let mut dial = DialState::new();
    begin(&mut dial, 0.0);
    move_to(&mut dial, 3.6);
    assert_eq!(dial.value, 1);
    assert_eq!(dial.commit(), "Timer set to 1 minute.");

    move_to(&mut dial, 18.0);
    assert_eq!(dial.value, 5);
    assert_eq!(dial.commit(), "Timer set to 5 minutes.");
}

#[test]
fn readout_settles_once_after_fast_drag() {
    let clock = ManualScheduler::new();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let mut readout = {
        let updates = updates.clone();
        let clock = clock.clone();
        Debouncer::new(clock.clone(), 50, move |v: u32| {
            updates.borrow_mut().push((v, clock.now_ms()))
        })
    };

    let mut dial = DialState::new();
    begin(&mut dial, 0.0);
    readout.push(dial.value);
    clock.advance(10);
    for step in 1..=9 {
        move_to(&mut dial, step as f64 * DEGREES_PER_MINUTE);
        readout.push(dial.value);
        clock.advance(10);
    }
    let last_change = clock.now_ms() - 10;
    clock.advance(200);

    assert_eq!(*updates.borrow(), vec![(9, last_change + 50)]);
}

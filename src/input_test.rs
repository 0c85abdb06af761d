use super::*;

#[test]
fn phase_default_is_idle() {
    assert_eq!(PullPhase::default(), PullPhase::Idle);
}

#[test]
fn at_rest_pins_everything_to_center() {
    let center = Point::new(200.0, 150.0);
    let state = PullState::at_rest(center);
    assert_eq!(state.pointer, center);
    assert_eq!(state.target, center);
    assert_eq!(state.phase, PullPhase::Idle);
}

#[test]
fn at_rest_is_neither_dragging_nor_releasing() {
    let state = PullState::at_rest(Point::new(0.0, 0.0));
    assert!(!state.is_dragging());
    assert!(!state.is_releasing());
}

#[test]
fn dragging_phase_reports_dragging() {
    let mut state = PullState::at_rest(Point::new(0.0, 0.0));
    state.phase = PullPhase::Dragging { origin: Point::new(10.0, 10.0) };
    assert!(state.is_dragging());
    assert!(!state.is_releasing());
}

#[test]
fn releasing_phase_reports_releasing() {
    let mut state = PullState::at_rest(Point::new(0.0, 0.0));
    state.phase = PullPhase::Releasing {
        spring: SpringBack::new(Point::new(30.0, 0.0), Point::new(0.0, 0.0)),
    };
    assert!(!state.is_dragging());
    assert!(state.is_releasing());
}

#[test]
fn dragging_carries_its_origin() {
    let origin = Point::new(120.0, 80.0);
    let phase = PullPhase::Dragging { origin };
    match phase {
        PullPhase::Dragging { origin: o } => assert_eq!(o, origin),
        _ => unreachable!(),
    }
}

#[test]
fn phase_variants_debug() {
    let variants = [
        PullPhase::Idle,
        PullPhase::Dragging { origin: Point::new(0.0, 0.0) },
        PullPhase::Releasing {
            spring: SpringBack::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0)),
        },
    ];
    for v in &variants {
        assert!(!format!("{v:?}").is_empty());
    }
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn counters_wait_for_half_visibility() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-satisfaction".to_string(),
            ratio: 0.4,
            now_ms: 1_000,
        },
    );
    assert_eq!(
        state.counter("stat-satisfaction").unwrap().phase,
        CounterPhase::Pending
    );
}

#[test]
fn integer_counter_runs_to_its_exact_target() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-satisfaction".to_string(),
            ratio: 0.6,
            now_ms: 1_000,
        },
    );
    assert_eq!(
        state.counter("stat-satisfaction").unwrap().phase,
        CounterPhase::Running { started_ms: 1_000 }
    );

    // halfway: ease_out_quart(0.5) = 0.9375, 88 * 0.9375 = 82.5
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 2_000 });
    assert_eq!(state.counter("stat-satisfaction").unwrap().rendered, "82%");

    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 3_000 });
    let counter = state.counter("stat-satisfaction").unwrap();
    assert_eq!(counter.rendered, "88%");
    assert_eq!(counter.phase, CounterPhase::Done);
}

#[test]
fn finished_counters_ignore_later_visibility_and_frames() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-open-tickets".to_string(),
            ratio: 1.0,
            now_ms: 0,
        },
    );
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 5_000 });
    assert_eq!(
        state.counter("stat-open-tickets").unwrap().phase,
        CounterPhase::Done
    );
    assert_eq!(state.counter("stat-open-tickets").unwrap().rendered, "247");

    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-open-tickets".to_string(),
            ratio: 1.0,
            now_ms: 6_000,
        },
    );
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 9_000 });
    let counter = state.counter("stat-open-tickets").unwrap();
    assert_eq!(counter.phase, CounterPhase::Done);
    assert_eq!(counter.rendered, "247");
}

#[test]
fn visibility_exactly_at_the_threshold_starts_the_run() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-resolved-week".to_string(),
            ratio: 0.5,
            now_ms: 100,
        },
    );
    assert_eq!(
        state.counter("stat-resolved-week").unwrap().phase,
        CounterPhase::Running { started_ms: 100 }
    );
}

#[test]
fn decimal_counter_keeps_one_fractional_digit() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-response-hours".to_string(),
            ratio: 1.0,
            now_ms: 0,
        },
    );

    // 4.5 * ease_out_quart(0.5) = 4.21875
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 1_000 });
    assert_eq!(
        state.counter("stat-response-hours").unwrap().rendered,
        "4.2h"
    );

    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 2_000 });
    let counter = state.counter("stat-response-hours").unwrap();
    assert_eq!(counter.rendered, "4.5h");
    assert_eq!(counter.phase, CounterPhase::Done);
}

#[test]
fn malformed_targets_never_animate() {
    let mut state = state();
    state.counters.push(CounterState::from_def(&CounterDef {
        id: "stat-backlog",
        label: "Backlog",
        target: "lots",
        initial_text: "??",
    }));
    assert_eq!(
        state.counter("stat-backlog").unwrap().phase,
        CounterPhase::Invalid
    );

    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-backlog".to_string(),
            ratio: 1.0,
            now_ms: 0,
        },
    );
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 5_000 });

    let counter = state.counter("stat-backlog").unwrap();
    assert_eq!(counter.phase, CounterPhase::Invalid);
    assert_eq!(counter.rendered, "??");
}

#[test]
fn frames_before_visibility_change_nothing() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 10_000 });
    assert!(state
        .counters
        .iter()
        .all(|c| c.phase == CounterPhase::Pending));
    assert_eq!(
        state.counter("stat-response-hours").unwrap().rendered,
        "0.0h"
    );
}

#[test]
fn shorter_configured_duration_is_respected() {
    let mut state = DashState::new(DashTuning {
        counter_duration_ms: 500,
        ..DashTuning::default()
    });
    run_runtime(
        &mut state,
        RuntimeAction::CounterVisible {
            id: "stat-resolved-week".to_string(),
            ratio: 1.0,
            now_ms: 0,
        },
    );
    run_runtime(&mut state, RuntimeAction::Frame { now_ms: 500 });

    let counter = state.counter("stat-resolved-week").unwrap();
    assert_eq!(counter.phase, CounterPhase::Done);
    assert_eq!(counter.rendered, "1284");
}

use listings_core::{update, Msg, Phase, StopReason, SweepSettings, SweepState};

#[test]
fn wave_settled_before_start_is_noop() {
    let state = SweepState::default();
    let (next, effects) = update(state.clone(), Msg::WaveSettled { yielded: 10 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn messages_after_stop_are_ignored() {
    let state = SweepState::new(SweepSettings::new(20, 2, 10));
    let (state, _) = update(state, Msg::Start);
    let (stopped, _) = update(state, Msg::WaveSettled { yielded: 0 });
    assert_eq!(stopped.phase(), Phase::Stopped(StopReason::Exhausted));

    let (again, effects) = update(stopped.clone(), Msg::WaveSettled { yielded: 40 });
    assert_eq!(again, stopped);
    assert!(effects.is_empty());

    let (restarted, effects) = update(stopped.clone(), Msg::Start);
    assert_eq!(restarted, stopped);
    assert!(effects.is_empty());
}

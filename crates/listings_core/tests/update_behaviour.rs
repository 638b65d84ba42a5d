use listings_core::{
    update, Effect, Msg, PageRange, Phase, StopReason, SweepSettings, SweepState,
};
use pretty_assertions::assert_eq;

fn expect_wave(effects: &[Effect]) -> (u64, Vec<PageRange>) {
    match effects {
        [Effect::FetchWave { wave, ranges }] => (*wave, ranges.clone()),
        other => panic!("expected a single FetchWave effect, got {other:?}"),
    }
}

#[test]
fn start_issues_first_wave_of_consecutive_ranges() {
    let state = SweepState::new(SweepSettings::new(20, 3, 100));
    let (state, effects) = update(state, Msg::Start);

    let (wave, ranges) = expect_wave(&effects);
    assert_eq!(wave, 1);
    assert_eq!(
        ranges,
        vec![
            PageRange { start: 1, end: 20 },
            PageRange { start: 21, end: 40 },
            PageRange { start: 41, end: 60 },
        ]
    );
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.view().next_page, 3);
}

#[test]
fn ranges_never_overlap_across_waves() {
    let mut state = SweepState::new(SweepSettings::new(10, 4, 100));
    let mut seen: Vec<PageRange> = Vec::new();

    let (next, mut effects) = update(state, Msg::Start);
    state = next;
    for _ in 0..5 {
        let (_, ranges) = expect_wave(&effects);
        seen.extend(ranges);
        let (next, next_effects) = update(state, Msg::WaveSettled { yielded: 7 });
        state = next;
        effects = next_effects;
    }

    for pair in seen.windows(2) {
        assert_eq!(pair[1].start, pair[0].end + 1);
    }
    assert_eq!(seen.len(), 20);
}

#[test]
fn empty_wave_stops_and_freezes_total() {
    let state = SweepState::new(SweepSettings::new(20, 2, 100));
    let (state, _) = update(state, Msg::Start);
    let (state, _) = update(state, Msg::WaveSettled { yielded: 40 });
    let (state, _) = update(state, Msg::WaveSettled { yielded: 5 });
    let (state, effects) = update(state, Msg::WaveSettled { yielded: 0 });

    assert_eq!(
        effects,
        vec![Effect::Stop {
            reason: StopReason::Exhausted
        }]
    );
    assert_eq!(state.phase(), Phase::Stopped(StopReason::Exhausted));
    assert_eq!(state.total_emitted(), 45);
    assert_eq!(state.view().waves_started, 3);
}

#[test]
fn wave_ceiling_stops_with_distinct_reason() {
    let state = SweepState::new(SweepSettings::new(20, 2, 2));
    let (state, _) = update(state, Msg::Start);
    let (state, effects) = update(state, Msg::WaveSettled { yielded: 40 });
    let (wave, _) = expect_wave(&effects);
    assert_eq!(wave, 2);

    let (state, effects) = update(state, Msg::WaveSettled { yielded: 40 });
    assert_eq!(
        effects,
        vec![Effect::Stop {
            reason: StopReason::WaveLimit
        }]
    );
    assert_eq!(state.phase(), Phase::Stopped(StopReason::WaveLimit));
    assert_eq!(state.total_emitted(), 80);
}

#[test]
fn zero_settings_are_clamped_to_one() {
    let settings = SweepSettings::new(0, 0, 0);
    assert_eq!(settings.per_page(), 1);
    assert_eq!(settings.concurrent(), 1);
    assert_eq!(settings.max_waves(), 1);

    let (_, effects) = update(SweepState::new(settings), Msg::Start);
    let (_, ranges) = expect_wave(&effects);
    assert_eq!(ranges, vec![PageRange { start: 1, end: 1 }]);
}

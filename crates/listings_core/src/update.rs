use crate::{Effect, Msg, Phase, StopReason, SweepState};

/// Pure update function: applies a message to state and returns any effects.
///
/// The sweep stops on the first wave that yields nothing. That rule cannot
/// tell end-of-data apart from a wave whose pages all failed; both stop.
pub fn update(mut state: SweepState, msg: Msg) -> (SweepState, Vec<Effect>) {
    let effects = match msg {
        Msg::Start => {
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            state.start();
            vec![next_wave_or_stop(&mut state)]
        }
        Msg::WaveSettled { yielded } => {
            if !state.is_awaiting_wave() {
                return (state, Vec::new());
            }
            if yielded == 0 {
                state.settle_wave(0);
                state.stop(StopReason::Exhausted);
                vec![Effect::Stop {
                    reason: StopReason::Exhausted,
                }]
            } else {
                state.settle_wave(yielded);
                vec![next_wave_or_stop(&mut state)]
            }
        }
    };

    (state, effects)
}

fn next_wave_or_stop(state: &mut SweepState) -> Effect {
    if state.can_start_wave() {
        let (wave, ranges) = state.begin_wave();
        Effect::FetchWave { wave, ranges }
    } else {
        state.stop(StopReason::WaveLimit);
        Effect::Stop {
            reason: StopReason::WaveLimit,
        }
    }
}

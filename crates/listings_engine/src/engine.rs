use std::collections::VecDeque;
use std::io::Write;

use engine_logging::engine_debug;
use futures_util::future::join_all;
use listings_core::{update, Effect, Msg, SweepSettings, SweepState, DEFAULT_IMAGE_HOST};

use crate::{
    EngineEvent, HarvestSummary, PageFetcher, PageSource, PersistError, RetryPolicy,
    StreamingArrayWriter, WaveReport,
};

#[derive(Debug, Clone)]
pub struct HarvestSettings {
    pub sweep: SweepSettings,
    pub retry: RetryPolicy,
    pub image_host: String,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            sweep: SweepSettings::default(),
            retry: RetryPolicy::default(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Sweeps `source` wave by wave and appends every record to `writer`.
///
/// Each wave's fetches run concurrently; records are written in page order
/// only after the whole wave has settled. The writer is left open: closing
/// it is the caller's job. Only writer failures are returned as errors.
pub async fn run_harvest<W: Write>(
    source: &dyn PageSource,
    settings: &HarvestSettings,
    writer: &mut StreamingArrayWriter<W>,
    sink: &dyn ProgressSink,
) -> Result<HarvestSummary, PersistError> {
    let fetcher = PageFetcher::new(source, settings.retry, &settings.image_host);
    let (mut state, effects) = update(SweepState::new(settings.sweep), Msg::Start);
    let mut pending: VecDeque<Effect> = effects.into();

    let mut stop_reason = None;
    let mut degraded_pages = 0;
    let mut final_wave_degraded = 0;

    while let Some(effect) = pending.pop_front() {
        match effect {
            Effect::FetchWave { wave, ranges } => {
                let (Some(first), Some(last)) =
                    (ranges.first().copied(), ranges.last().copied())
                else {
                    continue;
                };
                engine_debug!(
                    "Wave {} requesting pages {}-{} ({} requests)",
                    wave,
                    first.start,
                    last.end,
                    ranges.len()
                );

                let outcomes = join_all(ranges.iter().map(|range| fetcher.fetch(*range))).await;

                let degraded = outcomes.iter().filter(|outcome| outcome.degraded).count();
                let mut records = 0;
                for outcome in &outcomes {
                    for record in &outcome.records {
                        writer.append(record)?;
                        records += 1;
                    }
                }
                writer.flush()?;

                degraded_pages += degraded;
                final_wave_degraded = degraded;

                let (next, effects) = update(state, Msg::WaveSettled { yielded: records });
                state = next;
                sink.emit(EngineEvent::WaveCompleted(WaveReport {
                    wave,
                    first,
                    last,
                    records,
                    degraded_pages: degraded,
                    total: state.total_emitted(),
                }));
                pending.extend(effects);
            }
            Effect::Stop { reason } => {
                engine_debug!(
                    "Sweep stopped ({:?}) after {} records",
                    reason,
                    state.total_emitted()
                );
                stop_reason = Some(reason);
                sink.emit(EngineEvent::Stopped {
                    reason,
                    total: state.total_emitted(),
                });
            }
        }
    }

    let view = state.view();
    Ok(HarvestSummary {
        waves: view.waves_started,
        records: view.total_emitted,
        stop_reason,
        degraded_pages,
        final_wave_degraded,
    })
}

use engine_logging::{engine_info, engine_warn};
use listings_core::StopReason;
use listings_engine::{EngineEvent, ProgressSink};

/// Turns engine progress into operator-facing log lines.
pub struct LogProgressSink {
    max_waves: u64,
}

impl LogProgressSink {
    pub fn new(max_waves: u64) -> Self {
        Self { max_waves }
    }
}

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::WaveCompleted(report) => {
                engine_info!(
                    "Wave {} (listings {}-{}): {} found, {} total",
                    report.wave,
                    report.first.start,
                    report.last.end,
                    report.records,
                    report.total
                );
                if report.degraded_pages > 0 {
                    engine_warn!(
                        "Wave {}: {} pages dropped after exhausting retries",
                        report.wave,
                        report.degraded_pages
                    );
                }
            }
            EngineEvent::Stopped {
                reason: StopReason::Exhausted,
                total,
            } => {
                engine_info!("Empty wave, stopping with {} listings", total);
            }
            EngineEvent::Stopped {
                reason: StopReason::WaveLimit,
                total,
            } => {
                engine_warn!(
                    "Reached the {}-wave ceiling with {} listings; upstream may have more",
                    self.max_waves,
                    total
                );
            }
        }
    }
}

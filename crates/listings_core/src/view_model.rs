use crate::Phase;

/// Read-only snapshot of a sweep, for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepView {
    pub phase: Phase,
    pub waves_started: u64,
    /// Page index the next wave would begin at.
    pub next_page: u64,
    pub total_emitted: u64,
}

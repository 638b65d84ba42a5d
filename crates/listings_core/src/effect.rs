use crate::PageRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch every range concurrently and report the combined yield back.
    FetchWave { wave: u64, ranges: Vec<PageRange> },
    Stop { reason: StopReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A whole wave came back with zero records.
    Exhausted,
    /// The configured wave ceiling was reached.
    WaveLimit,
}

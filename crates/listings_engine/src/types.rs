use std::fmt;

use listings_core::{PageRange, StopReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    WaveCompleted(WaveReport),
    Stopped { reason: StopReason, total: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveReport {
    pub wave: u64,
    pub first: PageRange,
    pub last: PageRange,
    pub records: u64,
    /// Pages in this wave that exhausted their retries.
    pub degraded_pages: usize,
    /// Records written so far, this wave included.
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    pub waves: u64,
    pub records: u64,
    pub stop_reason: Option<StopReason>,
    pub degraded_pages: usize,
    /// Degraded pages in the wave that ended the run. When this equals the
    /// wave width the "exhausted" stop may have been premature.
    pub final_wave_degraded: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not the JSON document the search API returns.
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

//! Listings engine: HTTP page source, retrying page fetches, streaming output
//! and the wave driver that executes the core state machine.
mod engine;
mod fetch;
mod pages;
mod persist;
mod retry;
mod types;

pub use engine::{run_harvest, HarvestSettings, ProgressSink};
pub use fetch::{FetchSettings, PageSource, ReqwestPageSource};
pub use pages::{PageFetcher, PageOutcome};
pub use persist::{ensure_output_dir, PersistError, StreamingArrayWriter};
pub use retry::{fetch_with_retry, RetryPolicy};
pub use types::{EngineEvent, FailureKind, FetchError, HarvestSummary, WaveReport};

use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use listings_core::{PageRange, SearchPage};

use crate::{FetchError, PageSource};

/// Bounded retry with linear backoff: the delay before retry `i` is
/// `base_delay * i`, so a page costs at most `retries + 1` requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 2,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Delay before the `retry`-th retry (1-based).
    pub fn delay_before(&self, retry: u32) -> Duration {
        self.base_delay * retry
    }
}

/// Fetches `range`, retrying every failure kind until the budget is spent.
/// Returns the last error once all attempts failed.
pub async fn fetch_with_retry(
    source: &dyn PageSource,
    range: PageRange,
    policy: &RetryPolicy,
) -> Result<SearchPage, FetchError> {
    let mut retry = 0;

    loop {
        match source.fetch_page(range).await {
            Ok(page) => {
                if retry > 0 {
                    engine_debug!(
                        "Page {}-{} succeeded on attempt {}",
                        range.start,
                        range.end,
                        retry + 1
                    );
                }
                return Ok(page);
            }
            Err(err) if retry < policy.retries => {
                retry += 1;
                let delay = policy.delay_before(retry);
                engine_warn!(
                    "Page {}-{} failed ({}), retry {}/{} in {} ms",
                    range.start,
                    range.end,
                    err,
                    retry,
                    policy.retries,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

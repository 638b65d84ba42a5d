use engine_logging::{engine_debug, engine_warn};
use listings_core::{normalize, ListingRecord, PageRange};

use crate::{fetch_with_retry, PageSource, RetryPolicy};

#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    pub range: PageRange,
    pub records: Vec<ListingRecord>,
    /// The page exhausted its retries and was replaced by an empty result.
    pub degraded: bool,
}

/// Fetches and normalizes single pages. Failures never escape: a page that
/// runs out of retries degrades to an empty outcome.
pub struct PageFetcher<'a> {
    source: &'a dyn PageSource,
    policy: RetryPolicy,
    image_host: &'a str,
}

impl<'a> PageFetcher<'a> {
    pub fn new(source: &'a dyn PageSource, policy: RetryPolicy, image_host: &'a str) -> Self {
        Self {
            source,
            policy,
            image_host,
        }
    }

    pub async fn fetch(&self, range: PageRange) -> PageOutcome {
        match fetch_with_retry(self.source, range, &self.policy).await {
            Ok(page) => {
                let records: Vec<_> = page
                    .into_items()
                    .into_iter()
                    .map(|item| normalize(item, self.image_host))
                    .collect();
                if !records.is_empty() {
                    engine_debug!(
                        "Page {}-{}: {} listings",
                        range.start,
                        range.end,
                        records.len()
                    );
                }
                PageOutcome {
                    range,
                    records,
                    degraded: false,
                }
            }
            Err(err) => {
                engine_warn!(
                    "Page {}-{} dropped after {} attempts: {}",
                    range.start,
                    range.end,
                    self.policy.max_attempts(),
                    err
                );
                PageOutcome {
                    range,
                    records: Vec::new(),
                    degraded: true,
                }
            }
        }
    }
}

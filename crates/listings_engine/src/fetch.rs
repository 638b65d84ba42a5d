use std::time::Duration;

use futures_util::StreamExt;
use listings_core::{PageRange, SearchPage};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use url::Url;

use crate::{FailureKind, FetchError};

// The upstream rejects requests that do not look like they come from its own site.
const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";
const ORIGIN_VALUE: &str = "https://www.encar.com";
const REFERER_VALUE: &str = "https://www.encar.com/";
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/138.0.0.0 YaBrowser/25.8.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Largest response body accepted for one page.
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// One page of search results for a given range.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, range: PageRange) -> Result<SearchPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageSource {
    client: reqwest::Client,
    api: Url,
    max_bytes: u64,
}

impl ReqwestPageSource {
    /// `api` is the base search query; each request appends its own sort window.
    pub fn new(api: &str, settings: &FetchSettings) -> Result<Self, FetchError> {
        let api = Url::parse(api)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(browser_headers())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            api,
            max_bytes: settings.max_bytes,
        })
    }

    pub fn api(&self) -> &Url {
        &self.api
    }
}

#[async_trait::async_trait]
impl PageSource for ReqwestPageSource {
    async fn fetch_page(&self, range: PageRange) -> Result<SearchPage, FetchError> {
        let url = range.request_url(&self.api);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

impl ReqwestPageSource {
    fn too_large(&self, actual: Option<u64>) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client as ReqwestClient;

use crate::error::FetchError;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; MetatagVibeChecker/1.0)";
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

const MAX_REDIRECTS: usize = 10;

/// Downloads HTML pages. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: ReqwestClient,
}

impl Fetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Fetcher { client })
    }

    /// GET `url` and return its body untouched.
    ///
    /// Fails on non-2xx statuses, non-HTML content types and blank bodies, as
    /// well as on network errors and timeouts.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = ?e, url = %url, "Failed to fetch page");
                FetchError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Page returned error status");
            return Err(FetchError::from_status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !content_type.contains("text/html") {
            tracing::warn!(content_type = %content_type, url = %url, "Page is not HTML");
            return Err(FetchError::NotHtml);
        }

        let html = response.text().await.map_err(|e| {
            tracing::warn!(error = ?e, url = %url, "Failed to read page body");
            FetchError::from(e)
        })?;

        if html.trim().is_empty() {
            return Err(FetchError::EmptyPage);
        }

        tracing::debug!(url = %url, bytes = html.len(), "Fetched page");
        Ok(html)
    }
}

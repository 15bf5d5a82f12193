//! Remote feed access.
//!
//! The pipeline talks to the feed through the [`FeedClient`] trait so tests
//! can substitute a scripted double; [`HttpFeedClient`] is the production
//! implementation over a shared `reqwest` client.

use async_trait::async_trait;

use yieldcast_core::{CurveError, CurveResult};

/// Fetches one year's worth of raw feed text.
///
/// One GET retrieves an entire year of daily records, so repeated requests
/// for different dates within the same year are redundant at the network
/// level; the cache above this trait absorbs that.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetches the raw feed document for the given year.
    async fn fetch_year(&self, year: i32) -> CurveResult<String>;
}

/// HTTP implementation of [`FeedClient`] against the Treasury feed.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
    url_template: String,
}

impl HttpFeedClient {
    /// Creates a client for the given URL template (must contain `{year}`).
    #[must_use]
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url_template: url_template.into(),
        }
    }

    fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch_year(&self, year: i32) -> CurveResult<String> {
        let url = self.url_for(year);
        tracing::debug!(year, %url, "Fetching yield-curve feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CurveError::network(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| CurveError::network(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| CurveError::network(e.to_string()))
    }
}

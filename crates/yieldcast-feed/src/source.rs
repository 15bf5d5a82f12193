//! Curve resolution.
//!
//! [`YieldCurveSource`] resolves a yield curve for a logical request —
//! "current" or "as of date D" — preferring cache, falling back to the
//! remote feed, and falling back again to any previously cached value when
//! the feed fails.

use std::sync::Arc;

use yieldcast_core::{calendar, CurveError, CurveResult, Date, YieldCurve};

use crate::cache::{CacheEntryInfo, CurveCache};
use crate::client::{FeedClient, HttpFeedClient};
use crate::config::SourceConfig;
use crate::parse::parse_feed;

/// A logical curve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveRequest {
    /// The most recent curve the feed has. The trading date is not known
    /// until the feed answers, so the cache is consulted only afterwards.
    Current,
    /// The curve for a specific date (closest prior trading day when the
    /// exact date is absent from the feed).
    AsOf(Date),
}

/// Resolves yield curves against the cache and the remote feed.
pub struct YieldCurveSource {
    config: SourceConfig,
    client: Arc<dyn FeedClient>,
    cache: CurveCache,
}

impl YieldCurveSource {
    /// Creates a source backed by the production HTTP feed client.
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        let client = Arc::new(HttpFeedClient::new(config.feed_url.clone()));
        Self::with_client(config, client)
    }

    /// Creates a source with a caller-supplied feed client (test doubles).
    #[must_use]
    pub fn with_client(config: SourceConfig, client: Arc<dyn FeedClient>) -> Self {
        let cache = CurveCache::new(config.cache_dir.clone());
        Self {
            config,
            client,
            cache,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Resolves a curve for the request.
    ///
    /// `AsOf` consults the cache first and trusts any entry regardless of
    /// age. `Current` always round-trips to the feed to discover the latest
    /// trading date, then checks/writes that date's cache entry. A fetch or
    /// parse failure on `AsOf` falls back to a cached entry for the
    /// originally requested date before reporting the error.
    pub async fn resolve(&self, request: CurveRequest) -> CurveResult<YieldCurve> {
        match request {
            CurveRequest::AsOf(date) => self.resolve_as_of(date).await,
            CurveRequest::Current => self.resolve_current(Date::today()).await,
        }
    }

    async fn resolve_as_of(&self, date: Date) -> CurveResult<YieldCurve> {
        if let Some(curve) = self.cached(date).await {
            tracing::debug!(%date, "Cache hit");
            return Ok(curve);
        }

        match self.fetch_and_parse(date.year(), Some(date)).await {
            Ok(curve) => {
                self.store_best_effort(&curve).await;
                Ok(curve)
            }
            Err(e) => {
                tracing::warn!(%date, error = %e, "Fetch failed, trying stale cache");
                match self.cached(date).await {
                    Some(curve) => Ok(curve),
                    None => Err(e),
                }
            }
        }
    }

    async fn resolve_current(&self, today: Date) -> CurveResult<YieldCurve> {
        // The feed decides what "most recent" means; only once its date is
        // known can a cache key exist.
        let curve = self.fetch_and_parse(today.year(), None).await?;

        if let Some(cached) = self.cached(curve.date).await {
            tracing::debug!(date = %curve.date, "Current date already cached");
            return Ok(cached);
        }

        self.store_best_effort(&curve).await;
        Ok(curve)
    }

    /// Resolves the current curve plus the configured historical offsets.
    ///
    /// Returns an ordered label-to-curve mapping ("current" first, then each
    /// offset in configuration order). Entries that fail to resolve are
    /// omitted; partial results are acceptable and total failure yields an
    /// empty mapping rather than an error.
    pub async fn resolve_with_history(&self) -> Vec<(String, YieldCurve)> {
        self.resolve_with_history_from(Date::today()).await
    }

    /// History resolution from an explicit base date.
    pub async fn resolve_with_history_from(&self, base: Date) -> Vec<(String, YieldCurve)> {
        let mut resolved = Vec::new();

        match self.resolve_current(base).await {
            Ok(curve) => resolved.push(("current".to_string(), curve)),
            Err(e) => tracing::warn!(error = %e, "Current curve unavailable"),
        }

        // Strictly sequential; one slow offset blocks the next.
        for offset in &self.config.history_offsets {
            let candidate = base.add_days(-offset.days);
            let adjusted = calendar::previous_business_day(candidate);
            match self.resolve_as_of(adjusted).await {
                Ok(curve) => resolved.push((offset.label.clone(), curve)),
                Err(e) => {
                    tracing::warn!(label = %offset.label, date = %adjusted, error = %e,
                        "History curve unavailable");
                }
            }
        }

        resolved
    }

    /// Deletes the cache entry for a date (default: today). Returns whether
    /// an entry existed.
    pub async fn clear_cache(&self, date: Option<Date>) -> CurveResult<bool> {
        self.cache.clear(date.unwrap_or_else(Date::today)).await
    }

    /// Inspects the cache entry for a date (default: today).
    pub async fn cache_info(&self, date: Option<Date>) -> CurveResult<Option<CacheEntryInfo>> {
        self.cache.info(date.unwrap_or_else(Date::today)).await
    }

    async fn fetch_and_parse(&self, year: i32, target: Option<Date>) -> CurveResult<YieldCurve> {
        let raw = self.client.fetch_year(year).await?;
        let curve = parse_feed(&raw, target)?;
        if curve.is_empty() {
            // A record with zero usable points counts as a fetch failure.
            return Err(CurveError::feed_format(format!(
                "record for {} has no usable points",
                curve.date
            )));
        }
        tracing::info!(date = %curve.date, points = curve.points.len(), "Fetched curve");
        Ok(curve)
    }

    /// Cache lookup with read failures logged and treated as a miss.
    async fn cached(&self, date: Date) -> Option<YieldCurve> {
        match self.cache.load(date).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(%date, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    /// Cache write; failure is logged and never aborts a successful fetch.
    async fn store_best_effort(&self, curve: &YieldCurve) {
        if let Err(e) = self.cache.store(curve).await {
            tracing::warn!(date = %curve.date, error = %e, "Cache write failed");
        }
    }
}

//! End-to-end resolution tests against a scripted feed client and a
//! temp-directory cache.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use yieldcast_core::{CurveError, CurveResult, Date, Provenance};
use yieldcast_feed::{
    CurveRequest, FeedClient, HistoryOffset, SourceConfig, YieldCurveSource,
};

/// Feed double that serves scripted responses in order, repeating the last
/// one, and counts how many fetches were issued.
struct ScriptedClient {
    responses: Mutex<VecDeque<CurveResult<String>>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn new(responses: Vec<CurveResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedClient for ScriptedClient {
    async fn fetch_year(&self, _year: i32) -> CurveResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap()
        }
    }
}

fn entry(date: &str, fields: &[(&str, &str)]) -> String {
    let mut body = format!("<entry><d:NEW_DATE>{date}T00:00:00</d:NEW_DATE>");
    for (field, value) in fields {
        body.push_str(&format!("<d:{field}>{value}</d:{field}>"));
    }
    body.push_str("</entry>");
    body
}

/// Feed for late July 2024 with a 10Y path of 4.20 / 4.22 / 4.19.
fn july_feed() -> String {
    let mut feed = String::from("<feed>");
    feed.push_str(&entry("2024-07-23", &[("BC_10YEAR", "4.20")]));
    feed.push_str(&entry("2024-07-24", &[("BC_10YEAR", "4.22")]));
    feed.push_str(&entry("2024-07-25", &[("BC_10YEAR", "4.19")]));
    feed.push_str("</feed>");
    feed
}

fn source_with(
    dir: &tempfile::TempDir,
    client: Arc<ScriptedClient>,
    offsets: Vec<HistoryOffset>,
) -> YieldCurveSource {
    let config = SourceConfig {
        cache_dir: dir.path().to_path_buf(),
        feed_url: "http://unused.invalid/{year}".to_string(),
        history_offsets: offsets,
    };
    YieldCurveSource::with_client(config, client)
}

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

#[tokio::test]
async fn as_of_fetches_parses_and_returns_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client.clone(), vec![]);

    let curve = source
        .resolve(CurveRequest::AsOf(date("2024-07-25")))
        .await
        .unwrap();

    assert_eq!(curve.date, date("2024-07-25"));
    assert_eq!(curve.provenance, Provenance::Fresh);
    let point = curve.point("10Y").unwrap();
    assert_eq!(point.months, 120);
    assert_eq!(point.yield_pct, dec!(4.19));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn second_as_of_hits_cache_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client.clone(), vec![]);
    let request = CurveRequest::AsOf(date("2024-07-25"));

    let first = source.resolve(request).await.unwrap();
    let second = source.resolve(request).await.unwrap();

    assert_eq!(client.calls(), 1, "second resolve must not touch the feed");
    assert_eq!(second.date, first.date);
    assert_eq!(second.points, first.points);
    assert_eq!(second.provenance, Provenance::Cached);
}

#[tokio::test]
async fn network_failure_falls_back_to_stale_cache() {
    let dir = tempfile::tempdir().unwrap();
    let request = CurveRequest::AsOf(date("2024-07-25"));

    // Prime the cache with a successful fetch.
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client, vec![]);
    source.resolve(request).await.unwrap();

    // Now the feed is down; the prior entry must still answer. Cache-first
    // resolution means the dead feed is not even consulted.
    let failing = ScriptedClient::new(vec![Err(CurveError::network("connection refused"))]);
    let source = source_with(&dir, failing.clone(), vec![]);
    let curve = source.resolve(request).await.unwrap();
    assert_eq!(curve.provenance, Provenance::Cached);
    assert_eq!(curve.point("10Y").unwrap().yield_pct, dec!(4.19));
    assert_eq!(failing.calls(), 0);
}

#[tokio::test]
async fn fetch_failure_after_cache_miss_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let failing = ScriptedClient::new(vec![Err(CurveError::network("connection refused"))]);
    let source = source_with(&dir, failing.clone(), vec![]);

    let err = source
        .resolve(CurveRequest::AsOf(date("2024-07-25")))
        .await
        .unwrap_err();

    assert!(matches!(err, CurveError::Network { .. }));
    assert_eq!(failing.calls(), 1);
}

#[tokio::test]
async fn absent_date_resolves_to_closest_prior_and_caches_under_it() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client, vec![]);

    // 2024-07-26 is not in the feed; the 07-25 record answers.
    let curve = source
        .resolve(CurveRequest::AsOf(date("2024-07-26")))
        .await
        .unwrap();
    assert_eq!(curve.date, date("2024-07-25"));

    // Persisted under the actual resolved date, not the requested one.
    assert!(source
        .cache_info(Some(date("2024-07-25")))
        .await
        .unwrap()
        .is_some());
    assert!(source
        .cache_info(Some(date("2024-07-26")))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn record_with_no_usable_points_counts_as_fetch_failure() {
    let dir = tempfile::tempdir().unwrap();
    let feed = format!(
        "<feed>{}</feed>",
        entry("2024-07-25", &[("BC_10YEAR", "N/A"), ("BC_2YEAR", "")])
    );
    let client = ScriptedClient::new(vec![Ok(feed)]);
    let source = source_with(&dir, client, vec![]);

    let err = source
        .resolve(CurveRequest::AsOf(date("2024-07-25")))
        .await
        .unwrap_err();
    assert!(matches!(err, CurveError::FeedFormat { .. }));
}

#[tokio::test]
async fn corrupt_cache_entry_is_treated_as_miss() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("20240725.json"), "{ definitely not json").unwrap();

    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client.clone(), vec![]);

    let curve = source
        .resolve(CurveRequest::AsOf(date("2024-07-25")))
        .await
        .unwrap();
    assert_eq!(curve.provenance, Provenance::Fresh);
    assert_eq!(client.calls(), 1);

    // The fetch repaired the entry.
    let info = source.cache_info(Some(date("2024-07-25"))).await.unwrap();
    assert_eq!(info.unwrap().point_count, 1);
}

#[tokio::test]
async fn current_discovers_latest_date_then_caches_it() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client.clone(), vec![]);

    // Drive the Current path from a fixed base date via the history entry.
    let resolved = source.resolve_with_history_from(date("2024-07-26")).await;
    assert_eq!(resolved.len(), 1);
    let (label, curve) = &resolved[0];
    assert_eq!(label, "current");
    assert_eq!(curve.date, date("2024-07-25"));
    assert_eq!(curve.provenance, Provenance::Fresh);

    // Current always round-trips; the second pass still fetches but returns
    // the now-cached entry.
    let resolved = source.resolve_with_history_from(date("2024-07-26")).await;
    assert_eq!(resolved[0].1.provenance, Provenance::Cached);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn history_backdates_weekend_offsets_to_friday() {
    let dir = tempfile::tempdir().unwrap();
    let mut feed = String::from("<feed>");
    feed.push_str(&entry("2024-07-12", &[("BC_10YEAR", "4.18")]));
    feed.push_str(&entry("2024-07-19", &[("BC_10YEAR", "4.24")]));
    feed.push_str(&entry("2024-07-25", &[("BC_10YEAR", "4.19")]));
    feed.push_str("</feed>");

    let client = ScriptedClient::new(vec![Ok(feed)]);
    let offsets = vec![HistoryOffset::new("1w", 7), HistoryOffset::new("2w", 14)];
    let source = source_with(&dir, client, offsets);

    // Base is Saturday 2024-07-27: 7 days back is Saturday 07-20 (adjusted
    // to Friday 07-19), 14 days back is Saturday 07-13 (adjusted to 07-12).
    let resolved = source.resolve_with_history_from(date("2024-07-27")).await;

    let labels: Vec<&str> = resolved.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["current", "1w", "2w"]);
    assert_eq!(resolved[0].1.date, date("2024-07-25"));
    assert_eq!(resolved[1].1.date, date("2024-07-19"));
    assert_eq!(resolved[2].1.date, date("2024-07-12"));
}

#[tokio::test]
async fn history_backdates_past_christmas() {
    let dir = tempfile::tempdir().unwrap();
    let mut feed = String::from("<feed>");
    feed.push_str(&entry("2024-12-24", &[("BC_10YEAR", "4.59")]));
    feed.push_str(&entry("2024-12-31", &[("BC_10YEAR", "4.57")]));
    feed.push_str("</feed>");

    let client = ScriptedClient::new(vec![Ok(feed)]);
    let source = source_with(&dir, client, vec![HistoryOffset::new("1w", 7)]);

    // Base 2025-01-01 minus 7 days lands on Christmas Day, a recognized
    // holiday on a Wednesday; the check steps back to Tuesday the 24th.
    let resolved = source.resolve_with_history_from(date("2025-01-01")).await;
    assert_eq!(resolved[1].0, "1w");
    assert_eq!(resolved[1].1.date, date("2024-12-24"));
}

#[tokio::test]
async fn history_omits_failed_entries() {
    let dir = tempfile::tempdir().unwrap();
    // The current fetch succeeds, then the feed goes down. Base is Thursday
    // 2024-08-01, so "1w" asks for 2024-07-25 and is answered by the entry
    // the current resolution just cached; "2w" has to fetch and fails.
    let client = ScriptedClient::new(vec![
        Ok(july_feed()),
        Err(CurveError::network("connection reset")),
    ]);
    let offsets = vec![
        HistoryOffset::new("1w", 7),
        HistoryOffset::new("2w", 14),
    ];
    let source = source_with(&dir, client, offsets);

    let resolved = source.resolve_with_history_from(date("2024-08-01")).await;
    let labels: Vec<&str> = resolved.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, vec!["current", "1w"]);
    assert_eq!(resolved[1].1.provenance, Provenance::Cached);
}

#[tokio::test]
async fn clear_cache_then_resolve_fetches_again() {
    let dir = tempfile::tempdir().unwrap();
    let client = ScriptedClient::new(vec![Ok(july_feed())]);
    let source = source_with(&dir, client.clone(), vec![]);
    let request = CurveRequest::AsOf(date("2024-07-25"));

    source.resolve(request).await.unwrap();
    assert!(source.clear_cache(Some(date("2024-07-25"))).await.unwrap());

    let curve = source.resolve(request).await.unwrap();
    assert_eq!(curve.provenance, Provenance::Fresh);
    assert_eq!(client.calls(), 2);
}

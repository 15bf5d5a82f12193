//! On-disk curve cache.
//!
//! One JSON file per trading date, named from the date's compact `YYYYMMDD`
//! form. Entries carry a format version tag and are trusted forever once
//! written; there is no TTL and no bulk eviction, only single-date clear.
//! Writes go to a temp file then rename so a concurrent reader never sees a
//! partial entry.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yieldcast_core::{CurveError, CurveResult, Date, Provenance, YieldCurve, YieldPoint};

/// Current cache entry schema version.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// Persisted form of one curve.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    version: u32,
    retrieved_at: DateTime<Utc>,
    date: Date,
    points: Vec<YieldPoint>,
}

/// Metadata about one cache entry, for the administrative inspect operation.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryInfo {
    /// Trading date persisted inside the entry (re-read from disk).
    pub date: Date,
    /// When the entry was written.
    pub retrieved_at: DateTime<Utc>,
    /// Schema version of the stored entry.
    pub version: u32,
    /// Number of persisted points.
    pub point_count: usize,
    /// Path of the entry file.
    pub path: PathBuf,
}

/// File-per-date cache under a single directory.
#[derive(Debug, Clone)]
pub struct CurveCache {
    dir: PathBuf,
}

impl CurveCache {
    /// Creates a cache rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the entry file for a date.
    #[must_use]
    pub fn path_for(&self, date: Date) -> PathBuf {
        self.dir.join(format!("{}.json", date.compact()))
    }

    /// Loads the entry for a date, if one exists.
    ///
    /// A missing file is `Ok(None)`. A file that exists but cannot be read
    /// or deserialized, or that carries an unknown schema version, is a
    /// `CacheRead` error; callers treat that as a miss after logging.
    pub async fn load(&self, date: Date) -> CurveResult<Option<YieldCurve>> {
        let path = self.path_for(date);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(cache_read(&path, e)),
        };

        let entry: CacheEntry =
            serde_json::from_str(&raw).map_err(|e| cache_read(&path, e))?;

        if entry.version != CACHE_FORMAT_VERSION {
            return Err(CurveError::cache_read(
                path.display().to_string(),
                format!("unsupported cache version {}", entry.version),
            ));
        }

        Ok(Some(YieldCurve::new(
            entry.date,
            entry.points,
            Provenance::Cached,
        )))
    }

    /// Persists a curve under its own date.
    pub async fn store(&self, curve: &YieldCurve) -> CurveResult<()> {
        let path = self.path_for(curve.date);
        let entry = CacheEntry {
            version: CACHE_FORMAT_VERSION,
            retrieved_at: Utc::now(),
            date: curve.date,
            points: curve.points.clone(),
        };
        let body = serde_json::to_vec_pretty(&entry).map_err(|e| cache_write(&path, e))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| cache_write(&path, e))?;

        // Write-to-temp-then-rename keeps partially written entries
        // invisible to concurrent readers.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|e| cache_write(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| cache_write(&path, e))?;

        tracing::debug!(date = %curve.date, path = %path.display(), "Cached curve");
        Ok(())
    }

    /// Deletes the entry for a date. Returns whether an entry existed.
    pub async fn clear(&self, date: Date) -> CurveResult<bool> {
        let path = self.path_for(date);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(cache_write(&path, e)),
        }
    }

    /// Inspects the entry for a date without constructing a curve.
    pub async fn info(&self, date: Date) -> CurveResult<Option<CacheEntryInfo>> {
        let path = self.path_for(date);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(cache_read(&path, e)),
        };

        let entry: CacheEntry =
            serde_json::from_str(&raw).map_err(|e| cache_read(&path, e))?;

        Ok(Some(CacheEntryInfo {
            date: entry.date,
            retrieved_at: entry.retrieved_at,
            version: entry.version,
            point_count: entry.points.len(),
            path,
        }))
    }
}

fn cache_read(path: &Path, e: impl std::fmt::Display) -> CurveError {
    CurveError::cache_read(path.display().to_string(), e.to_string())
}

fn cache_write(path: &Path, e: impl std::fmt::Display) -> CurveError {
    CurveError::cache_write(path.display().to_string(), e.to_string())
}

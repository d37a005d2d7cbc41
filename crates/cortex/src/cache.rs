//! Analysis cache with per-entry TTL and hit/miss tracking.
//!
//! Uses `moka::sync::Cache` with the `Expiry` trait so each entry carries
//! the TTL captured from the config snapshot that produced it; a config
//! change never retroactively re-ages existing entries. Concurrent writes
//! to one key are last-write-wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;

use cortex_core::models::{CortexAnalysisResult, FileInfo};

/// Cached analysis plus the lifetime it was inserted with.
#[derive(Clone)]
struct CachedAnalysis {
    result: CortexAnalysisResult,
    ttl: Duration,
}

struct PerEntryTtl;

impl Expiry<String, CachedAnalysis> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedAnalysis,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedAnalysis,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Key → result store consulted and populated by the orchestrator.
pub struct AnalysisCache {
    entries: Cache<String, CachedAnalysis>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    pub fn new(capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cache key: path plus content fingerprint, so a content change is a
    /// different key and a stale entry is simply never asked for.
    pub fn key(file: &FileInfo) -> String {
        format!("{}:{}", file.path, file.content_fingerprint())
    }

    /// Live entry for the key, counting the hit or miss.
    pub fn get(&self, key: &str) -> Option<CortexAnalysisResult> {
        match self.entries.get(key) {
            Some(cached) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(cached.result)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: String, result: CortexAnalysisResult, ttl: Duration) {
        self.entries.insert(key, CachedAnalysis { result, ttl });
    }

    /// Drop every entry (used by `reset()`).
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    /// Zero the hit/miss counters (used by `reset()`).
    pub fn reset_counters(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::file_info_with_content;

    fn result_for(path: &str) -> CortexAnalysisResult {
        CortexAnalysisResult {
            target_file: path.to_string(),
            similarities: Vec::new(),
            recommendation: None,
            from_cache: false,
            metadata: cortex_core::models::AnalysisResultMetadata {
                timestamp: chrono::Utc::now(),
                processing_time_ms: 1,
            },
        }
    }

    #[test]
    fn key_changes_with_content() {
        let a = file_info_with_content("a.rs", "one");
        let b = file_info_with_content("a.rs", "two");
        assert_ne!(AnalysisCache::key(&a), AnalysisCache::key(&b));
    }

    #[test]
    fn get_counts_hits_and_misses() {
        let cache = AnalysisCache::new(16);
        assert!(cache.get("missing").is_none());
        cache.insert("k".to_string(), result_for("a.rs"), Duration::from_secs(60));
        assert!(cache.get("k").is_some());
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn expired_entry_is_not_served() {
        let cache = AnalysisCache::new(16);
        cache.insert("k".to_string(), result_for("a.rs"), Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn invalidate_all_defeats_the_cache() {
        let cache = AnalysisCache::new(16);
        cache.insert("k".to_string(), result_for("a.rs"), Duration::from_secs(60));
        cache.invalidate_all();
        assert!(cache.get("k").is_none());
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Caching, concurrency, and metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Consult and populate the analysis cache.
    pub enable_cache: bool,
    /// Lifetime of a cached analysis result (milliseconds).
    pub cache_ttl_ms: u64,
    /// Hard admission ceiling; requests beyond it are rejected, not queued.
    pub max_concurrent_analyses: usize,
    /// Accumulate pipeline counters.
    pub enable_metrics: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enable_cache: defaults::DEFAULT_ENABLE_CACHE,
            cache_ttl_ms: defaults::DEFAULT_CACHE_TTL_MS,
            max_concurrent_analyses: defaults::DEFAULT_MAX_CONCURRENT_ANALYSES,
            enable_metrics: defaults::DEFAULT_ENABLE_METRICS,
        }
    }
}

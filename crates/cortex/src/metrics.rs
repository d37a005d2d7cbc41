//! Pipeline counters. Plain atomics; zeroed only by `reset()`.

use std::sync::atomic::{AtomicU64, Ordering};

use cortex_core::models::{
    AnalysisMetrics, CacheMetrics, DecisionMetrics, InterceptionMetrics, MetricsSnapshot,
};

use crate::cache::AnalysisCache;

#[derive(Default)]
pub struct PipelineMetrics {
    events_processed: AtomicU64,
    analyses_performed: AtomicU64,
    recommendations_generated: AtomicU64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&self) {
        self.events_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_analysis(&self) {
        self.analyses_performed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_recommendation(&self) {
        self.recommendations_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.events_processed.store(0, Ordering::Relaxed);
        self.analyses_performed.store(0, Ordering::Relaxed);
        self.recommendations_generated.store(0, Ordering::Relaxed);
    }

    /// Grouped snapshot, folding in the cache counters.
    pub fn snapshot(&self, cache: &AnalysisCache) -> MetricsSnapshot {
        MetricsSnapshot {
            interception: InterceptionMetrics {
                events_processed: self.events_processed.load(Ordering::Relaxed),
            },
            analysis: AnalysisMetrics {
                analyses_performed: self.analyses_performed.load(Ordering::Relaxed),
            },
            decisions: DecisionMetrics {
                recommendations_generated: self.recommendations_generated.load(Ordering::Relaxed),
            },
            cache: CacheMetrics {
                hits: cache.hits(),
                misses: cache.misses(),
                entries: cache.entry_count(),
            },
        }
    }
}

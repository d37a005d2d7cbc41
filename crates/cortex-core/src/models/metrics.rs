use serde::{Deserialize, Serialize};

/// Point-in-time view of the pipeline counters, grouped by subsystem.
/// Counters accumulate across stop/start cycles; only `reset()` zeroes them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub interception: InterceptionMetrics,
    pub analysis: AnalysisMetrics,
    pub decisions: DecisionMetrics,
    pub cache: CacheMetrics,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InterceptionMetrics {
    /// Watcher events observed (including ones that were not analyzed).
    pub events_processed: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Analyses that ran to completion (cache hits included).
    pub analyses_performed: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DecisionMetrics {
    pub recommendations_generated: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

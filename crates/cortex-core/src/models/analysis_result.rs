use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recommendation::Recommendation;
use super::similarity::SimilarityResult;

/// Completed analysis of one file operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CortexAnalysisResult {
    /// Path of the analyzed file.
    pub target_file: String,
    /// Comparison set, sorted by overall score descending.
    pub similarities: Vec<SimilarityResult>,
    /// Absent when the decision subsystem is disabled.
    pub recommendation: Option<Recommendation>,
    /// True when served from the analysis cache.
    pub from_cache: bool,
    pub metadata: AnalysisResultMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResultMetadata {
    pub timestamp: DateTime<Utc>,
    pub processing_time_ms: u64,
}

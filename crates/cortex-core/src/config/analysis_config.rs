use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Master switch: when false, `analyze_file_operation` rejects outright.
    pub enabled: bool,
    /// Minimum overall score for a comparison to be reported.
    pub similarity_threshold: f64,
    /// Minimum overall confidence for a comparison to be reported.
    pub confidence_threshold: f64,
    /// Upper bound on existing files compared against one candidate.
    pub max_comparison_files: usize,
    /// Soft deadline for one similarity call (milliseconds).
    pub analysis_timeout_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ANALYSIS_ENABLED,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            max_comparison_files: defaults::DEFAULT_MAX_COMPARISON_FILES,
            analysis_timeout_ms: defaults::DEFAULT_ANALYSIS_TIMEOUT_MS,
        }
    }
}

use std::future::Future;

use crate::config::AnalysisConfig;
use crate::errors::CortexResult;
use crate::models::{FileInfo, SimilarityResult};

/// Per-call knobs handed to the similarity collaborator, snapshotted from
/// the analysis config at the start of each analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub similarity_threshold: f64,
    pub confidence_threshold: f64,
    pub max_comparison_files: usize,
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            similarity_threshold: config.similarity_threshold,
            confidence_threshold: config.confidence_threshold,
            max_comparison_files: config.max_comparison_files,
        }
    }
}

/// External similarity collaborator: compares a candidate file against the
/// existing corpus and returns one result per comparison.
///
/// The future must be `Send` because the orchestrator awaits it inside
/// spawned tasks. Results need not be sorted; the orchestrator orders them
/// by overall score before use.
pub trait SimilarityAnalyzer: Send + Sync {
    fn analyze(
        &self,
        file: &FileInfo,
        options: &AnalysisOptions,
    ) -> impl Future<Output = CortexResult<Vec<SimilarityResult>>> + Send;
}

impl<T: SimilarityAnalyzer> SimilarityAnalyzer for std::sync::Arc<T> {
    fn analyze(
        &self,
        file: &FileInfo,
        options: &AnalysisOptions,
    ) -> impl Future<Output = CortexResult<Vec<SimilarityResult>>> + Send {
        (**self).analyze(file, options)
    }
}

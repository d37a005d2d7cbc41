//! Analysis pipeline errors.

use super::error_code::{self, CortexErrorCode};

/// Errors from the orchestrated analysis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("concurrency limit reached: {active} active analyses (limit {limit})")]
    ConcurrencyRejected { active: usize, limit: usize },

    #[error("similarity analysis of {path} timed out after {timeout_ms}ms")]
    Timeout { path: String, timeout_ms: u64 },

    #[error("analysis is disabled in configuration")]
    Disabled,

    #[error("similarity analyzer failed: {reason}")]
    AnalyzerFailed { reason: String },
}

impl CortexErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::ConcurrencyRejected { .. } => error_code::CONCURRENCY_REJECTED,
            AnalysisError::Timeout { .. } => error_code::TIMEOUT_ERROR,
            AnalysisError::Disabled => error_code::ANALYSIS_DISABLED,
            AnalysisError::AnalyzerFailed { .. } => error_code::ANALYSIS_ERROR,
        }
    }
}

//! Decision engine errors.

use super::error_code::{self, CortexErrorCode};

/// Errors from recommendation generation and rule mutation.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid similarity data at index {index}: {reason}")]
    InvalidSimilarityData { index: usize, reason: String },

    #[error("invalid {field}: {value} must be between 0.0 and 1.0")]
    ThresholdRange { field: &'static str, value: f64 },

    #[error("threshold ordering violated: {reason}")]
    ThresholdOrder { reason: String },

    #[error("Weights must sum to 1.0 (got {sum})")]
    WeightSum { sum: f64 },

    #[error("decision exceeded time budget: {elapsed_ms}ms > {budget_ms}ms")]
    Timeout { elapsed_ms: u64, budget_ms: u64 },
}

impl CortexErrorCode for DecisionError {
    fn error_code(&self) -> &'static str {
        match self {
            DecisionError::InvalidInput { .. } => error_code::INVALID_INPUT,
            DecisionError::InvalidSimilarityData { .. } => error_code::INVALID_SIMILARITY_DATA,
            DecisionError::ThresholdRange { .. } | DecisionError::ThresholdOrder { .. } => {
                error_code::VALIDATION_ERROR
            }
            DecisionError::WeightSum { .. } => error_code::VALIDATION_ERROR,
            DecisionError::Timeout { .. } => error_code::DECISION_TIMEOUT,
        }
    }
}

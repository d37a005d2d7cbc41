//! Error taxonomy: one enum per subsystem, aggregated into [`CortexError`].

pub mod analysis_error;
pub mod config_error;
pub mod decision_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use decision_error::DecisionError;
pub use error_code::CortexErrorCode;

/// Top-level error for the Cortex system.
#[derive(Debug, thiserror::Error)]
pub enum CortexError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("decision error: {0}")]
    Decision(#[from] DecisionError),

    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl CortexErrorCode for CortexError {
    fn error_code(&self) -> &'static str {
        match self {
            CortexError::Config(e) => e.error_code(),
            CortexError::Decision(e) => e.error_code(),
            CortexError::Analysis(e) => e.error_code(),
        }
    }
}

pub type CortexResult<T> = Result<T, CortexError>;

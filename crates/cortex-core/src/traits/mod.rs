//! Interfaces of the external collaborators.

pub mod analyzer;
pub mod interceptor;

pub use analyzer::{AnalysisOptions, SimilarityAnalyzer};
pub use interceptor::FileInterceptor;

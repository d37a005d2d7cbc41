//! Data model: file snapshots, similarity comparisons, recommendations,
//! analysis results, status, and metrics.

pub mod analysis_result;
pub mod file_info;
pub mod metrics;
pub mod recommendation;
pub mod similarity;
pub mod status;

pub use analysis_result::{AnalysisResultMetadata, CortexAnalysisResult};
pub use file_info::{FileInfo, FileMetadata};
pub use metrics::{
    AnalysisMetrics, CacheMetrics, DecisionMetrics, InterceptionMetrics, MetricsSnapshot,
};
pub use recommendation::{Alternative, DecisionAction, Recommendation, RecommendationMetadata};
pub use similarity::{layers, SimilarityLayerScore, SimilarityMetadata, SimilarityResult};
pub use status::{ComponentStates, CortexStatus, RunState};

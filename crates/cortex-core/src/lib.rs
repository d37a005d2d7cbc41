//! # cortex-core
//!
//! Foundation crate for the Cortex file-change decision system.
//! Defines all types, models, config, errors, events, and collaborator
//! traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CortexConfig;
pub use errors::{CortexError, CortexResult};
pub use models::{
    CortexAnalysisResult, DecisionAction, FileInfo, Recommendation, SimilarityResult,
};

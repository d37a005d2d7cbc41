//! # cortex
//!
//! Orchestrator for the Cortex file-change decision system. Subscribes to
//! an external file watcher, rate-limits concurrent analyses behind a hard
//! admission ceiling, caches recent results, invokes the decision engine,
//! and fans events out to registered listeners with per-listener isolation.

pub mod admission;
pub mod cache;
pub mod metrics;
pub mod orchestrator;

pub use admission::{AdmissionControl, AdmissionPermit};
pub use cache::AnalysisCache;
pub use metrics::PipelineMetrics;
pub use orchestrator::Cortex;

// The full public surface re-exported for hosts that depend on this crate
// alone.
pub use cortex_core::{config, errors, events, models, traits, tracing_setup};
pub use cortex_core::{CortexConfig, CortexError, CortexResult};
pub use cortex_decision::{DecisionEngine, EngineConfig, EngineConfigUpdate};

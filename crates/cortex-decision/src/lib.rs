//! # cortex-decision
//!
//! The decision engine: pure computation from a file snapshot and a set of
//! similarity comparisons to a ranked [`cortex_core::models::Recommendation`],
//! under validated per-file-type rules. No I/O; a soft time budget is the
//! only concession to the clock.

pub mod alternatives;
pub mod engine;
pub mod rules;
pub mod signals;

pub use engine::{DecisionEngine, EngineConfig, EngineConfigUpdate};

//! CortexEventHandler trait, all methods with no-op defaults.

use crate::models::{CortexAnalysisResult, Recommendation};

use super::types::{ErrorEvent, FileOperationEvent};

/// Trait for observing Cortex pipeline events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` because dispatch
/// happens on the analysis path of a multi-threaded runtime.
pub trait CortexEventHandler: Send + Sync {
    /// A debounced file operation arrived from the watcher.
    fn on_file_operation(&self, _event: &FileOperationEvent) {}

    /// An analysis ran to completion (cache hits included).
    fn on_analysis_complete(&self, _result: &CortexAnalysisResult) {}

    /// A recommendation was produced for an analysis.
    fn on_recommendation(&self, _recommendation: &Recommendation) {}

    /// A per-file failure: rejection, timeout, or collaborator error.
    fn on_error(&self, _event: &ErrorEvent) {}
}

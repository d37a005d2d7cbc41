//! Synchronous fan-out with per-handler isolation.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::models::{CortexAnalysisResult, Recommendation};

use super::handler::CortexEventHandler;
use super::types::{ErrorEvent, FileOperationEvent};

/// Token returned by [`EventDispatcher::add_handler`], used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Dispatches events to registered handlers in registration order.
///
/// Each handler call is individually guarded: a panic inside one handler is
/// caught and logged, and neither suppresses delivery to the remaining
/// handlers nor escapes into the triggering code path.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<(HandlerId, Arc<dyn CortexEventHandler>)>>,
    next_id: AtomicU64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&self, handler: Arc<dyn CortexEventHandler>) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .write()
            .expect("handler registry poisoned")
            .push((id, handler));
        id
    }

    /// Returns true when the handler was registered.
    pub fn remove_handler(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.write().expect("handler registry poisoned");
        let before = handlers.len();
        handlers.retain(|(hid, _)| *hid != id);
        handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().expect("handler registry poisoned").len()
    }

    pub fn dispatch_file_operation(&self, event: &FileOperationEvent) {
        self.each("on_file_operation", |h| h.on_file_operation(event));
    }

    pub fn dispatch_analysis_complete(&self, result: &CortexAnalysisResult) {
        self.each("on_analysis_complete", |h| h.on_analysis_complete(result));
    }

    pub fn dispatch_recommendation(&self, recommendation: &Recommendation) {
        self.each("on_recommendation", |h| h.on_recommendation(recommendation));
    }

    pub fn dispatch_error(&self, event: &ErrorEvent) {
        self.each("on_error", |h| h.on_error(event));
    }

    fn each<F: Fn(&dyn CortexEventHandler)>(&self, event_name: &str, f: F) {
        let handlers: Vec<_> = {
            let guard = self.handlers.read().expect("handler registry poisoned");
            guard.iter().map(|(id, h)| (*id, Arc::clone(h))).collect()
        };
        for (id, handler) in handlers {
            if catch_unwind(AssertUnwindSafe(|| f(handler.as_ref()))).is_err() {
                warn!(handler = id.0, event = event_name, "event handler panicked");
            }
        }
    }
}

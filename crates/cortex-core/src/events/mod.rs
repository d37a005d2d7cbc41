//! Event system for Cortex.
//! Trait with no-op defaults, synchronous dispatch, per-handler isolation.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::{EventDispatcher, HandlerId};
pub use handler::CortexEventHandler;
pub use types::{ErrorEvent, FileOperation, FileOperationEvent};

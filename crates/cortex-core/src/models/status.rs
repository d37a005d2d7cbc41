use serde::{Deserialize, Serialize};

/// Run state of the orchestrator or one of its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Stopped,
}

/// Per-component run states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStates {
    pub interceptor: RunState,
    pub analyzer: RunState,
    pub decision_engine: RunState,
}

/// Snapshot of orchestrator health and activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CortexStatus {
    pub status: RunState,
    pub components: ComponentStates,
    pub monitored_paths: Vec<String>,
    pub uptime_ms: u64,
    pub active_analyses: usize,
}

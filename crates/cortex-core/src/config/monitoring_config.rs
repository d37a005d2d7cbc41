use serde::{Deserialize, Serialize};

use super::defaults;

/// File monitoring configuration. Consumed by the file-watch collaborator:
/// debouncing, size limits, and ignore filtering happen on its side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Directories handed to the interceptor on `start()`.
    pub watch_paths: Vec<String>,
    /// Debounce window for raw filesystem events (milliseconds).
    pub debounce_ms: u64,
    /// Files larger than this are not analyzed (bytes).
    pub max_file_size: u64,
    /// Glob patterns the interceptor filters out (e.g. `*.log`).
    pub ignore_patterns: Vec<String>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            watch_paths: Vec::new(),
            debounce_ms: defaults::DEFAULT_DEBOUNCE_MS,
            max_file_size: defaults::DEFAULT_MAX_FILE_SIZE,
            ignore_patterns: defaults::DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

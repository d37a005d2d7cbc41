use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete file operation reported by the watch collaborator, after its
/// own debouncing and ignore filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    Create,
    Write,
    Delete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOperationEvent {
    pub operation: FileOperation,
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

impl FileOperationEvent {
    pub fn new(operation: FileOperation, path: impl Into<String>) -> Self {
        Self {
            operation,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Failure surfaced to listeners. `code` is a stable string from
/// [`crate::errors::error_code`], so handlers can branch without parsing
/// the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub code: String,
    pub message: String,
    pub path: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorEvent {
    pub fn new(code: &str, message: impl Into<String>, path: Option<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            path,
            timestamp: Utc::now(),
        }
    }
}

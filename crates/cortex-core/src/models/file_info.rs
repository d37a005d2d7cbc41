use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::normalize_extension;

/// Immutable snapshot of a file at observation time.
///
/// Owned by the caller; the decision engine borrows it for the duration of
/// one decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Non-empty file identifier.
    pub path: String,
    pub content: Option<String>,
    pub content_hash: Option<String>,
    pub metadata: FileMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub size: u64,
    pub extension: String,
    pub mime_type: String,
    pub last_modified: DateTime<Utc>,
    pub encoding: Option<String>,
}

impl FileInfo {
    /// Minimal snapshot for a watcher-driven analysis: path-derived metadata
    /// only, no content. Performs no filesystem I/O.
    pub fn from_path(path: &str) -> Self {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(normalize_extension)
            .unwrap_or_default();
        Self {
            path: path.to_string(),
            content: None,
            content_hash: None,
            metadata: FileMetadata {
                size: 0,
                extension,
                mime_type: String::new(),
                last_modified: Utc::now(),
                encoding: None,
            },
        }
    }

    /// Normalized extension token used for rule lookup.
    pub fn extension(&self) -> String {
        normalize_extension(&self.metadata.extension)
    }

    /// True when there is no usable content for content-sensitive layers.
    pub fn has_limited_content(&self) -> bool {
        self.content.as_deref().map_or(true, |c| c.is_empty())
    }

    /// Stable fingerprint of the observed content, for cache keying.
    ///
    /// Prefers the precomputed `content_hash`; falls back to hashing the
    /// content itself, then to the empty-input hash.
    pub fn content_fingerprint(&self) -> String {
        let input = self
            .content_hash
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or("");
        blake3::hash(input.as_bytes()).to_hex().to_string()
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Score thresholds that partition similarity space into actions.
///
/// Invariant (validated on every mutation):
/// `create_threshold <= update_threshold <= merge_threshold`, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Scores at or above this recommend a merge.
    pub merge_threshold: f64,
    /// Scores at or above this (but below merge) recommend an update.
    pub update_threshold: f64,
    /// Scores below this recommend a create; [create, update) is the warn zone.
    pub create_threshold: f64,
    /// Confidence bar for unattended application.
    pub auto_apply_threshold: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            merge_threshold: defaults::DEFAULT_MERGE_THRESHOLD,
            update_threshold: defaults::DEFAULT_UPDATE_THRESHOLD,
            create_threshold: defaults::DEFAULT_CREATE_THRESHOLD,
            auto_apply_threshold: defaults::DEFAULT_AUTO_APPLY_THRESHOLD,
        }
    }
}

/// Relative importance of each similarity layer. Must sum to 1.0 (±1e-6).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionWeights {
    pub filename_weight: f64,
    pub structure_weight: f64,
    pub semantic_weight: f64,
    pub content_weight: f64,
}

impl DecisionWeights {
    pub fn sum(&self) -> f64 {
        self.filename_weight + self.structure_weight + self.semantic_weight + self.content_weight
    }
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            filename_weight: defaults::DEFAULT_FILENAME_WEIGHT,
            structure_weight: defaults::DEFAULT_STRUCTURE_WEIGHT,
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            content_weight: defaults::DEFAULT_CONTENT_WEIGHT,
        }
    }
}

/// Per-extension threshold overrides plus the default fallback and layer weights.
///
/// Extension keys are normalized tokens (lowercase, no leading dot); lookup
/// goes through [`normalize_extension`] so `"RS"`, `".rs"`, and `"rs"` agree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionRules {
    pub file_type_rules: HashMap<String, DecisionThresholds>,
    pub default_rules: DecisionThresholds,
    pub weights: DecisionWeights,
}

impl DecisionRules {
    /// Resolve the active thresholds for an extension, falling back to the
    /// defaults. Returns the thresholds and the applied-rule tag.
    pub fn resolve(&self, extension: &str) -> (DecisionThresholds, String) {
        let token = normalize_extension(extension);
        match self.file_type_rules.get(&token) {
            Some(t) => (*t, format!("{token}-rules")),
            None => (self.default_rules, "default-rules".to_string()),
        }
    }
}

/// Normalize an extension to its rule-lookup token: lowercase, no leading dot.
pub fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// Engine-side performance knobs, distinct from the orchestrator's
/// [`super::PerformanceConfig`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionPerformanceConfig {
    /// Soft budget for one `generate_recommendation` call (milliseconds).
    pub max_decision_time_ms: u64,
    /// Maximum ranked alternatives attached to a recommendation.
    pub max_alternatives: usize,
    /// Attach per-layer score breakdowns to the reasoning text.
    pub enable_explanations: bool,
}

impl Default for DecisionPerformanceConfig {
    fn default() -> Self {
        Self {
            max_decision_time_ms: defaults::DEFAULT_MAX_DECISION_TIME_MS,
            max_alternatives: defaults::DEFAULT_MAX_ALTERNATIVES,
            enable_explanations: defaults::DEFAULT_ENABLE_EXPLANATIONS,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision subsystem configuration (orchestrator-level knobs; the engine's
/// thresholds and rules live in [`super::decision_rules`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// When false, analyses complete without a recommendation.
    pub enabled: bool,
    /// Confidence bar above which a recommendation may be applied unattended.
    pub auto_apply_threshold: f64,
    /// Maximum ranked alternatives attached to a recommendation.
    pub max_alternatives: usize,
    /// Attach per-layer score breakdowns to the reasoning text.
    pub enable_explanations: bool,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_DECISIONS_ENABLED,
            auto_apply_threshold: defaults::DEFAULT_AUTO_APPLY_THRESHOLD,
            max_alternatives: defaults::DEFAULT_MAX_ALTERNATIVES,
            enable_explanations: defaults::DEFAULT_ENABLE_EXPLANATIONS,
        }
    }
}

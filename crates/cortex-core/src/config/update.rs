//! Partial-update types for validated config mutation.
//!
//! Each struct mirrors its config section with every field optional; `apply`
//! merges the provided fields into a target. Callers validate the merged
//! result before swapping it in, so an invalid update never partially lands.

use std::collections::HashMap;

use serde::Deserialize;

use super::{
    AnalysisConfig, CortexConfig, DecisionConfig, DecisionThresholds, DecisionWeights,
    MonitoringConfig, PerformanceConfig,
};

/// Partial update for the full orchestrator config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CortexConfigUpdate {
    pub monitoring: Option<MonitoringUpdate>,
    pub analysis: Option<AnalysisUpdate>,
    pub decisions: Option<DecisionsUpdate>,
    pub performance: Option<PerformanceUpdate>,
}

impl CortexConfigUpdate {
    pub fn apply(&self, target: &mut CortexConfig) {
        if let Some(m) = &self.monitoring {
            m.apply(&mut target.monitoring);
        }
        if let Some(a) = &self.analysis {
            a.apply(&mut target.analysis);
        }
        if let Some(d) = &self.decisions {
            d.apply(&mut target.decisions);
        }
        if let Some(p) = &self.performance {
            p.apply(&mut target.performance);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitoringUpdate {
    pub watch_paths: Option<Vec<String>>,
    pub debounce_ms: Option<u64>,
    pub max_file_size: Option<u64>,
    pub ignore_patterns: Option<Vec<String>>,
}

impl MonitoringUpdate {
    pub fn apply(&self, target: &mut MonitoringConfig) {
        if let Some(v) = &self.watch_paths {
            target.watch_paths = v.clone();
        }
        if let Some(v) = self.debounce_ms {
            target.debounce_ms = v;
        }
        if let Some(v) = self.max_file_size {
            target.max_file_size = v;
        }
        if let Some(v) = &self.ignore_patterns {
            target.ignore_patterns = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalysisUpdate {
    pub enabled: Option<bool>,
    pub similarity_threshold: Option<f64>,
    pub confidence_threshold: Option<f64>,
    pub max_comparison_files: Option<usize>,
    pub analysis_timeout_ms: Option<u64>,
}

impl AnalysisUpdate {
    pub fn apply(&self, target: &mut AnalysisConfig) {
        if let Some(v) = self.enabled {
            target.enabled = v;
        }
        if let Some(v) = self.similarity_threshold {
            target.similarity_threshold = v;
        }
        if let Some(v) = self.confidence_threshold {
            target.confidence_threshold = v;
        }
        if let Some(v) = self.max_comparison_files {
            target.max_comparison_files = v;
        }
        if let Some(v) = self.analysis_timeout_ms {
            target.analysis_timeout_ms = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DecisionsUpdate {
    pub enabled: Option<bool>,
    pub auto_apply_threshold: Option<f64>,
    pub max_alternatives: Option<usize>,
    pub enable_explanations: Option<bool>,
}

impl DecisionsUpdate {
    pub fn apply(&self, target: &mut DecisionConfig) {
        if let Some(v) = self.enabled {
            target.enabled = v;
        }
        if let Some(v) = self.auto_apply_threshold {
            target.auto_apply_threshold = v;
        }
        if let Some(v) = self.max_alternatives {
            target.max_alternatives = v;
        }
        if let Some(v) = self.enable_explanations {
            target.enable_explanations = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PerformanceUpdate {
    pub enable_cache: Option<bool>,
    pub cache_ttl_ms: Option<u64>,
    pub max_concurrent_analyses: Option<usize>,
    pub enable_metrics: Option<bool>,
}

impl PerformanceUpdate {
    pub fn apply(&self, target: &mut PerformanceConfig) {
        if let Some(v) = self.enable_cache {
            target.enable_cache = v;
        }
        if let Some(v) = self.cache_ttl_ms {
            target.cache_ttl_ms = v;
        }
        if let Some(v) = self.max_concurrent_analyses {
            target.max_concurrent_analyses = v;
        }
        if let Some(v) = self.enable_metrics {
            target.enable_metrics = v;
        }
    }
}

/// Partial update for a threshold set. Used by the decision engine's
/// `update_thresholds`, which range-checks every provided value first.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ThresholdsUpdate {
    pub merge_threshold: Option<f64>,
    pub update_threshold: Option<f64>,
    pub create_threshold: Option<f64>,
    pub auto_apply_threshold: Option<f64>,
}

impl ThresholdsUpdate {
    pub fn apply(&self, target: &mut DecisionThresholds) {
        if let Some(v) = self.merge_threshold {
            target.merge_threshold = v;
        }
        if let Some(v) = self.update_threshold {
            target.update_threshold = v;
        }
        if let Some(v) = self.create_threshold {
            target.create_threshold = v;
        }
        if let Some(v) = self.auto_apply_threshold {
            target.auto_apply_threshold = v;
        }
    }

    /// The provided `(field, value)` pairs, for range validation.
    pub fn provided_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = Vec::new();
        if let Some(v) = self.merge_threshold {
            fields.push(("merge_threshold", v));
        }
        if let Some(v) = self.update_threshold {
            fields.push(("update_threshold", v));
        }
        if let Some(v) = self.create_threshold {
            fields.push(("create_threshold", v));
        }
        if let Some(v) = self.auto_apply_threshold {
            fields.push(("auto_apply_threshold", v));
        }
        fields
    }
}

/// Partial update for decision rules. `file_type_rules` entries merge
/// per-extension; a new extension starts from the current defaults.
/// `weights`, when supplied, must be complete and sum to 1.0.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesUpdate {
    pub file_type_rules: Option<HashMap<String, ThresholdsUpdate>>,
    pub default_rules: Option<ThresholdsUpdate>,
    pub weights: Option<DecisionWeights>,
}

/// Partial update for the engine-side performance knobs.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct DecisionPerformanceUpdate {
    pub max_decision_time_ms: Option<u64>,
    pub max_alternatives: Option<usize>,
    pub enable_explanations: Option<bool>,
}

impl DecisionPerformanceUpdate {
    pub fn apply(&self, target: &mut super::DecisionPerformanceConfig) {
        if let Some(v) = self.max_decision_time_ms {
            target.max_decision_time_ms = v;
        }
        if let Some(v) = self.max_alternatives {
            target.max_alternatives = v;
        }
        if let Some(v) = self.enable_explanations {
            target.enable_explanations = v;
        }
    }
}

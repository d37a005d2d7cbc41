//! Orchestrator and decision-engine configuration.
//!
//! Every section deserializes with per-field defaults, so a partial TOML
//! file (or an empty one) yields a fully populated config. Mutation goes
//! through the partial-update types in [`update`], validated before any
//! field lands.

pub mod analysis_config;
pub mod decision_config;
pub mod decision_rules;
pub mod defaults;
pub mod monitoring_config;
pub mod performance_config;
pub mod update;

pub use analysis_config::AnalysisConfig;
pub use decision_config::DecisionConfig;
pub use decision_rules::{
    normalize_extension, DecisionPerformanceConfig, DecisionRules, DecisionThresholds,
    DecisionWeights,
};
pub use monitoring_config::MonitoringConfig;
pub use performance_config::PerformanceConfig;
pub use update::{
    AnalysisUpdate, CortexConfigUpdate, DecisionPerformanceUpdate, DecisionsUpdate,
    MonitoringUpdate, PerformanceUpdate, RulesUpdate, ThresholdsUpdate,
};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Process-wide configuration for one Cortex instance.
///
/// Lives for the instance's lifetime; analyses snapshot it on entry so a
/// concurrent update never partially affects in-flight work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CortexConfig {
    pub monitoring: MonitoringConfig,
    pub analysis: AnalysisConfig,
    pub decisions: DecisionConfig,
    pub performance: PerformanceConfig,
}

impl CortexConfig {
    /// Parse a TOML document, filling unspecified fields with defaults,
    /// then validate the result.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range. Fails on the first
    /// invalid field, naming it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("analysis.similarity_threshold", self.analysis.similarity_threshold)?;
        unit_range("analysis.confidence_threshold", self.analysis.confidence_threshold)?;
        positive(
            "analysis.max_comparison_files",
            self.analysis.max_comparison_files as u64,
        )?;
        positive("analysis.analysis_timeout_ms", self.analysis.analysis_timeout_ms)?;
        unit_range("decisions.auto_apply_threshold", self.decisions.auto_apply_threshold)?;
        positive("decisions.max_alternatives", self.decisions.max_alternatives as u64)?;
        positive("performance.cache_ttl_ms", self.performance.cache_ttl_ms)?;
        positive(
            "performance.max_concurrent_analyses",
            self.performance.max_concurrent_analyses as u64,
        )?;
        positive("monitoring.max_file_size", self.monitoring.max_file_size)?;
        Ok(())
    }

    /// Apply a partial update and validate the merged result atomically:
    /// on error, `self` is untouched.
    pub fn merged(&self, patch: &CortexConfigUpdate) -> Result<Self, ConfigError> {
        let mut candidate = self.clone();
        patch.apply(&mut candidate);
        candidate.validate()?;
        Ok(candidate)
    }
}

fn unit_range(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("{value} is not in [0.0, 1.0]"),
        });
    }
    Ok(())
}

fn positive(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

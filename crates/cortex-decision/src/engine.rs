//! DecisionEngine: validated configuration plus the recommendation pipeline.

use std::sync::RwLock;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use cortex_core::config::defaults::{EMPTY_SET_CREATE_CONFIDENCE, MERGE_CONFIDENCE_BOOST};
use cortex_core::config::{
    DecisionPerformanceConfig, DecisionPerformanceUpdate, DecisionRules, DecisionThresholds,
    RulesUpdate, ThresholdsUpdate,
};
use cortex_core::errors::DecisionError;
use cortex_core::models::{
    DecisionAction, FileInfo, Recommendation, RecommendationMetadata, SimilarityResult,
};

use crate::alternatives::build_alternatives;
use crate::rules;
use crate::signals;

/// Engine-side configuration: rules plus performance knobs.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub rules: DecisionRules,
    pub performance: DecisionPerformanceConfig,
}

/// Partial update for the full engine config. Built on the same validators
/// as `update_thresholds` / `update_rules`; an invalid nested section
/// aborts the entire update.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigUpdate {
    pub thresholds: Option<ThresholdsUpdate>,
    pub rules: Option<RulesUpdate>,
    pub performance: Option<DecisionPerformanceUpdate>,
}

/// Turns a similarity comparison set into a ranked recommendation under
/// configurable, per-file-type rules. Pure computation; the soft time
/// budget is checked at stage boundaries rather than preempting work.
pub struct DecisionEngine {
    config: RwLock<EngineConfig>,
}

impl DecisionEngine {
    /// Engine with default rules and performance settings.
    pub fn new() -> Self {
        Self {
            config: RwLock::new(EngineConfig::default()),
        }
    }

    /// Engine with caller-supplied config, validated up front: weights must
    /// sum to 1.0 and every threshold set must be ordered.
    pub fn with_config(config: EngineConfig) -> Result<Self, DecisionError> {
        rules::validate_weights(&config.rules.weights)?;
        rules::validate_threshold_order(&config.rules.default_rules)?;
        for thresholds in config.rules.file_type_rules.values() {
            rules::validate_threshold_order(thresholds)?;
        }
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> EngineConfig {
        self.config.read().expect("engine config poisoned").clone()
    }

    /// Merge valid threshold values into the default rule set.
    pub fn update_thresholds(&self, update: ThresholdsUpdate) -> Result<(), DecisionError> {
        let mut config = self.config.write().expect("engine config poisoned");
        config.rules.default_rules = rules::merge_thresholds(&config.rules.default_rules, &update)?;
        Ok(())
    }

    /// Merge a partial rules update (per-extension thresholds, weights).
    pub fn update_rules(&self, update: RulesUpdate) -> Result<(), DecisionError> {
        let mut config = self.config.write().expect("engine config poisoned");
        config.rules = rules::merge_rules(&config.rules, &update)?;
        Ok(())
    }

    /// Full-config merge. Validates every provided section against a
    /// candidate copy and swaps only on success, so an invalid section
    /// leaves the live config untouched.
    pub fn update_config(&self, update: EngineConfigUpdate) -> Result<(), DecisionError> {
        let mut guard = self.config.write().expect("engine config poisoned");
        let mut candidate = guard.clone();
        if let Some(thresholds) = &update.thresholds {
            candidate.rules.default_rules =
                rules::merge_thresholds(&candidate.rules.default_rules, thresholds)?;
        }
        if let Some(rules_update) = &update.rules {
            candidate.rules = rules::merge_rules(&candidate.rules, rules_update)?;
        }
        if let Some(performance) = &update.performance {
            performance.apply(&mut candidate.performance);
        }
        *guard = candidate;
        Ok(())
    }

    /// Generate a recommendation for one observed file against its
    /// similarity comparison set.
    pub fn generate_recommendation(
        &self,
        file: &FileInfo,
        similarities: &[SimilarityResult],
    ) -> Result<Recommendation, DecisionError> {
        let started = Instant::now();
        let config = self.config();
        let budget_ms = config.performance.max_decision_time_ms;

        if file.path.is_empty() {
            return Err(DecisionError::InvalidInput {
                reason: "file path is empty".to_string(),
            });
        }
        for (index, similarity) in similarities.iter().enumerate() {
            similarity
                .validate()
                .map_err(|reason| DecisionError::InvalidSimilarityData { index, reason })?;
        }
        check_budget(&started, budget_ms)?;

        let (thresholds, rule_tag) = config.rules.resolve(&file.extension());
        let mut applied_rules = vec![rule_tag];
        let mut reasoning = Vec::new();

        let (action, confidence, target_file) = if similarities.is_empty() {
            reasoning.push("no similar files found; safe to create".to_string());
            (DecisionAction::Create, EMPTY_SET_CREATE_CONFIDENCE, None)
        } else {
            // Non-empty and validated, so a best match exists.
            let best = signals::select_best_match(similarities).expect("non-empty similarities");
            let mut action = classify(best.overall_score, &thresholds);
            let mut confidence = best.overall_confidence;

            reasoning.push(format!(
                "best match {} scored {:.2} with confidence {:.2}: {}",
                best.metadata.target_file,
                best.overall_score,
                best.overall_confidence,
                zone_description(action, &thresholds),
            ));

            if action == DecisionAction::Merge {
                confidence = (confidence * MERGE_CONFIDENCE_BOOST).min(1.0);
            }

            if let Some((filename, semantic)) = signals::conflicting_signals(best) {
                action = DecisionAction::Warn;
                applied_rules.push("conflicting-signals".to_string());
                reasoning.push(format!(
                    "conflicting signals: filename layer {filename:.2} and semantic layer \
                     {semantic:.2} disagree; flagged for review"
                ));
            }

            if config.performance.enable_explanations {
                reasoning.push(format!(
                    "weighted layer score {:.2}",
                    signals::weighted_layer_score(best, &config.rules.weights)
                ));
            }

            let target = match action {
                DecisionAction::Create => None,
                _ => Some(best.metadata.target_file.clone()),
            };
            (action, confidence, target)
        };

        if file.has_limited_content() {
            reasoning.push("limited content available for comparison".to_string());
        }

        let alternatives = build_alternatives(
            action,
            confidence,
            target_file.as_deref(),
            !similarities.is_empty(),
            config.performance.max_alternatives,
        );
        let auto_apply =
            confidence >= thresholds.auto_apply_threshold && action != DecisionAction::Warn;

        check_budget(&started, budget_ms)?;

        debug!(
            path = %file.path,
            action = ?action,
            confidence,
            auto_apply,
            "recommendation generated"
        );

        Ok(Recommendation {
            action,
            target_file,
            confidence,
            reasoning: reasoning.join("; "),
            alternatives,
            auto_apply,
            metadata: RecommendationMetadata {
                timestamp: Utc::now(),
                processing_time_ms: started.elapsed().as_millis() as u64,
                applied_rules,
                similarity_inputs: similarities.to_vec(),
            },
        })
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a score onto the threshold zones.
fn classify(score: f64, thresholds: &DecisionThresholds) -> DecisionAction {
    if score >= thresholds.merge_threshold {
        DecisionAction::Merge
    } else if score >= thresholds.update_threshold {
        DecisionAction::Update
    } else if score >= thresholds.create_threshold {
        DecisionAction::Warn
    } else {
        DecisionAction::Create
    }
}

fn zone_description(action: DecisionAction, thresholds: &DecisionThresholds) -> String {
    match action {
        DecisionAction::Merge => format!(
            "at or above the merge threshold {:.2}",
            thresholds.merge_threshold
        ),
        DecisionAction::Update => format!(
            "in the update zone [{:.2}, {:.2})",
            thresholds.update_threshold, thresholds.merge_threshold
        ),
        DecisionAction::Warn => format!(
            "in the ambiguous zone [{:.2}, {:.2}); flagged for review",
            thresholds.create_threshold, thresholds.update_threshold
        ),
        DecisionAction::Create => format!(
            "below the create threshold {:.2}",
            thresholds.create_threshold
        ),
        DecisionAction::Ignore => "ignored".to_string(),
    }
}

fn check_budget(started: &Instant, budget_ms: u64) -> Result<(), DecisionError> {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if elapsed_ms > budget_ms {
        return Err(DecisionError::Timeout {
            elapsed_ms,
            budget_ms,
        });
    }
    Ok(())
}

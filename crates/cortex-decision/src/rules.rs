//! Threshold and weight validation, and rule merging.
//!
//! Invariants:
//! - Every threshold lies in [0.0, 1.0].
//! - `create_threshold <= update_threshold <= merge_threshold`.
//! - The four layer weights sum to 1.0 within 1e-6.

use cortex_core::config::defaults::WEIGHT_SUM_EPSILON;
use cortex_core::config::{
    normalize_extension, DecisionRules, DecisionThresholds, DecisionWeights, RulesUpdate,
    ThresholdsUpdate,
};
use cortex_core::errors::DecisionError;

/// Range-check every value provided in a partial threshold update.
pub fn validate_threshold_range(update: &ThresholdsUpdate) -> Result<(), DecisionError> {
    for (field, value) in update.provided_fields() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DecisionError::ThresholdRange { field, value });
        }
    }
    Ok(())
}

/// Check the zone ordering of a complete threshold set.
pub fn validate_threshold_order(thresholds: &DecisionThresholds) -> Result<(), DecisionError> {
    if thresholds.create_threshold > thresholds.update_threshold
        || thresholds.update_threshold > thresholds.merge_threshold
    {
        return Err(DecisionError::ThresholdOrder {
            reason: format!(
                "create {} <= update {} <= merge {} must hold",
                thresholds.create_threshold,
                thresholds.update_threshold,
                thresholds.merge_threshold
            ),
        });
    }
    Ok(())
}

/// Weights must sum to 1.0 (±1e-6). A NaN component fails the check.
pub fn validate_weights(weights: &DecisionWeights) -> Result<(), DecisionError> {
    let sum = weights.sum();
    if !((sum - 1.0).abs() <= WEIGHT_SUM_EPSILON) {
        return Err(DecisionError::WeightSum { sum });
    }
    Ok(())
}

/// Merge a partial update into a threshold set, validating range before the
/// merge and ordering after it. Returns the merged set; `current` is untouched.
pub fn merge_thresholds(
    current: &DecisionThresholds,
    update: &ThresholdsUpdate,
) -> Result<DecisionThresholds, DecisionError> {
    validate_threshold_range(update)?;
    let mut merged = *current;
    update.apply(&mut merged);
    validate_threshold_order(&merged)?;
    Ok(merged)
}

/// Merge a partial rules update. Per-extension entries merge into the
/// existing entry for that extension (a new extension starts from the
/// current defaults); weights replace wholesale after validation.
pub fn merge_rules(
    current: &DecisionRules,
    update: &RulesUpdate,
) -> Result<DecisionRules, DecisionError> {
    let mut merged = current.clone();

    if let Some(weights) = &update.weights {
        validate_weights(weights)?;
        merged.weights = *weights;
    }

    if let Some(default_update) = &update.default_rules {
        merged.default_rules = merge_thresholds(&merged.default_rules, default_update)?;
    }

    if let Some(per_type) = &update.file_type_rules {
        for (extension, threshold_update) in per_type {
            let token = normalize_extension(extension);
            let base = merged
                .file_type_rules
                .get(&token)
                .copied()
                .unwrap_or(merged.default_rules);
            let entry = merge_thresholds(&base, threshold_update)?;
            merged.file_type_rules.insert(token, entry);
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_rejects_above_one() {
        let update = ThresholdsUpdate {
            merge_threshold: Some(1.5),
            ..Default::default()
        };
        let err = validate_threshold_range(&update).unwrap_err();
        assert!(err.to_string().contains("must be between 0.0 and 1.0"));
    }

    #[test]
    fn range_rejects_nan() {
        let update = ThresholdsUpdate {
            create_threshold: Some(f64::NAN),
            ..Default::default()
        };
        assert!(validate_threshold_range(&update).is_err());
    }

    #[test]
    fn order_rejects_create_above_update() {
        let thresholds = DecisionThresholds {
            create_threshold: 0.8,
            update_threshold: 0.5,
            ..Default::default()
        };
        assert!(validate_threshold_order(&thresholds).is_err());
    }

    #[test]
    fn weights_reject_sum_above_one() {
        let weights = DecisionWeights {
            filename_weight: 0.5,
            structure_weight: 0.3,
            semantic_weight: 0.3,
            content_weight: 0.2,
        };
        let err = validate_weights(&weights).unwrap_err();
        assert!(err.to_string().contains("Weights must sum to 1.0"));
    }

    #[test]
    fn weights_accept_sum_within_epsilon() {
        let weights = DecisionWeights {
            filename_weight: 0.25,
            structure_weight: 0.25,
            semantic_weight: 0.25,
            content_weight: 0.25 + 5e-7,
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn merge_rules_merges_per_extension() {
        let mut current = DecisionRules::default();
        current.file_type_rules.insert(
            "ts".to_string(),
            DecisionThresholds {
                merge_threshold: 0.95,
                update_threshold: 0.8,
                ..Default::default()
            },
        );

        let mut per_type = std::collections::HashMap::new();
        per_type.insert(
            "ts".to_string(),
            ThresholdsUpdate {
                update_threshold: Some(0.75),
                ..Default::default()
            },
        );
        let merged = merge_rules(
            &current,
            &RulesUpdate {
                file_type_rules: Some(per_type),
                ..Default::default()
            },
        )
        .unwrap();

        let ts = &merged.file_type_rules["ts"];
        // The provided field lands; the untouched one survives.
        assert_eq!(ts.update_threshold, 0.75);
        assert_eq!(ts.merge_threshold, 0.95);
    }

    #[test]
    fn merge_rules_new_extension_starts_from_defaults() {
        let current = DecisionRules::default();
        let mut per_type = std::collections::HashMap::new();
        per_type.insert(
            ".Py".to_string(),
            ThresholdsUpdate {
                merge_threshold: Some(0.9),
                ..Default::default()
            },
        );
        let merged = merge_rules(
            &current,
            &RulesUpdate {
                file_type_rules: Some(per_type),
                ..Default::default()
            },
        )
        .unwrap();

        let py = &merged.file_type_rules["py"];
        assert_eq!(py.merge_threshold, 0.9);
        assert_eq!(py.update_threshold, current.default_rules.update_threshold);
    }

    #[test]
    fn merge_rules_invalid_weights_leave_current_untouched() {
        let current = DecisionRules::default();
        let bad = RulesUpdate {
            weights: Some(DecisionWeights {
                filename_weight: 0.5,
                structure_weight: 0.5,
                semantic_weight: 0.5,
                content_weight: 0.5,
            }),
            ..Default::default()
        };
        assert!(merge_rules(&current, &bad).is_err());
        assert_eq!(current.weights, DecisionWeights::default());
    }
}

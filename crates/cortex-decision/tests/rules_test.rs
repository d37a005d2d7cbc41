//! Config mutation contract: validation and merge semantics through the
//! engine's public surface.

use cortex_core::config::{
    DecisionWeights, RulesUpdate, ThresholdsUpdate,
};
use cortex_core::errors::DecisionError;
use cortex_decision::{DecisionEngine, EngineConfigUpdate};

#[test]
fn update_thresholds_rejects_out_of_range_values() {
    let engine = DecisionEngine::new();
    let err = engine
        .update_thresholds(ThresholdsUpdate {
            merge_threshold: Some(1.5),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, DecisionError::ThresholdRange { .. }));
    assert!(err.to_string().contains("must be between 0.0 and 1.0"));
    // The live config is untouched.
    assert_eq!(engine.config().rules.default_rules.merge_threshold, 0.85);
}

#[test]
fn update_thresholds_merges_partial_values() {
    let engine = DecisionEngine::new();
    engine
        .update_thresholds(ThresholdsUpdate {
            update_threshold: Some(0.6),
            ..Default::default()
        })
        .unwrap();

    let thresholds = engine.config().rules.default_rules;
    assert_eq!(thresholds.update_threshold, 0.6);
    // Unprovided fields keep their current values.
    assert_eq!(thresholds.merge_threshold, 0.85);
    assert_eq!(thresholds.create_threshold, 0.3);
}

#[test]
fn update_thresholds_enforces_zone_ordering() {
    let engine = DecisionEngine::new();
    // 0.8 would put create above the default update threshold of 0.7.
    let err = engine
        .update_thresholds(ThresholdsUpdate {
            create_threshold: Some(0.8),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, DecisionError::ThresholdOrder { .. }));
}

#[test]
fn update_rules_rejects_weights_summing_above_one() {
    let engine = DecisionEngine::new();
    let err = engine
        .update_rules(RulesUpdate {
            weights: Some(DecisionWeights {
                filename_weight: 0.5,
                structure_weight: 0.3,
                semantic_weight: 0.3,
                content_weight: 0.2,
            }),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, DecisionError::WeightSum { .. }));
    assert!(err.to_string().contains("Weights must sum to 1.0"));
    assert_eq!(engine.config().rules.weights, DecisionWeights::default());
}

#[test]
fn update_rules_accepts_weights_summing_to_one() {
    let engine = DecisionEngine::new();
    let weights = DecisionWeights {
        filename_weight: 0.1,
        structure_weight: 0.2,
        semantic_weight: 0.4,
        content_weight: 0.3,
    };
    engine
        .update_rules(RulesUpdate {
            weights: Some(weights),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(engine.config().rules.weights, weights);
}

#[test]
fn update_rules_merges_file_type_entries() {
    let engine = DecisionEngine::new();
    let mut first = std::collections::HashMap::new();
    first.insert(
        "ts".to_string(),
        ThresholdsUpdate {
            merge_threshold: Some(0.95),
            update_threshold: Some(0.8),
            ..Default::default()
        },
    );
    engine
        .update_rules(RulesUpdate {
            file_type_rules: Some(first),
            ..Default::default()
        })
        .unwrap();

    // A second update to the same extension merges, not replaces.
    let mut second = std::collections::HashMap::new();
    second.insert(
        "ts".to_string(),
        ThresholdsUpdate {
            update_threshold: Some(0.75),
            ..Default::default()
        },
    );
    engine
        .update_rules(RulesUpdate {
            file_type_rules: Some(second),
            ..Default::default()
        })
        .unwrap();

    let ts = engine.config().rules.file_type_rules["ts"];
    assert_eq!(ts.merge_threshold, 0.95);
    assert_eq!(ts.update_threshold, 0.75);
}

#[test]
fn update_config_aborts_atomically_on_invalid_section() {
    let engine = DecisionEngine::new();
    let err = engine
        .update_config(EngineConfigUpdate {
            // Valid thresholds section...
            thresholds: Some(ThresholdsUpdate {
                update_threshold: Some(0.6),
                ..Default::default()
            }),
            // ...but an invalid weights section kills the whole update.
            rules: Some(RulesUpdate {
                weights: Some(DecisionWeights {
                    filename_weight: 1.0,
                    structure_weight: 1.0,
                    semantic_weight: 1.0,
                    content_weight: 1.0,
                }),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, DecisionError::WeightSum { .. }));
    let config = engine.config();
    assert_eq!(config.rules.default_rules.update_threshold, 0.7);
    assert_eq!(config.rules.weights, DecisionWeights::default());
}

//! Property: under ordered thresholds, a higher overall score never maps to
//! a weaker action.

use proptest::prelude::*;

use cortex_core::config::{DecisionRules, DecisionThresholds};
use cortex_decision::{DecisionEngine, EngineConfig};
use test_fixtures::{file_info, similarity};

fn ordered_thresholds() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(a, b, c)| {
        let mut sorted = [a, b, c];
        sorted.sort_by(f64::total_cmp);
        (sorted[0], sorted[1], sorted[2])
    })
}

proptest! {
    #[test]
    fn higher_score_never_weakens_the_action(
        (create, update, merge) in ordered_thresholds(),
        low in 0.0f64..=1.0,
        high in 0.0f64..=1.0,
    ) {
        prop_assume!(low <= high);

        let engine = DecisionEngine::with_config(EngineConfig {
            rules: DecisionRules {
                default_rules: DecisionThresholds {
                    merge_threshold: merge,
                    update_threshold: update,
                    create_threshold: create,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();

        let file = file_info("candidate.rs");
        // Single-layer results cannot trip the conflicting-signal downgrade.
        let weak = engine
            .generate_recommendation(&file, &[similarity("a.rs", low, 0.8)])
            .unwrap();
        let strong = engine
            .generate_recommendation(&file, &[similarity("a.rs", high, 0.8)])
            .unwrap();

        prop_assert!(
            weak.action.strength() <= strong.action.strength(),
            "score {} -> {:?} but score {} -> {:?}",
            low,
            weak.action,
            high,
            strong.action
        );
    }
}

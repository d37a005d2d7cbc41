//! Best-match selection and cross-layer signal checks.

use cortex_core::config::defaults::CONFLICTING_SIGNAL_DELTA;
use cortex_core::config::DecisionWeights;
use cortex_core::models::{layers, SimilarityResult};

/// Select the best match: highest `overall_score`, ties broken by higher
/// `overall_confidence`, then by input order (first wins).
///
/// Returns `None` only for an empty slice. Inputs are assumed validated,
/// so score comparisons never see NaN.
pub fn select_best_match(similarities: &[SimilarityResult]) -> Option<&SimilarityResult> {
    let mut best: Option<&SimilarityResult> = None;
    for candidate in similarities {
        match best {
            None => best = Some(candidate),
            Some(current) => {
                let better = candidate.overall_score > current.overall_score
                    || (candidate.overall_score == current.overall_score
                        && candidate.overall_confidence > current.overall_confidence);
                if better {
                    best = Some(candidate);
                }
            }
        }
    }
    best
}

/// When the filename and semantic layers disagree by more than the
/// configured delta, the match is ambiguous and must be flagged for review.
/// Returns the two layer scores when they conflict.
pub fn conflicting_signals(result: &SimilarityResult) -> Option<(f64, f64)> {
    let filename = result.layer_score(layers::FILENAME)?;
    let semantic = result.layer_score(layers::SEMANTIC)?;
    if (filename - semantic).abs() > CONFLICTING_SIGNAL_DELTA {
        Some((filename, semantic))
    } else {
        None
    }
}

/// Weighted aggregate of the per-layer scores under the configured weights.
/// Layers the collaborator did not compare contribute zero.
pub fn weighted_layer_score(result: &SimilarityResult, weights: &DecisionWeights) -> f64 {
    let layer = |name: &str| result.layer_score(name).unwrap_or(0.0);
    layer(layers::FILENAME) * weights.filename_weight
        + layer(layers::STRUCTURE) * weights.structure_weight
        + layer(layers::SEMANTIC) * weights.semantic_weight
        + layer(layers::CONTENT) * weights.content_weight
}

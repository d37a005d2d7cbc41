//! Ranked alternatives for each recommended action.

use cortex_core::models::{Alternative, DecisionAction};

/// Build the alternative list for a final action.
///
/// Confidences are scaled from the recommendation's confidence, clamped to
/// [0, 1], sorted descending, and truncated to `max_alternatives`. A create
/// recommendation with no similar files has nothing to offer instead.
pub fn build_alternatives(
    action: DecisionAction,
    confidence: f64,
    target_file: Option<&str>,
    has_similarities: bool,
    max_alternatives: usize,
) -> Vec<Alternative> {
    let target = target_file.map(|t| t.to_string());
    let mut alternatives = match action {
        DecisionAction::Merge => vec![
            alternative(
                DecisionAction::Update,
                target.clone(),
                confidence * 0.8,
                "apply as an update to the matched file instead of merging",
            ),
            alternative(
                DecisionAction::Create,
                None,
                confidence * 0.6,
                "keep the file separate despite the strong match",
            ),
        ],
        DecisionAction::Update => vec![
            alternative(
                DecisionAction::Merge,
                target.clone(),
                (confidence * 1.2).min(1.0),
                "merge with the matched file if the overlap is intentional",
            ),
            alternative(
                DecisionAction::Create,
                None,
                confidence * 0.7,
                "treat as a new file if the match is coincidental",
            ),
        ],
        DecisionAction::Create if has_similarities => vec![alternative(
            DecisionAction::Update,
            target.clone(),
            confidence * 0.9,
            "update the closest existing file instead of creating",
        )],
        DecisionAction::Create => Vec::new(),
        // Warn borders the create and update zones on either side.
        DecisionAction::Warn => vec![
            alternative(
                DecisionAction::Update,
                target.clone(),
                confidence * 0.9,
                "update the closest existing file if it is the same artifact",
            ),
            alternative(
                DecisionAction::Create,
                None,
                confidence * 0.7,
                "treat as a new file if the resemblance is superficial",
            ),
        ],
        DecisionAction::Ignore => Vec::new(),
    };

    alternatives.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    alternatives.truncate(max_alternatives);
    alternatives
}

fn alternative(
    action: DecisionAction,
    target_file: Option<String>,
    confidence: f64,
    reason: &str,
) -> Alternative {
    Alternative {
        action,
        target_file,
        confidence: confidence.clamp(0.0, 1.0),
        reason: reason.to_string(),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::similarity::SimilarityResult;

/// Action the system recommends for an observed file change.
///
/// Recommendations carry create/update/merge/warn; `Ignore` appears only in
/// ranked alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Create,
    Update,
    Merge,
    Warn,
    Ignore,
}

impl DecisionAction {
    /// Strength rank used by the monotonicity property: higher similarity
    /// must never map to a strictly weaker action.
    pub fn strength(self) -> u8 {
        match self {
            DecisionAction::Ignore => 0,
            DecisionAction::Create => 1,
            DecisionAction::Warn => 2,
            DecisionAction::Update => 3,
            DecisionAction::Merge => 4,
        }
    }
}

/// A lower-ranked action the host may choose instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub action: DecisionAction,
    pub target_file: Option<String>,
    pub confidence: f64,
    pub reason: String,
}

/// The decision engine's output: an action plus ranked alternatives and an
/// auto-apply flag. Created fresh per call; never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: DecisionAction,
    pub target_file: Option<String>,
    pub confidence: f64,
    pub reasoning: String,
    /// Descending by confidence, truncated to the configured maximum.
    pub alternatives: Vec<Alternative>,
    /// Permission to act without human confirmation.
    pub auto_apply: bool,
    pub metadata: RecommendationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub timestamp: DateTime<Utc>,
    pub processing_time_ms: u64,
    /// Tags of the rules that shaped the decision (e.g. `"rs-rules"`).
    pub applied_rules: Vec<String>,
    /// The comparison set the decision was made from.
    pub similarity_inputs: Vec<SimilarityResult>,
}

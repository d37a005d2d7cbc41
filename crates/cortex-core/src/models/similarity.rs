use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical comparison layer names.
pub mod layers {
    pub const FILENAME: &str = "filename";
    pub const STRUCTURE: &str = "structure";
    pub const SEMANTIC: &str = "semantic";
    pub const CONTENT: &str = "content";
}

/// Score for one comparison dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityLayerScore {
    /// Similarity in [0, 1].
    pub score: f64,
    /// Confidence in the score, in [0, 1].
    pub confidence: f64,
    pub explanation: String,
}

/// Comparison of a candidate file against one existing file, produced by
/// the external similarity collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub overall_score: f64,
    pub overall_confidence: f64,
    /// Per-dimension breakdown, keyed by layer name.
    pub layers: HashMap<String, SimilarityLayerScore>,
    pub metadata: SimilarityMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMetadata {
    pub source_file: String,
    pub target_file: String,
    pub processing_time_ms: u64,
    pub algorithms_used: Vec<String>,
}

impl SimilarityResult {
    /// Layer score by name, if that dimension was compared.
    pub fn layer_score(&self, layer: &str) -> Option<f64> {
        self.layers.get(layer).map(|l| l.score)
    }

    /// Reject malformed collaborator output before it reaches the decision
    /// engine. A result is invalid when score/confidence are non-finite or
    /// out of [0, 1], or when the layer breakdown is absent (empty map — a
    /// typed struct cannot lack the field).
    pub fn validate(&self) -> Result<(), String> {
        validate_unit("overall_score", self.overall_score)?;
        validate_unit("overall_confidence", self.overall_confidence)?;
        if self.layers.is_empty() {
            return Err("missing layer breakdown".to_string());
        }
        for (name, layer) in &self.layers {
            validate_unit(&format!("layer '{name}' score"), layer.score)?;
            validate_unit(&format!("layer '{name}' confidence"), layer.confidence)?;
        }
        if self.metadata.target_file.is_empty() {
            return Err("missing target file in metadata".to_string());
        }
        Ok(())
    }
}

fn validate_unit(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{field} is not finite"));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{field} {value} is outside [0, 1]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_result() -> SimilarityResult {
        let mut layer_map = HashMap::new();
        layer_map.insert(
            layers::FILENAME.to_string(),
            SimilarityLayerScore {
                score: 0.8,
                confidence: 0.9,
                explanation: "near-identical names".to_string(),
            },
        );
        SimilarityResult {
            overall_score: 0.8,
            overall_confidence: 0.9,
            layers: layer_map,
            metadata: SimilarityMetadata {
                source_file: "a.rs".to_string(),
                target_file: "b.rs".to_string(),
                processing_time_ms: 4,
                algorithms_used: vec!["filename".to_string()],
            },
        }
    }

    #[test]
    fn valid_result_passes() {
        assert!(valid_result().validate().is_ok());
    }

    #[test]
    fn nan_score_is_rejected() {
        let mut result = valid_result();
        result.overall_score = f64::NAN;
        assert!(result.validate().is_err());
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let mut result = valid_result();
        result.overall_confidence = 1.2;
        let err = result.validate().unwrap_err();
        assert!(err.contains("overall_confidence"));
    }

    #[test]
    fn empty_layers_are_rejected() {
        let mut result = valid_result();
        result.layers.clear();
        assert_eq!(result.validate().unwrap_err(), "missing layer breakdown");
    }

    #[test]
    fn bad_layer_score_is_rejected() {
        let mut result = valid_result();
        result
            .layers
            .get_mut(layers::FILENAME)
            .unwrap()
            .score = -0.1;
        assert!(result.validate().is_err());
    }
}

//! Weighted fusion of semantic similarity and skill coverage

use log::warn;
use serde::{Deserialize, Serialize};

/// Blend weights. Expected to sum to 1.0 but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub semantic_weight: f64,
    pub skill_weight: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            semantic_weight: 0.6,
            skill_weight: 0.4,
        }
    }
}

impl WeightConfig {
    pub fn sums_to_one(&self) -> bool {
        ((self.semantic_weight + self.skill_weight) - 1.0).abs() < 1e-9
    }

    /// Log, but accept, weights that do not sum to 1.0.
    pub fn warn_if_unbalanced(&self) {
        if !self.sums_to_one() {
            warn!(
                "Scoring weights sum to {:.3} (semantic {:.3}, skill {:.3}); using them as given",
                self.semantic_weight + self.skill_weight,
                self.semantic_weight,
                self.skill_weight
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub final_score: f64,
    pub explanation: String,
}

/// Linear blend of the two scores. Not clamped: a negative similarity can take
/// the result below 0.
pub fn fuse(semantic: f64, coverage: f64, weights: &WeightConfig) -> ScoreResult {
    let final_score = weights.semantic_weight * semantic + weights.skill_weight * coverage;

    let explanation = format!(
        "Score based on {:.0}% semantic similarity ({:.2}) and {:.0}% skill coverage ({:.2}).",
        weights.semantic_weight * 100.0,
        semantic,
        weights.skill_weight * 100.0,
        coverage
    );

    ScoreResult {
        final_score,
        explanation,
    }
}

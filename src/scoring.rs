//! Composite scoring
//!
//! Combines the four feature groups into composite indices with fixed linear
//! weights. Each index is capped at 1.0; no lower bound is applied, so
//! pathological consistency values can yield negative scores.

use crate::config::AnalyzerConfig;
use crate::types::{
    ColorFeatures, ComplexityFeatures, CompositeScores, ConsistencyFeatures, TimeFeatures,
};

/// Composite scorer parameterized by normalization ceilings
pub struct CompositeScorer {
    time_ceiling_minutes: f64,
    stroke_ceiling: f64,
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl CompositeScorer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            time_ceiling_minutes: config.time_ceiling_minutes,
            stroke_ceiling: config.stroke_ceiling,
        }
    }

    /// Compute all four composite indices
    pub fn score(
        &self,
        time: &TimeFeatures,
        complexity: &ComplexityFeatures,
        color: &ColorFeatures,
        consistency: &ConsistencyFeatures,
    ) -> CompositeScores {
        CompositeScores {
            psychological_investment: self
                .psychological_investment(time.total_time, complexity.complexity_score),
            creative_expression: compute_creative_expression(color),
            behavioral_consistency: consistency.overall_consistency,
            attention_to_detail: self
                .attention_to_detail(complexity.total_strokes, complexity.artistic_intensity),
        }
    }

    /// Formula: `min(total_time/ceiling * 0.4 + complexity_score * 0.6, 1.0)`
    fn psychological_investment(&self, total_time: f64, complexity_score: f64) -> f64 {
        (total_time / self.time_ceiling_minutes * 0.4 + complexity_score * 0.6).min(1.0)
    }

    /// Formula: `min(total_strokes/ceiling * 0.6 + artistic_intensity * 0.4, 1.0)`
    fn attention_to_detail(&self, total_strokes: u128, artistic_intensity: f64) -> f64 {
        (total_strokes as f64 / self.stroke_ceiling * 0.6 + artistic_intensity * 0.4).min(1.0)
    }
}

/// Formula: `min(diversity * 0.5 + level_score * 0.5, 1.0)`
///
/// Expression level maps Low = 0, Moderate = 0.5, High = 1.
fn compute_creative_expression(color: &ColorFeatures) -> f64 {
    (color.color_diversity_score * 0.5 + color.emotional_expression_level.score() * 0.5).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::{uniform_phases, varied_phases};
    use crate::features::{
        ColorFeatureExtractor, ComplexityFeatureExtractor, ConsistencyFeatureExtractor,
        TimeFeatureExtractor,
    };
    use crate::types::{EmotionalExpressionLevel, PhaseRecord};

    fn score_phases(phases: &[PhaseRecord]) -> CompositeScores {
        CompositeScorer::default().score(
            &TimeFeatureExtractor::extract(phases),
            &ComplexityFeatureExtractor::extract(phases),
            &ColorFeatureExtractor::extract(phases),
            &ConsistencyFeatureExtractor::extract(phases),
        )
    }

    #[test]
    fn test_uniform_scores() {
        let scores = score_phases(&uniform_phases());

        // 15/15 * 0.4 + 0.25 * 0.6
        assert!((scores.psychological_investment - 0.55).abs() < 1e-9);
        assert_eq!(scores.creative_expression, 0.0);
        assert_eq!(scores.behavioral_consistency, 1.0);
        // 150/300 * 0.6 + 10.2 * 0.4 caps at 1
        assert_eq!(scores.attention_to_detail, 1.0);
    }

    #[test]
    fn test_scores_never_exceed_one() {
        for phases in [uniform_phases(), varied_phases()] {
            let scores = score_phases(&phases);
            for (name, value) in scores.named() {
                assert!(value <= 1.0, "{name} = {value}");
            }
        }
    }

    #[test]
    fn test_behavioral_consistency_passthrough() {
        let phases = varied_phases();
        let consistency = ConsistencyFeatureExtractor::extract(&phases);
        let scores = score_phases(&phases);
        assert_eq!(scores.behavioral_consistency, consistency.overall_consistency);
    }

    #[test]
    fn test_creative_expression_weights() {
        let mut color = ColorFeatureExtractor::extract(&uniform_phases());
        color.color_diversity_score = 0.6;
        color.emotional_expression_level = EmotionalExpressionLevel::Moderate;
        assert!((compute_creative_expression(&color) - 0.55).abs() < 1e-9);

        color.color_diversity_score = 1.0;
        color.emotional_expression_level = EmotionalExpressionLevel::High;
        assert_eq!(compute_creative_expression(&color), 1.0);
    }

    #[test]
    fn test_custom_ceilings() {
        let config = AnalyzerConfig {
            time_ceiling_minutes: 30.0,
            stroke_ceiling: 600.0,
        };
        let scorer = CompositeScorer::new(&config);
        // 15/30 * 0.4 + 0.25 * 0.6
        assert!((scorer.psychological_investment(15.0, 0.25) - 0.35).abs() < 1e-9);
        // 150/600 * 0.6 + 0.5 * 0.4
        assert!((scorer.attention_to_detail(150, 0.5) - 0.35).abs() < 1e-9);
    }
}

//! Color usage feature extraction

use std::collections::{BTreeMap, BTreeSet};

use crate::stats;
use crate::types::{ColorFeatures, EmotionalExpressionLevel, PhaseRecord};

/// Mean colors per phase above which expression is High
const HIGH_EXPRESSION_THRESHOLD: f64 = 3.0;

/// Mean colors per phase above which expression is Moderate
const MODERATE_EXPRESSION_THRESHOLD: f64 = 1.5;

/// Extractor for color usage indicators
pub struct ColorFeatureExtractor;

impl ColorFeatureExtractor {
    /// Derive color features from phase records
    pub fn extract(phases: &[PhaseRecord]) -> ColorFeatures {
        let all_colors: Vec<&str> = phases
            .iter()
            .flat_map(|p| p.colors_used.iter().map(String::as_str))
            .collect();
        let color_per_phase: Vec<usize> = phases.iter().map(PhaseRecord::color_count).collect();
        let counts: Vec<f64> = color_per_phase.iter().map(|c| *c as f64).collect();

        ColorFeatures {
            total_unique_colors: all_colors.iter().collect::<BTreeSet<_>>().len(),
            color_diversity_score: compute_color_diversity(&all_colors),
            emotional_expression_level: assess_emotional_expression(&counts),
            color_consistency: compute_color_consistency(&counts),
            color_per_phase,
        }
    }
}

/// Normalized Shannon entropy of the color frequency distribution
///
/// Formula: `H / log2(distinct)` where `H = -Σ p·log2(p)`.
/// Returns 0 for at most one usage or a single distinct color.
fn compute_color_diversity(all_colors: &[&str]) -> f64 {
    let total = all_colors.len();
    if total <= 1 {
        return 0.0;
    }

    let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for color in all_colors {
        *frequencies.entry(*color).or_insert(0) += 1;
    }

    let max_entropy = (frequencies.len() as f64).log2();
    if max_entropy <= 0.0 {
        return 0.0;
    }

    let entropy: f64 = frequencies
        .values()
        .map(|count| {
            let p = *count as f64 / total as f64;
            -p * p.log2()
        })
        .sum();

    entropy / max_entropy
}

/// Map mean colors per phase to an expression level
fn assess_emotional_expression(color_counts: &[f64]) -> EmotionalExpressionLevel {
    let avg_colors = stats::mean(color_counts);
    if avg_colors > HIGH_EXPRESSION_THRESHOLD {
        EmotionalExpressionLevel::High
    } else if avg_colors > MODERATE_EXPRESSION_THRESHOLD {
        EmotionalExpressionLevel::Moderate
    } else {
        EmotionalExpressionLevel::Low
    }
}

/// `1 - std/mean` of per-phase color counts, 1 when no colors were used
fn compute_color_consistency(color_counts: &[f64]) -> f64 {
    let mean = stats::mean(color_counts);
    if mean <= 0.0 {
        return 1.0;
    }
    1.0 - stats::std_dev(color_counts) / mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::{phase, uniform_phases, varied_phases};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_color_has_zero_diversity() {
        let features = ColorFeatureExtractor::extract(&uniform_phases());

        assert_eq!(features.total_unique_colors, 1);
        assert_eq!(features.color_per_phase, vec![1, 1, 1]);
        assert_eq!(features.color_diversity_score, 0.0);
        assert_eq!(features.emotional_expression_level, EmotionalExpressionLevel::Low);
        assert_eq!(features.color_consistency, 1.0);
    }

    #[test]
    fn test_uniform_distribution_is_max_diversity() {
        let diversity = compute_color_diversity(&["red", "blue", "green", "yellow"]);
        assert!((diversity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_skewed_distribution() {
        // p = 3/4, 1/4 → H = 0.8113, max = 1
        let diversity = compute_color_diversity(&["red", "red", "red", "blue"]);
        assert!((diversity - 0.8113).abs() < 1e-3);
    }

    #[test]
    fn test_diversity_with_too_few_usages() {
        assert_eq!(compute_color_diversity(&[]), 0.0);
        assert_eq!(compute_color_diversity(&["red"]), 0.0);
    }

    #[test]
    fn test_varied_palette() {
        let features = ColorFeatureExtractor::extract(&varied_phases());

        // red, blue, green, brown, yellow, black
        assert_eq!(features.total_unique_colors, 6);
        assert_eq!(features.color_per_phase, vec![2, 3, 4]);
        // mean 3.0 is not above 3
        assert_eq!(
            features.emotional_expression_level,
            EmotionalExpressionLevel::Moderate
        );
        assert!(features.color_diversity_score > 0.9);
    }

    #[test]
    fn test_expression_levels() {
        assert_eq!(
            assess_emotional_expression(&[4.0, 4.0, 2.0]),
            EmotionalExpressionLevel::High
        );
        assert_eq!(
            assess_emotional_expression(&[1.0, 2.0, 2.0]),
            EmotionalExpressionLevel::Moderate
        );
        assert_eq!(
            assess_emotional_expression(&[1.0, 2.0, 1.0]),
            EmotionalExpressionLevel::Low
        );
    }

    #[test]
    fn test_color_consistency_without_colors() {
        let phases = vec![phase(1, 60_000, 5, &[], None), phase(2, 60_000, 5, &[], None)];
        let features = ColorFeatureExtractor::extract(&phases);
        assert_eq!(features.color_consistency, 1.0);
        assert_eq!(features.total_unique_colors, 0);
    }
}

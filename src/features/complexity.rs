//! Complexity feature extraction

use crate::stats;
use crate::types::{ComplexityFeatures, PhaseRecord};

/// Strokes per phase treated as full density
const STROKE_NORMALIZER: f64 = 100.0;

/// Coverage percentage scale
const COVERAGE_NORMALIZER: f64 = 100.0;

/// Extractor for complexity and detail indicators
pub struct ComplexityFeatureExtractor;

impl ComplexityFeatureExtractor {
    /// Derive complexity features from phase records
    pub fn extract(phases: &[PhaseRecord]) -> ComplexityFeatures {
        let strokes: Vec<f64> = phases.iter().map(|p| p.stroke_count as f64).collect();
        let coverage: Vec<f64> = phases.iter().map(PhaseRecord::coverage_or_default).collect();

        ComplexityFeatures {
            total_strokes: total_strokes(phases),
            average_strokes: stats::mean(&strokes),
            stroke_variance: stats::variance(&strokes),
            detail_progression: compute_detail_progression(&strokes),
            complexity_score: compute_complexity_score(&strokes, &coverage),
            artistic_intensity: compute_artistic_intensity(phases),
        }
    }
}

/// Stroke total widened so per-phase counts near `u64::MAX` cannot wrap
pub(crate) fn total_strokes(phases: &[PhaseRecord]) -> u128 {
    phases.iter().map(|p| u128::from(p.stroke_count)).sum()
}

/// Mean of consecutive stroke-count deltas
fn compute_detail_progression(strokes: &[f64]) -> f64 {
    if strokes.len() < 2 {
        return 0.0;
    }
    let deltas: Vec<f64> = strokes.windows(2).map(|w| w[1] - w[0]).collect();
    stats::mean(&deltas)
}

/// Blend of stroke density and canvas coverage
///
/// Formula: `min((mean_strokes/100 + mean_coverage/100) / 2, 1.0)`
fn compute_complexity_score(strokes: &[f64], coverage: &[f64]) -> f64 {
    let stroke_score = stats::mean(strokes) / STROKE_NORMALIZER;
    let coverage_score = stats::mean(coverage) / COVERAGE_NORMALIZER;
    ((stroke_score + coverage_score) / 2.0).min(1.0)
}

/// Drawing actions (strokes plus color usages) per minute
fn compute_artistic_intensity(phases: &[PhaseRecord]) -> f64 {
    let total_activity: u128 = phases
        .iter()
        .map(|p| u128::from(p.stroke_count) + p.color_count() as u128)
        .sum();
    let total_minutes: f64 = phases.iter().map(PhaseRecord::minutes).sum();

    if total_minutes <= 0.0 {
        return 0.0;
    }
    total_activity as f64 / total_minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::{phase, uniform_phases, varied_phases};

    #[test]
    fn test_uniform_complexity() {
        let features = ComplexityFeatureExtractor::extract(&uniform_phases());

        assert_eq!(features.total_strokes, 150);
        assert!((features.average_strokes - 50.0).abs() < 1e-9);
        assert_eq!(features.stroke_variance, 0.0);
        assert_eq!(features.detail_progression, 0.0);
        // (0.5 + 0.0) / 2 with coverage absent
        assert!((features.complexity_score - 0.25).abs() < 1e-9);
        // 153 actions over 15 minutes
        assert!((features.artistic_intensity - 10.2).abs() < 1e-9);
    }

    #[test]
    fn test_detail_progression_increasing() {
        // deltas 20 and 30
        assert!((compute_detail_progression(&[10.0, 30.0, 60.0]) - 25.0).abs() < 1e-9);
        let features = ComplexityFeatureExtractor::extract(&varied_phases());
        assert!((features.detail_progression - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_detail_progression_single_phase() {
        assert_eq!(compute_detail_progression(&[42.0]), 0.0);
    }

    #[test]
    fn test_complexity_score_uses_coverage() {
        let features = ComplexityFeatureExtractor::extract(&varied_phases());
        // mean strokes 33.33 → 0.333, mean coverage 40 → 0.4
        assert!((features.complexity_score - (1.0 / 3.0 + 0.4) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_score_capped() {
        let phases = vec![phase(1, 60_000, 500, &[], Some(100.0))];
        let features = ComplexityFeatureExtractor::extract(&phases);
        assert_eq!(features.complexity_score, 1.0);
    }

    #[test]
    fn test_stroke_totals_do_not_wrap() {
        let half = 1u64 << 63;
        let phases = vec![
            phase(1, 60_000, half, &["red"], None),
            phase(2, 60_000, half, &["red"], None),
            phase(3, 60_000, 5, &["red"], None),
        ];
        let features = ComplexityFeatureExtractor::extract(&phases);

        assert_eq!(features.total_strokes, (1u128 << 64) + 5);
        // 2^64 + 5 strokes plus 3 color usages over 3 minutes
        let expected = ((1u128 << 64) + 8) as f64 / 3.0;
        assert!((features.artistic_intensity - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_artistic_intensity_zero_time() {
        let phases = vec![phase(1, 0, 25, &["red"], None)];
        let features = ComplexityFeatureExtractor::extract(&phases);
        assert_eq!(features.artistic_intensity, 0.0);
    }
}

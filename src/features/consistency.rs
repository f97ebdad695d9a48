//! Behavioral consistency feature extraction

use crate::stats;
use crate::types::{ConsistencyFeatures, PhaseRecord};

/// Extractor for cross-phase consistency
pub struct ConsistencyFeatureExtractor;

impl ConsistencyFeatureExtractor {
    /// Derive `1 - CV` for time, strokes and colors plus their mean
    ///
    /// Time uses raw milliseconds; the coefficient of variation is scale-free.
    pub fn extract(phases: &[PhaseRecord]) -> ConsistencyFeatures {
        let times: Vec<f64> = phases.iter().map(|p| p.time_spent as f64).collect();
        let strokes: Vec<f64> = phases.iter().map(|p| p.stroke_count as f64).collect();
        let colors: Vec<f64> = phases.iter().map(|p| p.color_count() as f64).collect();

        let time_consistency = stats::consistency(&times);
        let stroke_consistency = stats::consistency(&strokes);
        let color_consistency = stats::consistency(&colors);

        ConsistencyFeatures {
            time_consistency,
            stroke_consistency,
            color_consistency,
            overall_consistency: compute_overall_consistency(&[
                time_consistency,
                stroke_consistency,
                color_consistency,
            ]),
        }
    }
}

/// Mean of the per-metric consistencies
fn compute_overall_consistency(per_metric: &[f64]) -> f64 {
    stats::mean(per_metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::{phase, uniform_phases, varied_phases};

    #[test]
    fn test_uniform_phases_fully_consistent() {
        let features = ConsistencyFeatureExtractor::extract(&uniform_phases());
        assert_eq!(features.time_consistency, 1.0);
        assert_eq!(features.stroke_consistency, 1.0);
        assert_eq!(features.color_consistency, 1.0);
        assert_eq!(features.overall_consistency, 1.0);
    }

    #[test]
    fn test_equal_times_with_varied_strokes() {
        let phases = vec![
            phase(1, 200_000, 10, &["red"], None),
            phase(2, 200_000, 40, &["red", "blue"], None),
            phase(3, 200_000, 70, &["red"], None),
        ];
        let features = ConsistencyFeatureExtractor::extract(&phases);
        assert_eq!(features.time_consistency, 1.0);
        assert!(features.stroke_consistency < 1.0);
    }

    #[test]
    fn test_zero_mean_metric_counts_as_consistent() {
        let phases = vec![phase(1, 0, 0, &[], None), phase(2, 0, 0, &[], None)];
        let features = ConsistencyFeatureExtractor::extract(&phases);
        assert_eq!(features.overall_consistency, 1.0);
    }

    #[test]
    fn test_overall_is_mean_of_metrics() {
        let features = ConsistencyFeatureExtractor::extract(&varied_phases());
        let expected = (features.time_consistency
            + features.stroke_consistency
            + features.color_consistency)
            / 3.0;
        assert!((features.overall_consistency - expected).abs() < 1e-12);
        // times 2,4,6 minutes: CV = sqrt(8/3)/4
        let expected_time = 1.0 - (8.0f64 / 3.0).sqrt() / 4.0;
        assert!((features.time_consistency - expected_time).abs() < 1e-9);
    }
}

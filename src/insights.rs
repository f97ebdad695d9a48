//! Behavioral insights and recommendations
//!
//! Per-phase observations taken straight from the telemetry, plus rule-based
//! recommendations keyed off the computed features.

use crate::types::{
    phase_name, BehavioralInsights, FeatureAnalysis, PacingTrend, PhaseInsight, PhaseRecord, PHASES,
};

/// Investment below which more time is suggested
const LOW_INVESTMENT_THRESHOLD: f64 = 0.4;

/// Consistency below which pacing advice is given
const LOW_CONSISTENCY_THRESHOLD: f64 = 0.5;

/// Creative expression below which color exploration is suggested
const LOW_CREATIVE_THRESHOLD: f64 = 0.3;

/// Attention to detail above which a detail-oriented note is added
const HIGH_DETAIL_THRESHOLD: f64 = 0.7;

/// Mean stroke increase per phase considered a strong build-up
const STRONG_PROGRESSION_THRESHOLD: f64 = 20.0;

/// Diversity below which a palette with several colors is considered unbalanced
const LOW_DIVERSITY_THRESHOLD: f64 = 0.5;

/// Generator for per-phase behavioral observations
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn analyze(phases: &[PhaseRecord]) -> BehavioralInsights {
        let phase_insights: Vec<PhaseInsight> = phases
            .iter()
            .enumerate()
            .map(|(index, phase)| build_phase_insight(index, phase))
            .collect();

        let times: Vec<f64> = phases.iter().map(PhaseRecord::minutes).collect();
        let strokes: Vec<f64> = phases.iter().map(|p| p.stroke_count as f64).collect();
        let colors: Vec<f64> = phases.iter().map(|p| p.color_count() as f64).collect();

        BehavioralInsights {
            phases: phase_insights,
            pacing_trend: compute_pacing_trend(&times),
            dominant_phase: phase_name(index_of_max(&times)),
            most_detailed_phase: phase_name(index_of_max(&strokes)),
            most_colorful_phase: phase_name(index_of_max(&colors)),
        }
    }

    /// Ordered recommendations, one per triggered rule
    pub fn recommend(features: &FeatureAnalysis) -> Vec<String> {
        let composite = &features.composite_scores;
        let mut recommendations = Vec::new();

        if composite.psychological_investment < LOW_INVESTMENT_THRESHOLD {
            recommendations.push(
                "Allow more unhurried time per drawing to surface richer detail".to_string(),
            );
        }

        if composite.behavioral_consistency < LOW_CONSISTENCY_THRESHOLD {
            recommendations.push(format!(
                "Effort varied noticeably between drawings; explore what made the {} drawing different",
                lowest_consistency_label(features)
            ));
        }

        if composite.creative_expression < LOW_CREATIVE_THRESHOLD {
            recommendations
                .push("Experiment with a wider range of colors to express mood".to_string());
        }

        if composite.attention_to_detail > HIGH_DETAIL_THRESHOLD {
            recommendations.push(
                "Strong attention to detail; balance it with quick gesture sketches".to_string(),
            );
        }

        if features.complexity_features.detail_progression > STRONG_PROGRESSION_THRESHOLD {
            recommendations.push(
                "Detail increased steadily across phases; later drawings drew the most engagement"
                    .to_string(),
            );
        }

        let color = &features.color_features;
        if color.total_unique_colors >= 3 && color.color_diversity_score < LOW_DIVERSITY_THRESHOLD {
            recommendations.push(
                "A few colors dominate the palette; try giving the others a larger role"
                    .to_string(),
            );
        }

        if recommendations.is_empty() {
            recommendations.push(
                "Balanced engagement across all drawings; keep exploring at the same pace"
                    .to_string(),
            );
        }

        recommendations
    }
}

fn build_phase_insight(index: usize, phase: &PhaseRecord) -> PhaseInsight {
    let time_minutes = phase.minutes();
    let strokes_per_minute = if time_minutes > 0.0 {
        phase.stroke_count as f64 / time_minutes
    } else {
        0.0
    };

    PhaseInsight {
        phase_name: phase_name(index),
        psychological_domain: PHASES
            .get(index)
            .map(|p| p.psychological_domain.to_string()),
        time_minutes,
        stroke_count: phase.stroke_count,
        color_count: phase.color_count(),
        coverage: phase.coverage_or_default(),
        strokes_per_minute,
    }
}

/// Direction of per-phase minutes
fn compute_pacing_trend(times: &[f64]) -> PacingTrend {
    if times.len() < 2 {
        return PacingTrend::SinglePhase;
    }

    let pairs = || times.windows(2).map(|w| (w[0], w[1]));
    if pairs().all(|(a, b)| a == b) {
        PacingTrend::Steady
    } else if pairs().all(|(a, b)| b < a) {
        PacingTrend::Accelerating
    } else if pairs().all(|(a, b)| b > a) {
        PacingTrend::Decelerating
    } else {
        PacingTrend::Mixed
    }
}

/// Index of the largest value, first on ties
fn index_of_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }
    best
}

fn lowest_consistency_label(features: &FeatureAnalysis) -> &'static str {
    let c = &features.consistency_features;
    if c.time_consistency <= c.stroke_consistency && c.time_consistency <= c.color_consistency {
        "timing of each"
    } else if c.stroke_consistency <= c.color_consistency {
        "level of detail in each"
    } else {
        "color use in each"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::features::fixtures::{phase, uniform_phases, varied_phases};
    use crate::pipeline::extract_features;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phase_insights() {
        let insights = InsightGenerator::analyze(&varied_phases());

        assert_eq!(insights.phases.len(), 3);
        let house = &insights.phases[0];
        assert_eq!(house.phase_name, "House");
        assert_eq!(house.psychological_domain.as_deref(), Some("Security & Family"));
        assert!((house.time_minutes - 2.0).abs() < 1e-9);
        assert!((house.strokes_per_minute - 5.0).abs() < 1e-9);
        assert_eq!(house.color_count, 2);
        assert_eq!(house.coverage, 20.0);

        assert_eq!(insights.pacing_trend, PacingTrend::Decelerating);
        assert_eq!(insights.dominant_phase, "Person");
        assert_eq!(insights.most_detailed_phase, "Person");
        assert_eq!(insights.most_colorful_phase, "Person");
    }

    #[test]
    fn test_pacing_trends() {
        assert_eq!(compute_pacing_trend(&[5.0, 5.0, 5.0]), PacingTrend::Steady);
        assert_eq!(compute_pacing_trend(&[6.0, 4.0, 2.0]), PacingTrend::Accelerating);
        assert_eq!(compute_pacing_trend(&[2.0, 6.0, 4.0]), PacingTrend::Mixed);
        assert_eq!(compute_pacing_trend(&[3.0]), PacingTrend::SinglePhase);
    }

    #[test]
    fn test_ties_pick_first_phase() {
        let insights = InsightGenerator::analyze(&uniform_phases());
        assert_eq!(insights.dominant_phase, "House");
        assert_eq!(insights.most_detailed_phase, "House");
    }

    #[test]
    fn test_extra_phase_has_no_domain() {
        let mut phases = uniform_phases();
        phases.push(phase(4, 0, 3, &[], None));
        let insights = InsightGenerator::analyze(&phases);
        assert_eq!(insights.phases[3].phase_name, "Phase 4");
        assert_eq!(insights.phases[3].psychological_domain, None);
        assert_eq!(insights.phases[3].strokes_per_minute, 0.0);
    }

    #[test]
    fn test_recommendations_for_uniform_drawing() {
        let features = extract_features(&uniform_phases(), &AnalyzerConfig::default());
        let recommendations = InsightGenerator::recommend(&features);

        // creative expression 0 and detail capped at 1
        assert_eq!(
            recommendations,
            vec![
                "Experiment with a wider range of colors to express mood".to_string(),
                "Strong attention to detail; balance it with quick gesture sketches".to_string(),
            ]
        );
    }

    #[test]
    fn test_low_investment_recommendation() {
        let phases = vec![
            phase(1, 20_000, 2, &["red"], None),
            phase(2, 20_000, 2, &["red"], None),
            phase(3, 20_000, 2, &["red"], None),
        ];
        let features = extract_features(&phases, &AnalyzerConfig::default());
        let recommendations = InsightGenerator::recommend(&features);
        assert_eq!(
            recommendations[0],
            "Allow more unhurried time per drawing to surface richer detail"
        );
    }

    #[test]
    fn test_never_empty() {
        let features = extract_features(&varied_phases(), &AnalyzerConfig::default());
        assert!(!InsightGenerator::recommend(&features).is_empty());
    }
}

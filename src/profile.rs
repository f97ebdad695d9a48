//! Psychological profile generation
//!
//! Threshold lookups over already-computed features; no new numeric extraction.

use crate::types::{
    BehaviorDimension, BehavioralPatterns, ClassificationResult, CognitiveStyle,
    CognitiveStyleAssessment, ColorFeatures, CompositeScores, ConsistencyBand,
    ConsistencyFeatures, EmotionalExpressionAssessment, EmotionalExpressionLevel, EngagementBand,
    ExpressionStyle, FeatureAnalysis, OverallAssessment, PaletteStability, PsychologicalProfile,
};

/// Detail score above which processing is detail-driven
const HIGH_DETAIL_THRESHOLD: f64 = 0.7;

/// Detail score below which processing is big-picture
const LOW_DETAIL_THRESHOLD: f64 = 0.3;

/// Consistency split between systematic and complex processing
const CONSISTENCY_SPLIT: f64 = 0.6;

/// Color consistency at or above which the palette is stable
const STABLE_PALETTE_THRESHOLD: f64 = 0.7;

// Weights for the overall index
const TIME_INVESTMENT_WEIGHT: f64 = 0.25;
const COMPLEXITY_WEIGHT: f64 = 0.30;
const COLOR_DIVERSITY_WEIGHT: f64 = 0.20;
const CONSISTENCY_WEIGHT: f64 = 0.25;

/// Generator for the qualitative profile
pub struct ProfileGenerator;

impl ProfileGenerator {
    pub fn generate(
        features: &FeatureAnalysis,
        classification: &ClassificationResult,
    ) -> PsychologicalProfile {
        let cognitive_style = assess_cognitive_style(&features.composite_scores);
        let overall_assessment = generate_overall_assessment(
            &features.composite_scores,
            classification,
            cognitive_style.style,
        );

        PsychologicalProfile {
            cognitive_style,
            emotional_expression: assess_emotional_expression_style(&features.color_features),
            behavioral_patterns: assess_behavioral_patterns(&features.consistency_features),
            psychological_priorities: features.time_features.phase_priorities.clone(),
            overall_assessment,
        }
    }
}

/// 2x2 mapping over attention to detail and behavioral consistency
pub fn assess_cognitive_style(composite: &CompositeScores) -> CognitiveStyleAssessment {
    let detail = composite.attention_to_detail;
    let consistency = composite.behavioral_consistency;

    let (style, description) = if detail > HIGH_DETAIL_THRESHOLD {
        if consistency > CONSISTENCY_SPLIT {
            (
                CognitiveStyle::Systematic,
                "Methodical, thorough, detail-oriented",
            )
        } else {
            (CognitiveStyle::Complex, "Detailed but flexible approach")
        }
    } else if detail < LOW_DETAIL_THRESHOLD {
        (
            CognitiveStyle::Global,
            "Big-picture focus, efficient processing",
        )
    } else {
        (
            CognitiveStyle::Balanced,
            "Adaptive between detail and overview",
        )
    };

    CognitiveStyleAssessment {
        style,
        description: description.to_string(),
    }
}

fn assess_emotional_expression_style(color: &ColorFeatures) -> EmotionalExpressionAssessment {
    let style = match color.emotional_expression_level {
        EmotionalExpressionLevel::High => ExpressionStyle::Expressive,
        EmotionalExpressionLevel::Moderate => ExpressionStyle::Selective,
        EmotionalExpressionLevel::Low => ExpressionStyle::Reserved,
    };
    let palette_stability = if color.color_consistency >= STABLE_PALETTE_THRESHOLD {
        PaletteStability::Stable
    } else {
        PaletteStability::Shifting
    };

    let tone = match style {
        ExpressionStyle::Expressive => "Uses a broad palette to convey feeling",
        ExpressionStyle::Selective => "Chooses colors deliberately for emphasis",
        ExpressionStyle::Reserved => "Keeps color use minimal and contained",
    };
    let stability = match palette_stability {
        PaletteStability::Stable => "with a steady palette across drawings",
        PaletteStability::Shifting => "with palette size shifting between drawings",
    };

    EmotionalExpressionAssessment {
        style,
        palette_stability,
        description: format!("{tone}, {stability}"),
    }
}

fn assess_behavioral_patterns(consistency: &ConsistencyFeatures) -> BehavioralPatterns {
    let overall = consistency.overall_consistency;
    let consistency_band = if overall > 0.8 {
        ConsistencyBand::High
    } else if overall > 0.5 {
        ConsistencyBand::Moderate
    } else {
        ConsistencyBand::Variable
    };

    // Ties resolve to the earlier dimension
    let dimensions = [
        (BehaviorDimension::Time, consistency.time_consistency),
        (BehaviorDimension::Strokes, consistency.stroke_consistency),
        (BehaviorDimension::Colors, consistency.color_consistency),
    ];
    let mut most_variable_dimension = dimensions[0];
    for candidate in &dimensions[1..] {
        if candidate.1 < most_variable_dimension.1 {
            most_variable_dimension = *candidate;
        }
    }

    BehavioralPatterns {
        consistency_band,
        overall_consistency: overall,
        most_variable_dimension: most_variable_dimension.0,
    }
}

/// Weighted index over the composites with an engagement band and summary
fn generate_overall_assessment(
    composite: &CompositeScores,
    classification: &ClassificationResult,
    cognitive_style: CognitiveStyle,
) -> OverallAssessment {
    let overall_index = compute_overall_index(composite);
    let engagement_band = if overall_index >= 0.7 {
        EngagementBand::Strong
    } else if overall_index >= 0.4 {
        EngagementBand::Moderate
    } else {
        EngagementBand::Light
    };

    let band = match engagement_band {
        EngagementBand::Strong => "strong",
        EngagementBand::Moderate => "moderate",
        EngagementBand::Light => "light",
    };

    OverallAssessment {
        overall_index,
        engagement_band,
        summary: format!(
            "{:?} profile ({}) with {band} engagement across the drawing tasks",
            classification.personality_type,
            cognitive_style.label()
        ),
    }
}

/// Formula:
/// ```text
/// 0.25 * psychological_investment
/// + 0.30 * attention_to_detail
/// + 0.20 * creative_expression
/// + 0.25 * behavioral_consistency
/// ```
fn compute_overall_index(composite: &CompositeScores) -> f64 {
    let index = TIME_INVESTMENT_WEIGHT * composite.psychological_investment
        + COMPLEXITY_WEIGHT * composite.attention_to_detail
        + COLOR_DIVERSITY_WEIGHT * composite.creative_expression
        + CONSISTENCY_WEIGHT * composite.behavioral_consistency;
    index.min(1.0)
}

//! Core data types for HTP drawing analysis
//!
//! This module defines the input telemetry records, the derived feature groups
//! and the report types that flow through the analysis pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Input telemetry
// ============================================================================

/// Telemetry captured for one drawing phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    /// Client-side phase identifier, carried through unread
    pub phase: Value,
    /// Elapsed time on this phase in milliseconds
    pub time_spent: u64,
    /// Number of discrete drawing actions
    pub stroke_count: u64,
    /// Color identifiers in order of use (duplicates allowed)
    pub colors_used: Vec<String>,
    /// Canvas coverage percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
}

impl PhaseRecord {
    /// Time spent converted to minutes
    pub fn minutes(&self) -> f64 {
        self.time_spent as f64 / MS_PER_MINUTE
    }

    /// Coverage percentage, 0 when absent
    pub fn coverage_or_default(&self) -> f64 {
        self.coverage.unwrap_or(0.0)
    }

    /// Number of color usages in this phase
    pub fn color_count(&self) -> usize {
        self.colors_used.len()
    }
}

/// A full drawing submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingSession {
    pub phases: Vec<PhaseRecord>,
}

/// Milliseconds per minute
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Positional metadata for a drawing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    /// Drawing subject
    pub name: &'static str,
    /// Psychological domain the subject is associated with
    pub psychological_domain: &'static str,
    /// Label used when ranking phases by time investment
    pub priority_label: &'static str,
}

/// House, Tree, Person in capture order
pub const PHASES: [PhaseInfo; 3] = [
    PhaseInfo {
        name: "House",
        psychological_domain: "Security & Family",
        priority_label: "Home & Security",
    },
    PhaseInfo {
        name: "Tree",
        psychological_domain: "Growth & Stability",
        priority_label: "Personal Growth",
    },
    PhaseInfo {
        name: "Person",
        psychological_domain: "Self-Image & Relations",
        priority_label: "Self-Image",
    },
];

/// Display name of the phase at `index`
pub fn phase_name(index: usize) -> String {
    PHASES
        .get(index)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| format!("Phase {}", index + 1))
}

// ============================================================================
// Feature groups
// ============================================================================

/// A phase ranked by the time invested in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasePriority {
    pub domain: String,
    pub time_minutes: f64,
    pub priority_rank: u32,
}

/// Time-based indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Total minutes across phases
    pub total_time: f64,
    /// Mean minutes per phase
    pub average_time: f64,
    /// Population variance of per-phase minutes
    pub time_variance: f64,
    /// Per-phase minutes in phase order
    pub time_distribution: Vec<f64>,
    /// Phases ranked by time spent
    pub phase_priorities: Vec<PhasePriority>,
    /// Minutes per stroke
    pub time_efficiency_score: f64,
}

/// Complexity and detail indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFeatures {
    pub total_strokes: u128,
    pub average_strokes: f64,
    pub stroke_variance: f64,
    /// Mean phase-to-phase stroke delta
    pub detail_progression: f64,
    /// Blend of stroke density and coverage (0-1)
    pub complexity_score: f64,
    /// Strokes plus color usages per minute
    pub artistic_intensity: f64,
}

/// Categorical level of emotional expression through color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmotionalExpressionLevel {
    Low,
    Moderate,
    High,
}

impl EmotionalExpressionLevel {
    /// Ordinal score on the 0-1 scale used by the composite scorer
    pub fn score(self) -> f64 {
        match self {
            EmotionalExpressionLevel::Low => 0.0,
            EmotionalExpressionLevel::Moderate => 0.5,
            EmotionalExpressionLevel::High => 1.0,
        }
    }
}

/// Color usage indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFeatures {
    pub total_unique_colors: usize,
    pub color_per_phase: Vec<usize>,
    /// Normalized Shannon entropy of color usage (0-1)
    pub color_diversity_score: f64,
    pub emotional_expression_level: EmotionalExpressionLevel,
    pub color_consistency: f64,
}

/// Cross-phase behavioral consistency (1 - coefficient of variation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyFeatures {
    pub time_consistency: f64,
    pub stroke_consistency: f64,
    pub color_consistency: f64,
    pub overall_consistency: f64,
}

/// Weighted composite indices, each capped at 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScores {
    pub psychological_investment: f64,
    pub creative_expression: f64,
    pub behavioral_consistency: f64,
    pub attention_to_detail: f64,
}

impl CompositeScores {
    /// Scores in declaration order, paired with their names
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("psychological_investment", self.psychological_investment),
            ("creative_expression", self.creative_expression),
            ("behavioral_consistency", self.behavioral_consistency),
            ("attention_to_detail", self.attention_to_detail),
        ]
    }
}

/// All feature groups plus the composites derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAnalysis {
    pub time_features: TimeFeatures,
    pub complexity_features: ComplexityFeatures,
    pub color_features: ColorFeatures,
    pub consistency_features: ConsistencyFeatures,
    pub composite_scores: CompositeScores,
}

// ============================================================================
// Classification
// ============================================================================

/// Archetype assigned by the rule-based classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalityType {
    Analytical,
    Creative,
    Efficient,
    Thoughtful,
}

impl PersonalityType {
    pub fn cluster_id(self) -> u8 {
        match self {
            PersonalityType::Analytical => 0,
            PersonalityType::Creative => 1,
            PersonalityType::Efficient => 2,
            PersonalityType::Thoughtful => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PersonalityType::Analytical => "Detail-oriented, systematic, consistent",
            PersonalityType::Creative => "Expressive, colorful, varied approach",
            PersonalityType::Efficient => "Quick, decisive, minimalist",
            PersonalityType::Thoughtful => "Reflective, thorough, balanced",
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub cluster_id: u8,
    pub personality_type: PersonalityType,
    pub description: String,
    /// Margin-based confidence (0.5-1.0)
    pub confidence_score: f64,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CognitiveStyle {
    #[serde(rename = "Systematic Processor")]
    Systematic,
    #[serde(rename = "Complex Processor")]
    Complex,
    #[serde(rename = "Global Processor")]
    Global,
    #[serde(rename = "Balanced Processor")]
    Balanced,
}

impl CognitiveStyle {
    pub fn label(self) -> &'static str {
        match self {
            CognitiveStyle::Systematic => "Systematic Processor",
            CognitiveStyle::Complex => "Complex Processor",
            CognitiveStyle::Global => "Global Processor",
            CognitiveStyle::Balanced => "Balanced Processor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveStyleAssessment {
    pub style: CognitiveStyle,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionStyle {
    Expressive,
    Selective,
    Reserved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteStability {
    Stable,
    Shifting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalExpressionAssessment {
    pub style: ExpressionStyle,
    pub palette_stability: PaletteStability,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyBand {
    #[serde(rename = "Highly Consistent")]
    High,
    #[serde(rename = "Moderately Consistent")]
    Moderate,
    Variable,
}

/// Behavioral dimension measured across phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorDimension {
    Time,
    Strokes,
    Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralPatterns {
    pub consistency_band: ConsistencyBand,
    pub overall_consistency: f64,
    /// Dimension with the lowest consistency
    pub most_variable_dimension: BehaviorDimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementBand {
    #[serde(rename = "Strong engagement")]
    Strong,
    #[serde(rename = "Moderate engagement")]
    Moderate,
    #[serde(rename = "Light engagement")]
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Weighted blend of the composite indices, capped at 1.0
    pub overall_index: f64,
    pub engagement_band: EngagementBand,
    pub summary: String,
}

/// Qualitative profile assembled from the computed features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychologicalProfile {
    pub cognitive_style: CognitiveStyleAssessment,
    pub emotional_expression: EmotionalExpressionAssessment,
    pub behavioral_patterns: BehavioralPatterns,
    pub psychological_priorities: Vec<PhasePriority>,
    pub overall_assessment: OverallAssessment,
}

// ============================================================================
// Insights and summary
// ============================================================================

/// Direction of per-phase time across the exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacingTrend {
    Accelerating,
    Decelerating,
    Steady,
    Mixed,
    #[serde(rename = "Single Phase")]
    SinglePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInsight {
    pub phase_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychological_domain: Option<String>,
    pub time_minutes: f64,
    pub stroke_count: u64,
    pub color_count: usize,
    pub coverage: f64,
    pub strokes_per_minute: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralInsights {
    pub phases: Vec<PhaseInsight>,
    pub pacing_trend: PacingTrend,
    pub dominant_phase: String,
    pub most_detailed_phase: String,
    pub most_colorful_phase: String,
}

/// Descriptive statistics for a continuous metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Descriptive statistics for a count metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountStats {
    pub mean: f64,
    pub std: f64,
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStatistics {
    pub time_stats: MetricStats,
    pub stroke_stats: CountStats,
    pub color_stats: CountStats,
}

/// Pearson correlations; `None` when a vector has no variance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCorrelations {
    pub time_stroke_correlation: Option<f64>,
    pub time_color_correlation: Option<f64>,
    pub stroke_color_correlation: Option<f64>,
}

/// Percentile of one phase's values relative to the other phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasePercentile {
    pub phase_name: String,
    pub time_percentile: f64,
    pub stroke_percentile: f64,
    pub color_percentile: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    pub descriptive_statistics: DescriptiveStatistics,
    pub correlations: FeatureCorrelations,
    pub percentile_rankings: Vec<PhasePercentile>,
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
}

/// Complete analysis output for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the report was generated (RFC3339)
    pub timestamp: String,
    pub producer: ReportProducer,
    pub feature_analysis: FeatureAnalysis,
    pub personality_cluster: ClassificationResult,
    pub psychological_profile: PsychologicalProfile,
    pub behavioral_insights: BehavioralInsights,
    pub recommendations: Vec<String>,
    pub statistical_summary: StatisticalSummary,
}

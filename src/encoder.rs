//! Report encoder
//!
//! Assembles the computed stages into an [`AnalysisReport`] and serializes it.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{AnalysisError, ErrorReport};
use crate::types::{
    AnalysisReport, BehavioralInsights, ClassificationResult, FeatureAnalysis,
    PsychologicalProfile, ReportProducer, StatisticalSummary,
};
use crate::{ANALYZER_VERSION, PRODUCER_NAME};

/// Computed stages that make up a report
pub struct ReportParts {
    pub feature_analysis: FeatureAnalysis,
    pub personality_cluster: ClassificationResult,
    pub psychological_profile: PsychologicalProfile,
    pub behavioral_insights: BehavioralInsights,
    pub recommendations: Vec<String>,
    pub statistical_summary: StatisticalSummary,
}

/// Report encoder
#[derive(Debug, Clone, Default)]
pub struct ReportEncoder {
    pretty: bool,
}

impl ReportEncoder {
    /// Encoder producing compact JSON
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Encoder producing pretty-printed JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Build the report stamped with `computed_at`
    pub fn encode(&self, parts: ReportParts, computed_at: DateTime<Utc>) -> AnalysisReport {
        AnalysisReport {
            timestamp: computed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ANALYZER_VERSION.to_string(),
            },
            feature_analysis: parts.feature_analysis,
            personality_cluster: parts.personality_cluster,
            psychological_profile: parts.psychological_profile,
            behavioral_insights: parts.behavioral_insights,
            recommendations: parts.recommendations,
            statistical_summary: parts.statistical_summary,
        }
    }

    /// Serialize a finished report
    pub fn to_json(&self, report: &AnalysisReport) -> Result<String, AnalysisError> {
        if self.pretty {
            serde_json::to_string_pretty(report).map_err(AnalysisError::JsonError)
        } else {
            serde_json::to_string(report).map_err(AnalysisError::JsonError)
        }
    }

    /// Serialize an error as `{"error": "..."}`
    pub fn error_to_json(&self, error: &AnalysisError) -> String {
        let report = ErrorReport::from(error);
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        encoded.unwrap_or_else(|_| r#"{"error":"Analysis failed"}"#.to_string())
    }
}

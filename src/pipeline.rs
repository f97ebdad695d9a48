//! Analysis pipeline orchestration
//!
//! This module provides the public API for drawing analysis. It runs the full
//! pipeline from submission JSON to report:
//!
//! Payload → Validator → Feature extractors → Composite scorer → Classifier
//! → Profile / Insights / Summary → Report

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::classifier::PersonalityClassifier;
use crate::config::AnalyzerConfig;
use crate::encoder::{ReportEncoder, ReportParts};
use crate::error::AnalysisError;
use crate::features::{
    ColorFeatureExtractor, ComplexityFeatureExtractor, ConsistencyFeatureExtractor,
    TimeFeatureExtractor,
};
use crate::insights::InsightGenerator;
use crate::logging::{AnalysisLog, TracingLog};
use crate::profile::ProfileGenerator;
use crate::scoring::CompositeScorer;
use crate::summary::SummaryGenerator;
use crate::types::{AnalysisReport, FeatureAnalysis, PhaseRecord};
use crate::validator::parse_session;

/// Analyze submission JSON and return report JSON (stateless, one-shot).
///
/// # Arguments
/// * `payload_json` - Submission JSON with a `phases` array
///
/// # Returns
/// Pretty-printed report JSON
///
/// # Example
/// ```ignore
/// let report_json = analyze_drawing(payload_json)?;
/// ```
pub fn analyze_drawing(payload_json: String) -> Result<String, AnalysisError> {
    DrawingAnalyzer::new().analyze_json(&payload_json)
}

/// Run the four feature extractors and the composite scorer
pub fn extract_features(phases: &[PhaseRecord], config: &AnalyzerConfig) -> FeatureAnalysis {
    // Stage 2: Feature groups (order-insensitive)
    let time_features = TimeFeatureExtractor::extract(phases);
    let complexity_features = ComplexityFeatureExtractor::extract(phases);
    let color_features = ColorFeatureExtractor::extract(phases);
    let consistency_features = ConsistencyFeatureExtractor::extract(phases);

    // Stage 3: Composite scores
    let composite_scores = CompositeScorer::new(config).score(
        &time_features,
        &complexity_features,
        &color_features,
        &consistency_features,
    );

    FeatureAnalysis {
        time_features,
        complexity_features,
        color_features,
        consistency_features,
        composite_scores,
    }
}

/// Run every derivation stage over validated phases
pub fn derive_parts(phases: &[PhaseRecord], config: &AnalyzerConfig) -> ReportParts {
    let feature_analysis = extract_features(phases, config);

    // Stage 4: Classification
    let personality_cluster = PersonalityClassifier::classify(&feature_analysis.composite_scores);

    // Stage 5: Profile, insights, summary
    let psychological_profile = ProfileGenerator::generate(&feature_analysis, &personality_cluster);
    let behavioral_insights = InsightGenerator::analyze(phases);
    let recommendations = InsightGenerator::recommend(&feature_analysis);
    let statistical_summary = SummaryGenerator::generate(phases);

    ReportParts {
        feature_analysis,
        personality_cluster,
        psychological_profile,
        behavioral_insights,
        recommendations,
        statistical_summary,
    }
}

/// Reusable analyzer with configuration and an injected log sink.
///
/// Holds no per-request state; one instance may serve many threads.
#[derive(Clone)]
pub struct DrawingAnalyzer {
    config: AnalyzerConfig,
    encoder: ReportEncoder,
    log: Arc<dyn AnalysisLog>,
}

impl Default for DrawingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingAnalyzer {
    /// Create an analyzer with default ceilings that logs through `tracing`
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            encoder: ReportEncoder::pretty(),
            log: Arc::new(TracingLog),
        }
    }

    /// Create an analyzer with custom normalization ceilings
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the log sink
    pub fn with_log(mut self, log: Arc<dyn AnalysisLog>) -> Self {
        self.log = log;
        self
    }

    /// Replace the report encoder (pretty or compact output)
    pub fn with_encoder(mut self, encoder: ReportEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a parsed payload, stamping the report with the current time
    pub fn analyze(&self, payload: Value) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_at(payload, Utc::now())
    }

    /// Analyze a parsed payload, stamping the report with `computed_at`
    ///
    /// Identical payloads and timestamps produce identical reports.
    pub fn analyze_at(
        &self,
        payload: Value,
        computed_at: DateTime<Utc>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let result = self.run(payload, computed_at);

        match &result {
            Ok(report) => self.log.completed(
                report.behavioral_insights.phases.len(),
                &report.personality_cluster,
            ),
            Err(e) => self.log.failed(e),
        }

        result
    }

    /// Analyze submission JSON and return report JSON
    pub fn analyze_json(&self, payload_json: &str) -> Result<String, AnalysisError> {
        let payload: Value = serde_json::from_str(payload_json).map_err(|e| {
            let error = AnalysisError::JsonError(e);
            self.log.failed(&error);
            error
        })?;
        let report = self.analyze(payload)?;
        self.encoder.to_json(&report)
    }

    /// Analyze submission JSON, returning either report JSON or `{"error": ...}`
    pub fn analyze_to_json(&self, payload_json: &str) -> String {
        match self.analyze_json(payload_json) {
            Ok(json) => json,
            Err(e) => self.encoder.error_to_json(&e),
        }
    }

    fn run(&self, payload: Value, computed_at: DateTime<Utc>) -> Result<AnalysisReport, AnalysisError> {
        // Stage 1: Validate and decode
        let session = parse_session(payload)?;

        // Stages 2-5 behind a fault boundary
        let parts = panic::catch_unwind(AssertUnwindSafe(|| {
            derive_parts(&session.phases, &self.config)
        }))
        .map_err(|cause| AnalysisError::ComputationFault(panic_message(cause.as_ref())))?;

        ensure_finite(&parts.feature_analysis)?;

        // Stage 6: Assemble report
        Ok(self.encoder.encode(parts, computed_at))
    }
}

/// Reject reports whose composite scores are NaN or infinite
fn ensure_finite(features: &FeatureAnalysis) -> Result<(), AnalysisError> {
    for (name, value) in features.composite_scores.named() {
        if !value.is_finite() {
            return Err(AnalysisError::ComputationFault(format!(
                "{name} is not a finite number"
            )));
        }
    }
    Ok(())
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected computation fault".to_string()
    }
}

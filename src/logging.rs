//! Analysis event logging
//!
//! The pipeline reports completion and failure through an injected
//! [`AnalysisLog`] instead of a process-wide logger. [`TracingLog`] forwards
//! events to `tracing`; hosts install whatever subscriber they prefer.

use crate::error::AnalysisError;
use crate::types::ClassificationResult;

/// Sink for pipeline lifecycle events
pub trait AnalysisLog: Send + Sync {
    /// A report was produced for `phase_count` phases
    fn completed(&self, phase_count: usize, classification: &ClassificationResult);

    /// The analysis ended with an error
    fn failed(&self, error: &AnalysisError);
}

/// Forwards analysis events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl AnalysisLog for TracingLog {
    fn completed(&self, phase_count: usize, classification: &ClassificationResult) {
        tracing::info!(
            phase_count,
            personality_type = ?classification.personality_type,
            confidence = classification.confidence_score,
            "Analysis completed for {phase_count} phases"
        );
    }

    fn failed(&self, error: &AnalysisError) {
        match error {
            AnalysisError::InvalidInput(_) => tracing::warn!(%error, "Analysis rejected"),
            _ => tracing::error!(%error, "Analysis error"),
        }
    }
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl AnalysisLog for NoopLog {
    fn completed(&self, _phase_count: usize, _classification: &ClassificationResult) {}

    fn failed(&self, _error: &AnalysisError) {}
}

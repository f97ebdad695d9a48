//! Error types for the HTP analyzer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message reported for any payload that fails the shape check
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data format";

/// Errors that can occur during analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    ComputationFault(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl AnalysisError {
    /// Shape-check failure with the fixed message
    pub fn invalid_input() -> Self {
        AnalysisError::InvalidInput(INVALID_INPUT_MESSAGE.to_string())
    }
}

/// Structured error object returned in place of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&AnalysisError> for ErrorReport {
    fn from(e: &AnalysisError) -> Self {
        ErrorReport {
            error: e.to_string(),
        }
    }
}

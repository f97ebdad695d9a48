//! Analyzer configuration
//!
//! Normalization ceilings used by the composite scorer. Defaults reproduce the
//! reference scoring model; hosts may load overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Default total-time ceiling (minutes) for psychological investment
pub const DEFAULT_TIME_CEILING_MINUTES: f64 = 15.0;

/// Default total-stroke ceiling for attention to detail
pub const DEFAULT_STROKE_CEILING: f64 = 300.0;

/// Tunable normalization constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Total drawing time (minutes) treated as full investment
    pub time_ceiling_minutes: f64,
    /// Total stroke count treated as full detail
    pub stroke_ceiling: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            time_ceiling_minutes: DEFAULT_TIME_CEILING_MINUTES,
            stroke_ceiling: DEFAULT_STROKE_CEILING,
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a configuration from JSON. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: AnalyzerConfig = serde_json::from_str(json)
            .map_err(|e| AnalysisError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(self).map_err(AnalysisError::JsonError)
    }

    /// Both ceilings must be finite and strictly positive
    pub fn validate(&self) -> Result<(), AnalysisError> {
        check_ceiling("time_ceiling_minutes", self.time_ceiling_minutes)?;
        check_ceiling("stroke_ceiling", self.stroke_ceiling)
    }
}

fn check_ceiling(name: &str, value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::ConfigError(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.time_ceiling_minutes, 15.0);
        assert_eq!(config.stroke_ceiling, 300.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"stroke_ceiling": 500}"#).unwrap();
        assert_eq!(
            config,
            AnalyzerConfig {
                time_ceiling_minutes: 15.0,
                stroke_ceiling: 500.0,
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_ceiling() {
        let result = AnalyzerConfig::from_json(r#"{"time_ceiling_minutes": 0}"#);
        assert!(matches!(result, Err(AnalysisError::ConfigError(_))));
    }

    #[test]
    fn test_round_trip_through_json() {
        let json = AnalyzerConfig::default().to_json().unwrap();
        let parsed = AnalyzerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, AnalyzerConfig::default());
    }
}

//! Input validation
//!
//! Presence-only shape check on the raw JSON payload. Types are checked later,
//! when the payload is decoded into [`DrawingSession`].

use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::DrawingSession;

/// Fields every phase record must carry
pub const REQUIRED_PHASE_FIELDS: [&str; 4] = ["phase", "timeSpent", "strokeCount", "colorsUsed"];

/// A phase that failed the presence check
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PhaseViolation {
    pub index: usize,
    pub missing_fields: Vec<String>,
}

/// Why a payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeViolation {
    NotAnObject,
    MissingPhases,
    PhasesNotAList,
    EmptyPhases,
    InvalidPhases { phases: Vec<PhaseViolation> },
}

/// Whether the payload passes the presence check
pub fn validate_input(payload: &Value) -> bool {
    check_shape(payload).is_ok()
}

/// Presence check with details about the first structural problem found
pub fn check_shape(payload: &Value) -> Result<(), ShapeViolation> {
    let object = payload.as_object().ok_or(ShapeViolation::NotAnObject)?;
    let phases = object.get("phases").ok_or(ShapeViolation::MissingPhases)?;
    let phases = phases.as_array().ok_or(ShapeViolation::PhasesNotAList)?;

    if phases.is_empty() {
        return Err(ShapeViolation::EmptyPhases);
    }

    let violations = validate_phases(phases);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ShapeViolation::InvalidPhases { phases: violations })
    }
}

/// List every phase that is missing required fields
pub fn validate_phases(phases: &[Value]) -> Vec<PhaseViolation> {
    phases
        .iter()
        .enumerate()
        .filter_map(|(index, phase)| {
            let missing_fields: Vec<String> = REQUIRED_PHASE_FIELDS
                .iter()
                .filter(|field| phase.get(**field).is_none())
                .map(|field| field.to_string())
                .collect();

            if missing_fields.is_empty() {
                None
            } else {
                Some(PhaseViolation {
                    index,
                    missing_fields,
                })
            }
        })
        .collect()
}

/// Shape-check and decode a payload into typed phase records
pub fn parse_session(payload: Value) -> Result<DrawingSession, AnalysisError> {
    if !validate_input(&payload) {
        return Err(AnalysisError::invalid_input());
    }

    serde_json::from_value(payload).map_err(|e| {
        AnalysisError::InvalidInput(format!("{}: {e}", crate::error::INVALID_INPUT_MESSAGE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_phase() -> Value {
        json!({"phase": 1, "timeSpent": 60000, "strokeCount": 10, "colorsUsed": ["red"]})
    }

    #[test]
    fn test_accepts_valid_payload() {
        let payload = json!({ "phases": [valid_phase(), valid_phase()] });
        assert!(validate_input(&payload));
    }

    #[test]
    fn test_rejects_empty_phases() {
        let payload = json!({ "phases": [] });
        assert!(!validate_input(&payload));
        assert_eq!(check_shape(&payload), Err(ShapeViolation::EmptyPhases));
    }

    #[test]
    fn test_rejects_missing_phases_key() {
        assert_eq!(check_shape(&json!({})), Err(ShapeViolation::MissingPhases));
        assert_eq!(check_shape(&json!([1, 2])), Err(ShapeViolation::NotAnObject));
        assert_eq!(
            check_shape(&json!({ "phases": "house" })),
            Err(ShapeViolation::PhasesNotAList)
        );
    }

    #[test]
    fn test_rejects_missing_colors_used() {
        let payload = json!({
            "phases": [
                valid_phase(),
                {"phase": 2, "timeSpent": 60000, "strokeCount": 10}
            ]
        });

        assert_eq!(
            check_shape(&payload),
            Err(ShapeViolation::InvalidPhases {
                phases: vec![PhaseViolation {
                    index: 1,
                    missing_fields: vec!["colorsUsed".to_string()],
                }]
            })
        );
    }

    #[test]
    fn test_presence_only_no_type_check() {
        // Wrong types still pass the presence check
        let payload = json!({
            "phases": [{"phase": 1, "timeSpent": "slow", "strokeCount": 1, "colorsUsed": []}]
        });
        assert!(validate_input(&payload));

        // but fail decoding
        let err = parse_session(payload).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
        assert!(err.to_string().starts_with("Invalid input data format: "));
    }

    #[test]
    fn test_parse_session_fixed_message() {
        let err = parse_session(json!({ "phases": [] })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input data format");
    }

    #[test]
    fn test_parse_session_decodes_records() {
        let payload = json!({
            "phases": [valid_phase()],
            "sessionId": "ignored"
        });
        let session = parse_session(payload).unwrap();
        assert_eq!(session.phases.len(), 1);
        assert_eq!(session.phases[0].stroke_count, 10);
    }

    #[test]
    fn test_phase_identifier_is_not_type_checked() {
        for id in [json!(null), json!(1.5), json!(-1), json!({"n": 1}), json!("tree")] {
            let payload = json!({
                "phases": [{"phase": id, "timeSpent": 60000, "strokeCount": 5, "colorsUsed": ["red"]}]
            });
            let session = parse_session(payload).unwrap();
            assert_eq!(session.phases[0].phase, id);
        }
    }
}

//! Feature extraction
//!
//! Four independent extractors turn validated phase records into named feature
//! groups. Each is a pure function of the records and may run in any order.
//!
//! Pipeline: Phase records → Time / Complexity / Color / Consistency features

pub mod color;
pub mod complexity;
pub mod consistency;
pub mod time;

pub use color::ColorFeatureExtractor;
pub use complexity::ComplexityFeatureExtractor;
pub use consistency::ConsistencyFeatureExtractor;
pub use time::TimeFeatureExtractor;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::PhaseRecord;

    /// Build a phase record from plain values
    pub fn phase(
        ordinal: u64,
        time_spent: u64,
        stroke_count: u64,
        colors: &[&str],
        coverage: Option<f64>,
    ) -> PhaseRecord {
        PhaseRecord {
            phase: ordinal.into(),
            time_spent,
            stroke_count,
            colors_used: colors.iter().map(|c| c.to_string()).collect(),
            coverage,
        }
    }

    /// Three uniform phases: 5 minutes, 50 strokes, one red each
    pub fn uniform_phases() -> Vec<PhaseRecord> {
        (1..=3)
            .map(|i| phase(i, 300_000, 50, &["red"], None))
            .collect()
    }

    /// Three phases with varied pacing and palette
    pub fn varied_phases() -> Vec<PhaseRecord> {
        vec![
            phase(1, 120_000, 10, &["red", "blue"], Some(20.0)),
            phase(2, 240_000, 30, &["green", "brown", "green"], Some(40.0)),
            phase(3, 360_000, 60, &["red", "yellow", "blue", "black"], Some(60.0)),
        ]
    }
}

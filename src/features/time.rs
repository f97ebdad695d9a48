//! Time-based feature extraction

use crate::features::complexity::total_strokes;
use crate::stats;
use crate::types::{PhasePriority, PhaseRecord, TimeFeatures, PHASES};

/// Extractor for time investment indicators
pub struct TimeFeatureExtractor;

impl TimeFeatureExtractor {
    /// Derive time features from phase records (minutes throughout)
    pub fn extract(phases: &[PhaseRecord]) -> TimeFeatures {
        let times: Vec<f64> = phases.iter().map(PhaseRecord::minutes).collect();

        TimeFeatures {
            total_time: times.iter().sum(),
            average_time: stats::mean(&times),
            time_variance: stats::variance(&times),
            phase_priorities: compute_phase_priorities(&times),
            time_efficiency_score: compute_time_efficiency(&times, total_strokes(phases)),
            time_distribution: times,
        }
    }
}

/// Rank phases by time spent, longest first
///
/// Domain labels pair with phases by position; a stable sort keeps capture
/// order for ties.
fn compute_phase_priorities(times: &[f64]) -> Vec<PhasePriority> {
    let mut pairs: Vec<(&str, f64)> = PHASES
        .iter()
        .map(|p| p.priority_label)
        .zip(times.iter().copied())
        .collect();

    pairs.sort_by(|a, b| b.1.total_cmp(&a.1));

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (domain, time_minutes))| PhasePriority {
            domain: domain.to_string(),
            time_minutes,
            priority_rank: i as u32 + 1,
        })
        .collect()
}

/// Minutes per stroke, 0 without strokes
fn compute_time_efficiency(times: &[f64], total_strokes: u128) -> f64 {
    if total_strokes == 0 {
        return 0.0;
    }
    times.iter().sum::<f64>() / total_strokes as f64
}

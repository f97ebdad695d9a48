//! Statistical summary of drawing behavior

use crate::stats::{self, round_to};
use crate::types::{
    phase_name, CountStats, DescriptiveStatistics, FeatureCorrelations, MetricStats,
    PhasePercentile, PhaseRecord, StatisticalSummary,
};

/// Generator for descriptive statistics, correlations and percentiles
pub struct SummaryGenerator;

impl SummaryGenerator {
    pub fn generate(phases: &[PhaseRecord]) -> StatisticalSummary {
        let times: Vec<f64> = phases.iter().map(PhaseRecord::minutes).collect();
        let strokes: Vec<u64> = phases.iter().map(|p| p.stroke_count).collect();
        let colors: Vec<u64> = phases.iter().map(|p| p.color_count() as u64).collect();

        let stroke_values: Vec<f64> = strokes.iter().map(|s| *s as f64).collect();
        let color_values: Vec<f64> = colors.iter().map(|c| *c as f64).collect();

        StatisticalSummary {
            descriptive_statistics: DescriptiveStatistics {
                time_stats: metric_stats(&times),
                stroke_stats: count_stats(&strokes),
                color_stats: count_stats(&colors),
            },
            correlations: compute_correlations(&times, &stroke_values, &color_values),
            percentile_rankings: compute_percentile_rankings(&times, &stroke_values, &color_values),
        }
    }
}

fn metric_stats(values: &[f64]) -> MetricStats {
    MetricStats {
        mean: round_to(stats::mean(values), 2),
        std: round_to(stats::std_dev(values), 2),
        min: round_to(values.iter().copied().fold(f64::INFINITY, f64::min), 2),
        max: round_to(values.iter().copied().fold(f64::NEG_INFINITY, f64::max), 2),
    }
}

fn count_stats(counts: &[u64]) -> CountStats {
    let values: Vec<f64> = counts.iter().map(|c| *c as f64).collect();
    CountStats {
        mean: round_to(stats::mean(&values), 2),
        std: round_to(stats::std_dev(&values), 2),
        min: counts.iter().copied().min().unwrap_or(0),
        max: counts.iter().copied().max().unwrap_or(0),
    }
}

/// Pairwise Pearson correlations rounded to 3 decimals
fn compute_correlations(times: &[f64], strokes: &[f64], colors: &[f64]) -> FeatureCorrelations {
    let rounded = |r: Option<f64>| r.map(|v| round_to(v, 3));
    FeatureCorrelations {
        time_stroke_correlation: rounded(stats::pearson(times, strokes)),
        time_color_correlation: rounded(stats::pearson(times, colors)),
        stroke_color_correlation: rounded(stats::pearson(strokes, colors)),
    }
}

/// Each phase's percentile within each metric, rounded to 1 decimal
fn compute_percentile_rankings(
    times: &[f64],
    strokes: &[f64],
    colors: &[f64],
) -> Vec<PhasePercentile> {
    (0..times.len())
        .map(|i| PhasePercentile {
            phase_name: phase_name(i),
            time_percentile: round_to(stats::percentile_rank(times, times[i]), 1),
            stroke_percentile: round_to(stats::percentile_rank(strokes, strokes[i]), 1),
            color_percentile: round_to(stats::percentile_rank(colors, colors[i]), 1),
        })
        .collect()
}

use crate::models::SampleStats;
use std::collections::BTreeMap;

/// Summary statistics over a sample. `None` for an empty sample; NaNs are
/// dropped first.
pub fn compute_sample_stats(values: &[f64]) -> Option<SampleStats> {
    let mut scores: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if scores.is_empty() {
        return None;
    }
    scores.sort_by(|a, b| a.total_cmp(b));

    let count = scores.len();
    let sum: f64 = scores.iter().sum();
    let mean = sum / count as f64;

    let variance = scores.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    let median = if count % 2 == 0 {
        (scores[count / 2 - 1] + scores[count / 2]) / 2.0
    } else {
        scores[count / 2]
    };

    Some(SampleStats {
        count,
        min: scores[0],
        max: scores[count - 1],
        mean,
        median,
        std_dev,
    })
}

/// Font sizes bucketed to the nearest whole pixel.
pub fn font_size_histogram(sizes_px: &[f64]) -> BTreeMap<u32, usize> {
    let mut histogram = BTreeMap::new();
    for size in sizes_px.iter().filter(|s| s.is_finite() && **s > 0.0) {
        *histogram.entry(size.round() as u32).or_insert(0) += 1;
    }
    histogram
}

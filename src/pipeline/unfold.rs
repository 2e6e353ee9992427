/// Strictly positive values of the raw sample, sorted ascending. Recomputed
/// on every scoring call; the raw sample is never mutated.
pub fn clean_sample(sample: &[f64]) -> Vec<f64> {
    let mut clean: Vec<f64> = sample
        .iter()
        .copied()
        .filter(|&x| x.is_finite() && x > 0.0)
        .collect();
    clean.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    clean
}

/// Consecutive spacings divided by their mean, normalizing to unit mean level
/// density. Fewer than two levels, or a degenerate all-duplicate sequence,
/// yields an empty spacing vector rather than dividing by zero.
pub fn unfold(levels: &[f64]) -> Vec<f64> {
    if levels.len() < 2 {
        return Vec::new();
    }
    let diffs: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    if mean <= 0.0 {
        return Vec::new();
    }
    diffs.iter().map(|d| d / mean).collect()
}

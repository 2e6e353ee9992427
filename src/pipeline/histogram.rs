use crate::model::outcome::{N_BINS, SPACING_MAX};

pub fn bin_width() -> f64 {
    SPACING_MAX / N_BINS as f64
}

/// Midpoints of the fixed equal-width binning over [0, SPACING_MAX].
pub fn bin_centers() -> [f64; N_BINS] {
    let width = bin_width();
    let mut centers = [0.0; N_BINS];
    for (i, c) in centers.iter_mut().enumerate() {
        *c = (i as f64 + 0.5) * width;
    }
    centers
}

/// Density histogram over [0, SPACING_MAX]: heights are normalized so the
/// histogram integrates to 1 over the domain. Non-finite and out-of-range
/// values are dropped; a value exactly on the upper edge lands in the last
/// bin. An input with no countable values yields all zeros.
pub fn density_histogram(values: &[f64]) -> [f64; N_BINS] {
    let width = bin_width();
    let mut counts = [0usize; N_BINS];
    let mut total = 0usize;
    for &v in values {
        if !v.is_finite() || v < 0.0 || v > SPACING_MAX {
            continue;
        }
        let idx = ((v / width) as usize).min(N_BINS - 1);
        counts[idx] += 1;
        total += 1;
    }

    let mut density = [0.0f64; N_BINS];
    if total == 0 {
        return density;
    }
    let norm = total as f64 * width;
    for (d, &c) in density.iter_mut().zip(counts.iter()) {
        *d = c as f64 / norm;
    }
    density
}

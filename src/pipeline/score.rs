use crate::model::outcome::{N_BINS, ScoreError, ScoreResult, Spectrum};
use crate::model::surmise::SurmiseProfile;
use crate::pipeline::histogram::{bin_centers, density_histogram};
use crate::pipeline::unfold::{clean_sample, unfold};

/// Additive floor applied to both densities before the divergence sum so no
/// bin ever evaluates log(0) or divides by zero.
const KL_FLOOR: f64 = 1e-10;

/// Scores how closely the sample's unfolded spacing statistics match the
/// Wigner-Dyson surmise. Pure function of its inputs.
pub fn run_score(
    profile: &SurmiseProfile,
    sample: &[f64],
    label: &str,
) -> Result<ScoreResult, ScoreError> {
    let clean = clean_sample(sample);
    if clean.len() < profile.min_positive_samples {
        tracing::warn!(
            "insufficient sample for {}: {} positive values, need {}",
            label,
            clean.len(),
            profile.min_positive_samples
        );
        return Err(ScoreError::InsufficientSample {
            label: label.to_string(),
            found: clean.len(),
            required: profile.min_positive_samples,
        });
    }

    let spacings = unfold(&clean);
    let centers = bin_centers();
    let empirical = density_histogram(&spacings);
    let mut theoretical = [0.0f64; N_BINS];
    for (t, &c) in theoretical.iter_mut().zip(centers.iter()) {
        *t = profile.wigner_pdf(c);
    }

    // The floor makes the divergence fractionally negative when the
    // empirical histogram is all zeros; clamp so the score never exceeds 100.
    let divergence = kl_divergence(&empirical, &theoretical).max(0.0);
    let score = 100.0 * (-divergence).exp();

    Ok(ScoreResult {
        label: label.to_string(),
        score,
        spectrum: Spectrum {
            centers,
            empirical,
            theoretical,
        },
    })
}

/// Relative entropy Σ p·ln(p/q) over the bins, both sides floor-adjusted.
/// Zero exactly when the empirical histogram matches the theoretical curve.
pub fn kl_divergence(empirical: &[f64; N_BINS], theoretical: &[f64; N_BINS]) -> f64 {
    let mut div = 0.0;
    for (&p, &q) in empirical.iter().zip(theoretical.iter()) {
        let p = p + KL_FLOOR;
        let q = q + KL_FLOOR;
        div += p * (p / q).ln();
    }
    div
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::synthetic::exponential_cumsum;
    use crate::model::outcome::SPACING_MAX;
    use crate::pipeline::histogram::bin_width;

    #[test]
    fn test_insufficient_sample_is_rejected() {
        let profile = SurmiseProfile::gue_v1();
        let sample: Vec<f64> = (1..=49).map(|i| i as f64).collect();
        let err = run_score(&profile, &sample, "short").unwrap_err();
        assert_eq!(
            err,
            ScoreError::InsufficientSample {
                label: "short".to_string(),
                found: 49,
                required: 50,
            }
        );
    }

    #[test]
    fn test_negatives_do_not_count_toward_gate() {
        let profile = SurmiseProfile::gue_v1();
        let mut sample: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        sample.extend((1..=40).map(|i| -(i as f64)));
        assert!(run_score(&profile, &sample, "mixed").is_err());
    }

    #[test]
    fn test_exactly_fifty_positives_scores() {
        let profile = SurmiseProfile::gue_v1();
        let sample: Vec<f64> = (1..=50).map(|i| i as f64).collect();
        let result = run_score(&profile, &sample, "gate").unwrap();
        assert!(result.score > 0.0 && result.score <= 100.0);
    }

    #[test]
    fn test_cumsum_sample_produces_populated_spectrum() {
        let profile = SurmiseProfile::gue_v1();
        let sample = exponential_cumsum(1000, 42);
        let result = run_score(&profile, &sample, "cumsum").unwrap();
        assert_eq!(result.spectrum.centers.len(), N_BINS);
        assert!(result.spectrum.centers[0] > 0.0);
        assert!(result.spectrum.centers[N_BINS - 1] < SPACING_MAX);
        assert!(result.score > 0.0 && result.score < 100.0);
        let area: f64 = result.spectrum.empirical.iter().sum::<f64>() * bin_width();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic_sequence_scores_low() {
        // Unit spacings concentrate in one bin far from the Wigner-Dyson
        // shape, so the divergence must discriminate it.
        let profile = SurmiseProfile::gue_v1();
        let sample: Vec<f64> = (1..=1000).map(|i| i as f64).collect();
        let result = run_score(&profile, &sample, "arithmetic").unwrap();
        assert!(result.score > 0.0);
        assert!(result.score < 30.0);

        let peak_bin = (1.0 / bin_width()) as usize;
        let peak_mass = result.spectrum.empirical[peak_bin] * bin_width();
        assert!((peak_mass - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_duplicate_sample_stays_in_bounds() {
        // Fifty identical positives pass the gate but unfold to no spacings,
        // so the empirical histogram is zero-filled; the score must still
        // land inside (0, 100].
        let profile = SurmiseProfile::gue_v1();
        let sample = vec![5.0; 50];
        let result = run_score(&profile, &sample, "duplicates").unwrap();
        assert!(result.spectrum.empirical.iter().all(|&d| d == 0.0));
        assert!(result.score > 0.0);
        assert!(result.score <= 100.0);
    }

    #[test]
    fn test_score_is_deterministic_bits() {
        let profile = SurmiseProfile::gue_v1();
        let sample = exponential_cumsum(500, 7);
        let a = run_score(&profile, &sample, "det").unwrap();
        let b = run_score(&profile, &sample, "det").unwrap();
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        for i in 0..N_BINS {
            assert_eq!(
                a.spectrum.empirical[i].to_bits(),
                b.spectrum.empirical[i].to_bits()
            );
        }
    }

    #[test]
    fn test_kl_divergence_zero_on_identical_distributions() {
        let mut p = [0.0f64; N_BINS];
        for (i, v) in p.iter_mut().enumerate() {
            *v = (i as f64 + 1.0) * 0.01;
        }
        assert_eq!(kl_divergence(&p, &p), 0.0);
        // score formula maps zero divergence to exactly 100
        assert_eq!(100.0 * (-kl_divergence(&p, &p)).exp(), 100.0);
    }

    #[test]
    fn test_kl_divergence_positive_on_mismatch() {
        let mut p = [0.0f64; N_BINS];
        let mut q = [0.0f64; N_BINS];
        p[0] = 10.0;
        q[20] = 10.0;
        assert!(kl_divergence(&p, &q) > 0.0);
    }
}

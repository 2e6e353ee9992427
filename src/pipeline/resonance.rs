use rustfft::{FftPlanner, num_complex::Complex};

use crate::model::outcome::{ScoreError, ScoreResult};
use crate::model::surmise::SurmiseProfile;
use crate::pipeline::score::run_score;

/// Searches for hidden order at the fixed resonance parameter: applies the
/// phase filter exp(i·η/(t+1)) to the series, takes the DFT magnitude, and
/// scores the resulting spectrum like any other sample.
pub fn run_resonance_scan(
    profile: &SurmiseProfile,
    sample: &[f64],
) -> Result<ScoreResult, ScoreError> {
    let label = format!("Resonance scan (eta={})", profile.resonance_eta);
    let magnitudes = phase_filtered_magnitudes(profile.resonance_eta, sample);
    run_score(profile, &magnitudes, &label)
}

/// Element-wise unit-magnitude phase rotation with phase η/(t+1), followed by
/// a forward DFT. Returns the magnitude spectrum, same length as the input.
pub fn phase_filtered_magnitudes(eta: f64, sample: &[f64]) -> Vec<f64> {
    let n = sample.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = sample
        .iter()
        .enumerate()
        .map(|(t, &x)| {
            let phase = eta / (t as f64 + 1.0);
            Complex::new(phase.cos(), phase.sin()) * x
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.iter().map(|c| c.norm()).collect()
}

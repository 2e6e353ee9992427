use std::f64::consts::PI;

/// Fixed constants of the analysis: the Wigner-Dyson surmise coefficients for
/// the Gaussian Unitary Ensemble and the tuned resonance parameter applied by
/// the scan filter. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct SurmiseProfile {
    pub a: f64,
    pub b: f64,
    pub resonance_eta: f64,
    pub min_positive_samples: usize,
}

impl SurmiseProfile {
    pub fn gue_v1() -> Self {
        Self {
            a: 32.0 / (PI * PI),
            b: 4.0 / PI,
            resonance_eta: 5.26,
            min_positive_samples: 50,
        }
    }

    /// Wigner-Dyson level-spacing density A·s²·e^(−B·s²).
    pub fn wigner_pdf(&self, s: f64) -> f64 {
        self.a * s * s * (-self.b * s * s).exp()
    }
}

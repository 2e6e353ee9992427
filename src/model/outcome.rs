use thiserror::Error;

/// Number of histogram bins over the spacing domain.
pub const N_BINS: usize = 39;

/// Upper edge of the spacing domain; unfolded spacings above this are ignored
/// by the histogram.
pub const SPACING_MAX: f64 = 3.0;

/// Empirical and theoretical spacing densities evaluated on the fixed binning.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub centers: [f64; N_BINS],
    pub empirical: [f64; N_BINS],
    pub theoretical: [f64; N_BINS],
}

/// One completed integrity analysis. Immutable; handed to the reporting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub label: String,
    pub score: f64,
    pub spectrum: Spectrum,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Recoverable: the sample has too few strictly positive values to unfold.
    #[error("insufficient sample for {label}: {found} positive values, need {required}")]
    InsufficientSample {
        label: String,
        found: usize,
        required: usize,
    },
}

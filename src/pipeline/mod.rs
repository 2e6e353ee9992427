pub mod histogram;
pub mod resonance;
pub mod score;
pub mod unfold;

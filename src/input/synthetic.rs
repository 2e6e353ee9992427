use rand::{Rng, SeedableRng, rngs::StdRng};

/// Cumulative sum of unit-mean exponential increments, the kind of
/// non-decreasing generic signal the demo analyzes. Deterministic for a given
/// seed. Increments come from inverse-CDF sampling, so every value is
/// strictly positive and the sequence is strictly increasing.
pub fn exponential_cumsum(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut acc = 0.0f64;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let u: f64 = rng.random();
        acc += -(1.0 - u).ln();
        out.push(acc);
    }
    out
}

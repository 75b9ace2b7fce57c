//! # dsep-synth
//!
//! Standard-normal noise for synthetic data generation (e.g. sampling the
//! exogenous terms of a structural causal model). No shared state with the
//! rule engine.

use rand::Rng;
use rand_distr::StandardNormal;

/// `len` standard-normal samples (mean 0, standard deviation 1) from the
/// thread-local RNG.
pub fn noise(len: usize) -> Vec<f64> {
    noise_with_rng(&mut rand::thread_rng(), len)
}

/// As [`noise`], with a caller-supplied RNG for reproducibility.
pub fn noise_with_rng<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}

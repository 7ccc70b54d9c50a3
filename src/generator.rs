//! Pseudo-random test-vector generation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::GeneratorConfig;

/// Draws `size` values uniformly, with replacement, from `[0, max_value]`.
pub fn generate_values<R: Rng + ?Sized>(size: usize, max_value: u32, rng: &mut R) -> Vec<i64> {
    (0..size)
        .map(|_| i64::from(rng.random_range(0..=max_value)))
        .collect()
}

/// Builds the random source described by `config`: a seeded `StdRng` when a
/// seed is configured, otherwise one seeded from the thread RNG.
pub fn rng_from_config(config: &GeneratorConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().next_u64()),
    }
}

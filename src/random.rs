//! Sources of random values used to initialize the neuron's weights.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Lower bound (inclusive) of the values drawn for initial weights.
pub const WEIGHT_LOW: f64 = 0.0;
/// Upper bound (exclusive) of the values drawn for initial weights.
pub const WEIGHT_HIGH: f64 = 2.0;

/// Something that produces real values uniformly distributed in `[0, 2)`.
pub trait RandomSource {
    /// Draw the next value.
    fn next_value(&mut self) -> f64;
}

/// A [`RandomSource`] backed by a random number generator and a uniform distribution.
#[derive(Debug, Clone)]
pub struct UniformSource<R> {
    rng: R,
    distribution: Uniform<f64>,
}

impl<R> UniformSource<R>
where
    R: Rng,
{
    /// Wrap the given generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            distribution: Uniform::new(WEIGHT_LOW, WEIGHT_HIGH),
        }
    }
}

impl UniformSource<StdRng> {
    /// Create a source seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Create a deterministic source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R> RandomSource for UniformSource<R>
where
    R: Rng,
{
    fn next_value(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

//! Pluggable source of uniform random integers.
use rand::Rng;

/// Strategy producing a uniformly distributed integer in the
/// inclusive range `[min, max]`.
///
/// Implementations must be safe for concurrent invocation; the
/// generator performs no locking of its own.
pub trait RandomnessProvider: Send + Sync {
    /// Uniform integer in `[min, max]`, both bounds inclusive.
    fn next(&self, max: usize, min: usize) -> usize;
}

/// Default randomness provider backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomnessProvider for OsRandom {
    fn next(&self, max: usize, min: usize) -> usize {
        let mut rng = rand::rngs::OsRng;
        rng.gen_range(min..=max)
    }
}

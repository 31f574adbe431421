//! Slot sampling strategies.
//!
//! The engine asks a [`SlotSampler`] which members of a slot's eligible
//! pool to assign. Production runs use [`RandomSampler`]; tests and
//! reproducible runs seed it or use [`InOrderSampler`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks which members of an eligible pool fill a slot.
pub trait SlotSampler {
    /// Returns `amount` distinct indices in `0..pool_size`, in assignment order.
    ///
    /// The engine never asks for more than `pool_size` indices.
    fn sample(&mut self, pool_size: usize, amount: usize) -> Vec<usize>;
}

/// Uniform random sampling without replacement.
///
/// # Example
///
/// ```
/// use shift_roster::scheduling::{RandomSampler, SlotSampler};
///
/// let mut a = RandomSampler::seeded(7);
/// let mut b = RandomSampler::seeded(7);
/// assert_eq!(a.sample(10, 3), b.sample(10, 3));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Reproducible sampler: the same seed yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SlotSampler for RandomSampler<R> {
    fn sample(&mut self, pool_size: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(pool_size);
        rand::seq::index::sample(&mut self.rng, pool_size, amount).into_vec()
    }
}

/// Deterministic sampler taking the first `amount` pool members.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrderSampler;

impl SlotSampler for InOrderSampler {
    fn sample(&mut self, pool_size: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(pool_size)).collect()
    }
}

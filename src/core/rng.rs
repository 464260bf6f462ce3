//! Deterministic random number generation for creature interactions.
//!
//! Every probabilistic operation on a creature takes a `&mut LabRng` instead
//! of reaching for an ambient process-wide source. Tests construct a `LabRng`
//! from a fixed seed and get the exact same mutation/no-mutation outcomes on
//! every run.
//!
//! ```
//! use xenolab::core::LabRng;
//!
//! let mut rng1 = LabRng::new(42);
//! let mut rng2 = LabRng::new(42);
//!
//! // Same seed produces identical decisions
//! assert_eq!(rng1.gen_bool(0.4), rng2.gen_bool(0.4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct LabRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LabRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and available via [`LabRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

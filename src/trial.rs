//! Trial generation: raw uniform draws turned into Bernoulli outcomes.
//!
//! Each trial draws `u ~ U[0, 1)` and converts when `u > 1 - true_rate`,
//! which happens with probability `true_rate`.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One of the two competing designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arm {
    /// Design A
    A,
    /// Design B
    B,
}

impl Arm {
    /// Both arms, in draw order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Draws simulated user exposures for one arm at a time.
///
/// The random source is injected, so any `Rng` works. Use
/// [`TrialGenerator::seeded`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct TrialGenerator<R> {
    rng: R,
}

impl<R: Rng> TrialGenerator<R> {
    /// Wrap an existing random source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `sample_size` independent trials at `true_rate`.
    ///
    /// Returns one outcome per trial (`true` = converted). A sample size of
    /// zero yields an empty vector.
    pub fn draw(&mut self, sample_size: usize, true_rate: f64) -> Vec<bool> {
        let threshold = 1.0 - true_rate;
        (0..sample_size)
            .map(|_| self.rng.gen::<f64>() > threshold)
            .collect()
    }

    /// Consume the generator and hand back its random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl TrialGenerator<ChaCha8Rng> {
    /// Deterministic generator: same seed, same outcome stream on every platform.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy; runs differ from one another.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}
